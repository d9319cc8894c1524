use std::{
    fs,
    io::{self, Write as _},
    path::PathBuf,
};

use anyhow::{Context as _, Error};

use clap::Parser as _;

use menagerie_blog::{
    assets,
    cli::{Args, run_command},
    config::Config,
    page,
};

fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt::fmt()
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // load config
    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from("./menagerie.toml"));
    let config = Config::load(config_path)?;

    // load the dataset asset
    let dataset = assets::load(&config.dataset.path)?;

    tracing::info!(
        "rendering `{}` from {} user records",
        config.general.title,
        dataset.len()
    );

    // Execute command if it exists
    if let Some(command) = args.command {
        return run_command(&command, &dataset);
    }

    let html = page::render(&config.general.title, &dataset);

    let output = args.output.unwrap_or(config.output.path);

    if output.as_os_str() == "-" {
        io::stdout().write_all(html.as_bytes())?;
    } else {
        fs::write(&output, &html)
            .with_context(|| format!("failed to write page to `{}`", output.display()))?;

        tracing::info!("wrote page to {}", output.display());
    }

    Ok(())
}
