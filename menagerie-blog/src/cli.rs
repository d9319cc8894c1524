//! Menagerie command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use anyhow::Error;

use menagerie_model::Dataset;

use crate::derive::{animal_index, top_users_for_animal};

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Overrides the configured output path. `-` writes to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Subcommands.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Inspection commands.
///
/// Without a subcommand the generator renders the page.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prints every distinct animal, in first-seen order.
    Animals,
    Top(Top),
}

/// Prints the ranking of active lovers of one animal.
#[derive(clap::Args, Debug)]
pub struct Top {
    /// The animal name, matched exactly.
    pub animal: String,
}

/// Runs a command against a loaded dataset.
pub fn run_command(command: &Command, dataset: &Dataset) -> Result<(), Error> {
    match command {
        Command::Animals => animals(dataset),
        Command::Top(command) => top(command, dataset),
    }
}

fn animals(dataset: &Dataset) -> Result<(), Error> {
    for animal in animal_index(dataset) {
        println!("{}", animal);
    }

    Ok(())
}

fn top(command: &Top, dataset: &Dataset) -> Result<(), Error> {
    let users = top_users_for_animal(dataset, &command.animal);

    if users.is_empty() {
        tracing::info!("no active user loves `{}`", command.animal);
    }

    for user in users {
        println!("{}\t{} pts", user.full_name(), user.points);
    }

    Ok(())
}
