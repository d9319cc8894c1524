//! Generator configuration options.

use std::path::{Path, PathBuf};

use anyhow::Error;

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
    value::Uncased,
};
use serde::{Deserialize, Serialize};

/// The default page title.
pub const DEFAULT_TITLE: &str = "Animals lovers blog";

/// The default dataset asset path.
pub const DEFAULT_DATASET_PATH: &str = "./assets/users.json";

/// The default output path. `-` writes the page to stdout.
pub const DEFAULT_OUTPUT_PATH: &str = "-";

/// Generator configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    pub general: GeneralConfig,
    /// Dataset asset configuration.
    pub dataset: DatasetConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

impl Config {
    /// Reads the config from the environment.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Config, Error> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("MENAGERIE_"))
            .merge(Env::raw().only(&["DATASET", "OUTPUT"]).map(|k| {
                if k == "DATASET" {
                    Uncased::from("DATASET.PATH")
                } else {
                    Uncased::from("OUTPUT.PATH")
                }
            }))
            .extract()
            .map_err(Error::from)
    }
}

/// General page settings.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GeneralConfig {
    /// The page title.
    pub title: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Dataset asset settings.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DatasetConfig {
    /// The path of the user records asset.
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            path: PathBuf::from(DEFAULT_DATASET_PATH),
        }
    }
}

/// Output settings.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct OutputConfig {
    /// The path the rendered page is written to, or `-` for stdout.
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
