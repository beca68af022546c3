use std::{env, fs, path::PathBuf};

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::foliowm::{AppEntry, Chrome, Placement, Registry, Screen};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to read config: {0}")]
    UnableToReadConfig(PathBuf),
    #[error("invalid toml file: {0}")]
    TomlSyntaxError(String),
    #[error("$HOME is not defined")]
    HomeNotDefined,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    /// Apps opened at boot, in order.
    pub startup: Vec<String>,
    pub screen: Screen,
    pub placement: Placement,
    pub chrome: Chrome,
    /// Replaces the built-in application list when present.
    pub apps: Option<Vec<AppEntry>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            startup: vec!["welcome".to_string()],
            screen: Screen::default(),
            placement: Placement::default(),
            chrome: Chrome::default(),
            apps: None,
        }
    }
}

impl Config {
    pub fn registry(&self) -> Registry {
        match &self.apps {
            Some(apps) => Registry::new(apps.clone()),
            None => Registry::default(),
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::TomlSyntaxError(e.to_string()))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let home_dir = match env::var("HOME") {
        Ok(home_dir) => home_dir,
        Err(_e) => return Err(ConfigError::HomeNotDefined),
    };

    let config_path: PathBuf = [home_dir.as_str(), ".config", "foliowm", "foliowm.toml"]
        .iter()
        .collect();
    let config_content = fs::read_to_string(config_path.clone())
        .map_err(|_| ConfigError::UnableToReadConfig(config_path))?;

    let config = parse_config(&config_content)?;
    info!("config loaded !");
    Ok(config)
}
