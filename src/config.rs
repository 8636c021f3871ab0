//! Configuration resolution for corona-city
//!
//! Priority order: command-line argument, then environment variable, then
//! TOML config file, then compiled default. clap covers the first two tiers
//! (derive + env); the TOML tier is an optional file named by `--config`.

use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 5731;
pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_API_URL: &str = "https://api.corona-zahlen.org";

/// Command-line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "corona-city")]
#[command(about = "Maps the German COVID-19 death toll to a comparably sized city")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "CORONA_CITY_PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "CORONA_CITY_BIND")]
    pub bind: Option<String>,

    /// Base URL of the corona-zahlen API
    #[arg(long, env = "CORONA_CITY_API_URL")]
    pub api_url: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long, env = "CORONA_CITY_CONFIG")]
    pub config: Option<PathBuf>,
}

/// TOML config file contents; every key optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub api_url: Option<String>,
}

/// Fully resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bind: String,
    pub api_url: String,
}

impl Config {
    /// Resolve configuration from arguments, config file, and defaults.
    ///
    /// A named config file that cannot be read or parsed is an error; an
    /// absent `--config` just skips the TOML tier.
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => load_toml(path)?,
            None => TomlConfig::default(),
        };

        Ok(Self {
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            bind: args
                .bind
                .clone()
                .or(file.bind)
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            api_url: args
                .api_url
                .clone()
                .or(file.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

fn load_toml(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read config failed ({}): {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse config failed ({}): {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::resolve(&Args::default()).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn toml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 8080\napi_url = \"http://localhost:9000\"").unwrap();

        let args = Args {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let config = Config::resolve(&args).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_url, "http://localhost:9000");
        // Key absent from the file falls through to the default
        assert_eq!(config.bind, DEFAULT_BIND);
    }

    #[test]
    fn args_override_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 8080").unwrap();

        let args = Args {
            port: Some(9090),
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let config = Config::resolve(&args).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/corona-city.toml")),
            ..Default::default()
        };
        assert!(matches!(Config::resolve(&args), Err(Error::Config(_))));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();

        let args = Args {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(Config::resolve(&args), Err(Error::Config(_))));
    }
}
