pub mod cli;
pub mod site_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sitefill")]
#[command(about = "Populates static HTML pages with JSON data files")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8000")]
    pub data_url: String,

    #[arg(long, default_value = "./site")]
    pub pages_path: String,

    #[arg(long, default_value = "./dist")]
    pub output_path: String,

    #[arg(long, help = "Read source and path settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn data_url(&self) -> &str {
        &self.data_url
    }

    fn pages_path(&self) -> &str {
        &self.pages_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("data_url", &self.data_url)?;
        validate_path("pages_path", &self.pages_path)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            data_url: "http://localhost:8000".to_string(),
            pages_path: "./site".to_string(),
            output_path: "./dist".to_string(),
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_url() {
        let mut c = config();
        c.data_url = "not a url".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_paths() {
        let mut c = config();
        c.pages_path = String::new();
        assert!(c.validate().is_err());
    }
}
