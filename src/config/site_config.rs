use crate::core::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML alternative to the CLI flags, for deployments that keep the site
/// settings next to the pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub source: SourceSection,
    pub pages: PagesSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub data_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesSection {
    pub input: String,
    pub output: String,
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the value of the environment variable; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for SiteConfig {
    fn data_url(&self) -> &str {
        &self.source.data_url
    }

    fn pages_path(&self) -> &str {
        &self.pages.input
    }

    fn output_path(&self) -> &str {
        &self.pages.output
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("site.name", &self.site.name)?;
        validate_url("source.data_url", &self.source.data_url)?;
        validate_path("pages.input", &self.pages.input)?;
        validate_path("pages.output", &self.pages.output)?;
        Ok(())
    }
}
