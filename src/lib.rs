pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use config::{cli::LocalStorage, site_config::SiteConfig, CliConfig};
pub use core::engine::PopulateEngine;
pub use core::loader::{HttpDataSource, JsonLoader};
pub use core::page::Page;
pub use core::populator::SitePopulator;
pub use utils::error::{Result, SiteError};
