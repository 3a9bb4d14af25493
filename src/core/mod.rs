pub mod engine;
pub mod loader;
pub mod page;
pub mod populator;

pub use crate::domain::model::{PopulateSummary, SiteData};
pub use crate::domain::ports::{ConfigProvider, DataSource, Populator, Storage};
pub use crate::utils::error::Result;
