pub mod model;
pub mod ports;

pub use model::{
    CatalogCategory, CatalogItem, GasPrices, PopulateSummary, Promotion, Review, SiteData,
};
pub use ports::{ConfigProvider, DataSource, Populator, Storage};
