use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub comment: String,
    pub rating: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub category: String,
    pub items: Vec<CatalogItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasPrices {
    pub regular: f64,
    pub mid_grade: f64,
    pub premium: f64,
    pub last_updated: String,
}

/// The four optional payloads fetched at startup. `None` means the matching
/// data file failed to load and its section renders nothing.
#[derive(Debug, Clone, Default)]
pub struct SiteData {
    pub promotions: Option<Vec<Promotion>>,
    pub reviews: Option<Vec<Review>>,
    pub catalog: Option<Vec<CatalogCategory>>,
    pub gas_prices: Option<GasPrices>,
}

#[derive(Debug, Clone, Default)]
pub struct PopulateSummary {
    pub pages_written: usize,
    pub fragments_appended: usize,
}
