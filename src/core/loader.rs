use crate::domain::model::SiteData;
use crate::domain::ports::DataSource;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const PROMOTIONS_PATH: &str = "data/promotions.json";
pub const REVIEWS_PATH: &str = "data/reviews.json";
pub const CATALOG_PATH: &str = "data/catalog.json";
pub const GAS_PRICES_PATH: &str = "data/gasprices.json";

/// Fetches JSON documents relative to a base URL.
pub struct HttpDataSource {
    client: Client,
    base_url: String,
}

impl HttpDataSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn get_json(&self, path: &str) -> Result<serde_json::Value> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("Fetching {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        tracing::debug!("Response status for {}: {}", path, status);
        if !status.is_success() {
            return Err(SiteError::HttpStatusError {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

/// Loads typed payloads and converts every failure into an absence.
/// Callers never see a load error; a failed file just means its section
/// stays empty.
pub struct JsonLoader<D: DataSource> {
    source: D,
}

impl<D: DataSource> JsonLoader<D> {
    pub fn new(source: D) -> Self {
        Self { source }
    }

    pub async fn load<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        match self.fetch(path).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path, e);
                None
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self.source.get_json(path).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Issue the four data loads concurrently. None of them depends on
    /// another and a failure in one leaves the rest untouched.
    pub async fn load_site_data(&self) -> SiteData {
        let (promotions, reviews, catalog, gas_prices) = tokio::join!(
            self.load(PROMOTIONS_PATH),
            self.load(REVIEWS_PATH),
            self.load(CATALOG_PATH),
            self.load(GAS_PRICES_PATH),
        );

        SiteData {
            promotions,
            reviews,
            catalog,
            gas_prices,
        }
    }
}
