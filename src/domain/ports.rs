use crate::domain::model::{PopulateSummary, SiteData};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn list_pages(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn read_page(&self, name: &str) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_page(
        &self,
        name: &str,
        html: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_url(&self) -> &str;
    fn pages_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait DataSource: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<serde_json::Value>;
}

#[async_trait]
pub trait Populator: Send + Sync {
    async fn fetch(&self) -> SiteData;
    async fn populate(&self, data: &SiteData) -> Result<PopulateSummary>;
}
