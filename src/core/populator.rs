use crate::core::loader::{HttpDataSource, JsonLoader};
use crate::core::page::Page;
use crate::domain::model::{PopulateSummary, SiteData};
use crate::domain::ports::{ConfigProvider, DataSource, Populator, Storage};
use crate::render;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{Datelike, Local};

/// The concrete pipeline: fetch the four data files once, then run every
/// section renderer over every page in storage and write the results out.
pub struct SitePopulator<S: Storage, C: ConfigProvider, D: DataSource> {
    storage: S,
    config: C,
    loader: JsonLoader<D>,
}

impl<S: Storage, C: ConfigProvider> SitePopulator<S, C, HttpDataSource> {
    pub fn new(storage: S, config: C) -> Self {
        let loader = JsonLoader::new(HttpDataSource::new(config.data_url()));
        Self {
            storage,
            config,
            loader,
        }
    }
}

impl<S: Storage, C: ConfigProvider, D: DataSource> SitePopulator<S, C, D> {
    pub fn with_source(storage: S, config: C, source: D) -> Self {
        Self {
            storage,
            config,
            loader: JsonLoader::new(source),
        }
    }
}

#[async_trait]
impl<S: Storage, C: ConfigProvider, D: DataSource> Populator for SitePopulator<S, C, D> {
    async fn fetch(&self) -> SiteData {
        self.loader.load_site_data().await
    }

    async fn populate(&self, data: &SiteData) -> Result<PopulateSummary> {
        let year = Local::now().year();
        let mut summary = PopulateSummary::default();

        tracing::debug!(
            "Populating pages from {} into {}",
            self.config.pages_path(),
            self.config.output_path()
        );

        for name in self.storage.list_pages().await? {
            let html = self.storage.read_page(&name).await?;
            let mut page = Page::new(html);

            let appended = render::populate_page(&mut page, data);
            render::form::set_footer_year(&mut page, year);
            render::form::wire_contact_form(&mut page);

            tracing::debug!("Populated {} with {} fragments", name, appended);
            self.storage.write_page(&name, page.html()).await?;

            summary.pages_written += 1;
            summary.fragments_appended += appended;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Promotion, Review};
    use crate::utils::error::SiteError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MemoryStorage {
        pages: Arc<Mutex<HashMap<String, String>>>,
        written: Arc<Mutex<HashMap<String, String>>>,
    }

    impl MemoryStorage {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: Arc::new(Mutex::new(
                    pages
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                )),
                written: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn written_page(&self, name: &str) -> Option<String> {
            let written = self.written.lock().await;
            written.get(name).cloned()
        }
    }

    impl Storage for MemoryStorage {
        async fn list_pages(&self) -> Result<Vec<String>> {
            let pages = self.pages.lock().await;
            let mut names: Vec<String> = pages.keys().cloned().collect();
            names.sort();
            Ok(names)
        }

        async fn read_page(&self, name: &str) -> Result<String> {
            let pages = self.pages.lock().await;
            pages.get(name).cloned().ok_or_else(|| {
                SiteError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Page not found: {}", name),
                ))
            })
        }

        async fn write_page(&self, name: &str, html: &str) -> Result<()> {
            let mut written = self.written.lock().await;
            written.insert(name.to_string(), html.to_string());
            Ok(())
        }
    }

    struct StaticSource {
        data: HashMap<&'static str, serde_json::Value>,
    }

    #[async_trait]
    impl DataSource for StaticSource {
        async fn get_json(&self, path: &str) -> Result<serde_json::Value> {
            self.data
                .get(path)
                .cloned()
                .ok_or_else(|| SiteError::HttpStatusError {
                    path: path.to_string(),
                    status: 404,
                })
        }
    }

    struct TestConfig;

    impl ConfigProvider for TestConfig {
        fn data_url(&self) -> &str {
            "http://localhost:8000"
        }

        fn pages_path(&self) -> &str {
            "site"
        }

        fn output_path(&self) -> &str {
            "dist"
        }
    }

    fn sample_source() -> StaticSource {
        let mut data = HashMap::new();
        data.insert(
            "data/promotions.json",
            serde_json::to_value(vec![
                Promotion {
                    title: "Promo A".to_string(),
                    description: "a".to_string(),
                    image: "img/a.jpg".to_string(),
                },
                Promotion {
                    title: "Promo B".to_string(),
                    description: "b".to_string(),
                    image: "img/b.jpg".to_string(),
                },
            ])
            .unwrap(),
        );
        data.insert(
            "data/reviews.json",
            serde_json::to_value(vec![Review {
                name: "Pat".to_string(),
                comment: "Good".to_string(),
                rating: 4,
            }])
            .unwrap(),
        );
        StaticSource { data }
    }

    #[tokio::test]
    async fn test_populate_writes_every_page() {
        let storage = MemoryStorage::new(&[
            ("index.html", "<body><div id=\"promotions-preview\"></div><span id=\"year\"></span></body>"),
            ("reviews.html", "<body><div id=\"reviews-list\"></div></body>"),
        ]);
        let populator =
            SitePopulator::with_source(storage.clone(), TestConfig, sample_source());

        let data = populator.fetch().await;
        assert!(data.promotions.is_some());
        assert!(data.catalog.is_none()); // not served by the source

        let summary = populator.populate(&data).await.unwrap();
        assert_eq!(summary.pages_written, 2);
        assert_eq!(summary.fragments_appended, 3); // 2 preview cards + 1 review

        let index = storage.written_page("index.html").await.unwrap();
        assert!(index.contains("Promo A"));
        assert!(index.contains("Promo B"));
        let year = Local::now().year().to_string();
        assert!(index.contains(&format!("<span id=\"year\">{}</span>", year)));

        let reviews = storage.written_page("reviews.html").await.unwrap();
        assert!(reviews.contains("Pat"));
        assert_eq!(reviews.matches("fas fa-star").count(), 4);
    }

    #[tokio::test]
    async fn test_contact_page_gets_form_script() {
        let storage = MemoryStorage::new(&[(
            "contact.html",
            "<body><form id=\"contact-form\"></form></body>",
        )]);
        let populator =
            SitePopulator::with_source(storage.clone(), TestConfig, sample_source());

        let data = populator.fetch().await;
        populator.populate(&data).await.unwrap();

        let contact = storage.written_page("contact.html").await.unwrap();
        assert!(contact.contains("e.preventDefault()"));
    }

    #[tokio::test]
    async fn test_pages_without_containers_pass_through() {
        let original = "<body><h1>About us</h1></body>";
        let storage = MemoryStorage::new(&[("about.html", original)]);
        let populator =
            SitePopulator::with_source(storage.clone(), TestConfig, sample_source());

        let data = populator.fetch().await;
        let summary = populator.populate(&data).await.unwrap();

        assert_eq!(summary.fragments_appended, 0);
        let about = storage.written_page("about.html").await.unwrap();
        assert_eq!(about, original);
    }
}
