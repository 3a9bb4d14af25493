use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Reads pages from an input directory and writes populated pages to an
/// output directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    pages_path: String,
    output_path: String,
}

impl LocalStorage {
    pub fn new(pages_path: String, output_path: String) -> Self {
        Self {
            pages_path,
            output_path,
        }
    }
}

impl Storage for LocalStorage {
    async fn list_pages(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.pages_path)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("html") {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    async fn read_page(&self, name: &str) -> Result<String> {
        let full_path = Path::new(&self.pages_path).join(name);
        let html = fs::read_to_string(full_path)?;
        Ok(html)
    }

    async fn write_page(&self, name: &str, html: &str) -> Result<()> {
        let full_path = Path::new(&self.output_path).join(name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, html)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_lists_only_html_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<body></body>").unwrap();
        fs::write(dir.path().join("contact.html"), "<body></body>").unwrap();
        fs::write(dir.path().join("styles.css"), "body {}").unwrap();

        let storage = LocalStorage::new(
            dir.path().to_str().unwrap().to_string(),
            dir.path().to_str().unwrap().to_string(),
        );

        let names = storage.list_pages().await.unwrap();
        assert_eq!(names, vec!["contact.html", "index.html"]);
    }

    #[tokio::test]
    async fn test_write_creates_output_dir() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let nested = output.path().join("dist");

        let storage = LocalStorage::new(
            input.path().to_str().unwrap().to_string(),
            nested.to_str().unwrap().to_string(),
        );

        storage.write_page("index.html", "<body>x</body>").await.unwrap();
        let written = fs::read_to_string(nested.join("index.html")).unwrap();
        assert_eq!(written, "<body>x</body>");
    }

    #[tokio::test]
    async fn test_missing_pages_dir_is_an_error() {
        let storage = LocalStorage::new(
            "/nonexistent/sitefill-pages".to_string(),
            "/tmp".to_string(),
        );
        assert!(storage.list_pages().await.is_err());
    }
}
