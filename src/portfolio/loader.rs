// SPDX-License-Identifier: MPL-2.0
//! Loading the portfolio document from disk or over HTTP.
//!
//! Loading happens once at startup. Any failure is reported as a
//! [`LoadError`]; nothing is retried and no partial data is returned.

use super::PortfolioData;
use reqwest::Url;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default document name, matching what the site generator publishes.
pub const DEFAULT_DATA_FILE: &str = "data.json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("network request failed: {0}")]
    Network(String),

    #[error("server responded with HTTP status {0}")]
    Status(u16),

    #[error("malformed portfolio document: {0}")]
    Malformed(String),

    #[error("portfolio document has no `tabs` list")]
    MissingTabs,
}

impl LoadError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "error-load-portfolio-io",
            LoadError::Network(_) | LoadError::Status(_) => "error-load-portfolio-network",
            LoadError::Malformed(_) | LoadError::MissingTabs => "error-load-portfolio-malformed",
        }
    }
}

/// Where the portfolio document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(Url),
}

impl DataSource {
    /// Interprets `raw` as an `http(s)` URL when it parses as one, otherwise
    /// as a filesystem path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match parse_http_url(raw) {
            Some(url) => DataSource::Url(url),
            None => DataSource::File(PathBuf::from(raw)),
        }
    }

    /// Resolves an image `path` from the document against this source.
    ///
    /// Relative paths are relative to the document itself: its parent
    /// directory for files, the document URL for remote sources.
    #[must_use]
    pub fn resolve(&self, path: &str) -> ImageLocation {
        if let Some(url) = parse_http_url(path) {
            return ImageLocation::Remote(url.to_string());
        }

        match self {
            DataSource::File(document) => {
                let candidate = Path::new(path);
                if candidate.is_absolute() {
                    return ImageLocation::Local(candidate.to_path_buf());
                }
                let base = document.parent().unwrap_or_else(|| Path::new(""));
                ImageLocation::Local(base.join(candidate))
            }
            DataSource::Url(document) => match document.join(path) {
                Ok(url) => ImageLocation::Remote(url.to_string()),
                Err(_) => ImageLocation::Remote(path.to_string()),
            },
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(DEFAULT_DATA_FILE))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// A resolved image location, ready to be displayed or opened.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageLocation {
    Local(PathBuf),
    Remote(String),
}

impl ImageLocation {
    /// String form suitable for handing to the system opener.
    #[must_use]
    pub fn to_open_target(&self) -> String {
        match self {
            ImageLocation::Local(path) => path.display().to_string(),
            ImageLocation::Remote(url) => url.clone(),
        }
    }
}

fn parse_http_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

/// Loads and validates the portfolio document.
pub async fn load(source: DataSource) -> Result<PortfolioData, LoadError> {
    log::info!("Loading portfolio from {source}");

    let bytes = match &source {
        DataSource::File(path) => read_file(path).await?,
        DataSource::Url(url) => fetch_bytes(url.clone()).await?,
    };

    let data = parse(&bytes)?;
    log::info!(
        "Loaded {} categories ({} images) from {source}",
        data.tabs.len(),
        data.image_count()
    );
    Ok(data)
}

/// Parses a document, checking the shape only as far as needed: the root must
/// be an object with a `tabs` list; `all_images` may be missing.
pub fn parse(bytes: &[u8]) -> Result<PortfolioData, LoadError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| LoadError::Malformed(e.to_string()))?;

    let Some(root) = value.as_object() else {
        return Err(LoadError::Malformed(
            "expected a JSON object at the top level".to_string(),
        ));
    };

    if !matches!(root.get("tabs"), Some(Value::Array(_))) {
        return Err(LoadError::MissingTabs);
    }

    serde_json::from_value(value).map_err(|e| LoadError::Malformed(e.to_string()))
}

async fn read_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    tokio::fs::read(path).await.map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Fetches a remote resource in full. Also used for remote thumbnails.
pub async fn fetch_bytes(url: Url) -> Result<Vec<u8>, LoadError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "tabs": [
            {"category": "Nature", "images": [
                {"path": "images/Nature/a.jpg", "name": "a.jpg", "drive_url": ""},
                {"path": "images/Nature/b.jpg", "name": "b.jpg", "drive_url": "https://drive.example/b"}
            ]}
        ]
    }"#;

    #[test]
    fn parse_accepts_document_without_all_images() {
        let data = parse(SAMPLE.as_bytes()).expect("valid document");
        assert_eq!(data.tabs.len(), 1);
        assert_eq!(data.image_count(), 2);
        assert!(data.all_images.is_none());
    }

    #[test]
    fn parse_rejects_missing_tabs() {
        assert_eq!(
            parse(br#"{"all_images": []}"#),
            Err(LoadError::MissingTabs)
        );
        assert_eq!(parse(br#"{"tabs": 3}"#), Err(LoadError::MissingTabs));
    }

    #[test]
    fn parse_rejects_non_object_root() {
        assert!(matches!(parse(b"[1, 2]"), Err(LoadError::Malformed(_))));
    }

    #[test]
    fn parse_rejects_invalid_json() {
        assert!(matches!(parse(b"not json"), Err(LoadError::Malformed(_))));
    }

    #[test]
    fn parse_rejects_image_without_path() {
        let doc = br#"{"tabs": [{"category": "x", "images": [{"name": "a"}]}]}"#;
        assert!(matches!(parse(doc), Err(LoadError::Malformed(_))));
    }

    #[test]
    fn data_source_detects_urls() {
        assert!(matches!(
            DataSource::parse("https://example.com/data.json"),
            DataSource::Url(_)
        ));
        assert_eq!(
            DataSource::parse("site/data.json"),
            DataSource::File(PathBuf::from("site/data.json"))
        );
        assert!(matches!(
            DataSource::parse("C:/photos/data.json"),
            DataSource::File(_)
        ));
    }

    #[test]
    fn file_source_resolves_relative_to_document() {
        let source = DataSource::File(PathBuf::from("/srv/site/data.json"));
        assert_eq!(
            source.resolve("images/Nature/a.jpg"),
            ImageLocation::Local(PathBuf::from("/srv/site/images/Nature/a.jpg"))
        );
    }

    #[test]
    fn url_source_joins_document_url() {
        let source = DataSource::parse("https://example.com/portfolio/data.json");
        assert_eq!(
            source.resolve("images/a.jpg"),
            ImageLocation::Remote("https://example.com/portfolio/images/a.jpg".to_string())
        );
    }

    #[test]
    fn absolute_image_urls_are_kept() {
        let source = DataSource::default();
        assert_eq!(
            source.resolve("https://cdn.example/a.jpg"),
            ImageLocation::Remote("https://cdn.example/a.jpg".to_string())
        );
    }

    #[tokio::test]
    async fn load_reads_local_file() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("data.json");
        std::fs::write(&path, SAMPLE).expect("write data");

        let data = load(DataSource::File(path)).await.expect("load succeeds");
        assert_eq!(data.tabs[0].category, "Nature");
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("missing.json");

        let err = load(DataSource::File(path.clone()))
            .await
            .expect_err("missing file must fail");
        assert!(matches!(&err, LoadError::Io { path: p, .. } if *p == path));
        assert_eq!(err.i18n_key(), "error-load-portfolio-io");
    }
}
