//! Loading documents from files and remote sources.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;
use url::Url;

use crate::fetch::{Fetch, FetchError};
use crate::models::Document;
use crate::parse::{parse, ParseError};

const GEOJSON_EXTENSION: &str = "geojson";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Resolve a file name, appending `.geojson` when it has no extension
pub fn resolve_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(GEOJSON_EXTENSION)
    }
}

/// Read and parse a GeoJSON file
pub fn load_path(path: impl AsRef<Path>) -> Result<Document, LoadError> {
    let path = resolve_path(path.as_ref());
    let bytes = std::fs::read(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    let document = parse(&bytes)?;
    info!(
        "Loaded {} ({:?}, {} features)",
        path.display(),
        document.kind(),
        document.features().len()
    );
    Ok(document)
}

/// Fetch and parse a remote GeoJSON document
pub async fn load_url<F: Fetch>(fetcher: &F, url: &str) -> Result<Document, LoadError> {
    let bytes = fetcher.fetch(url).await?;
    let document = parse(&bytes)?;
    info!(
        "Loaded {} ({:?}, {} features)",
        url,
        document.kind(),
        document.features().len()
    );
    Ok(document)
}

/// Whether a source string names an http(s) URL rather than a file
pub fn is_remote(source: &str) -> bool {
    Url::parse(source)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Load from a URL or a file path, whichever `source` names
pub async fn load_source<F: Fetch>(fetcher: &F, source: &str) -> Result<Document, LoadError> {
    if is_remote(source) {
        load_url(fetcher, source).await
    } else {
        load_path(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentKind;
    use std::collections::HashMap;
    use std::io::Write;

    /// In-memory fetcher keyed by URL
    struct StaticFetcher(HashMap<String, Vec<u8>>);

    impl Fetch for StaticFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.0
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Other(format!("no such document {}", url)))
        }
    }

    const ZONE: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {"name": "Z"},
         "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,1]]]}}
    ]}"#;

    fn fetcher() -> StaticFetcher {
        let mut docs = HashMap::new();
        docs.insert("https://zones.test/a.geojson".to_string(), ZONE.as_bytes().to_vec());
        docs.insert("https://zones.test/broken".to_string(), b"<html>".to_vec());
        StaticFetcher(docs)
    }

    #[test]
    fn test_resolve_path_appends_extension() {
        assert_eq!(resolve_path(Path::new("data/USA")), PathBuf::from("data/USA.geojson"));
        assert_eq!(resolve_path(Path::new("a.json")), PathBuf::from("a.json"));
    }

    #[test]
    fn test_load_path_with_and_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zones.geojson");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(ZONE.as_bytes())
            .unwrap();

        let doc = load_path(&path).unwrap();
        assert_eq!(doc.kind(), DocumentKind::FeatureCollection);
        assert_eq!(load_path(dir.path().join("zones")).unwrap(), doc);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_path(dir.path().join("absent.geojson")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_url() {
        let fetcher = fetcher();
        let doc = load_url(&fetcher, "https://zones.test/a.geojson").await.unwrap();
        assert_eq!(doc.features().len(), 1);

        let err = load_url(&fetcher, "https://zones.test/missing").await.unwrap_err();
        assert!(matches!(err, LoadError::Fetch(FetchError::Other(_))));

        let err = load_url(&fetcher, "https://zones.test/broken").await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(ParseError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_load_source_dispatch() {
        assert!(is_remote("https://zones.test/a.geojson"));
        assert!(!is_remote("/tmp/a.geojson"));
        assert!(!is_remote("USA"));

        let doc = load_source(&fetcher(), "https://zones.test/a.geojson").await.unwrap();
        assert_eq!(doc.features()[0].string_property("name"), Some("Z"));
    }
}
