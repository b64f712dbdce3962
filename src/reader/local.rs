use super::{DatasetReader, FetchResponse};
use crate::error::LoadError;
use crate::models::layer::LayerDescriptor;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Reads datasets from a folder on disk, answering like a static file server.
pub struct LocalDatasetReader {
    root: PathBuf,
}

impl LocalDatasetReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a relative dataset url inside the root. Anything that would
    /// escape the root is rejected.
    fn resolve(&self, url: &str) -> Option<PathBuf> {
        let relative = Path::new(url.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return None;
        }
        Some(self.root.join(relative))
    }
}

#[async_trait]
impl DatasetReader for LocalDatasetReader {
    async fn fetch(&self, layer: &LayerDescriptor) -> Result<FetchResponse, LoadError> {
        let Some(path) = self.resolve(&layer.url) else {
            return Ok(FetchResponse {
                status: 403,
                body: Vec::new(),
            });
        };

        match tokio::fs::read(&path).await {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(FetchResponse {
                status: 404,
                body: Vec::new(),
            }),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "dataset read failed");
                Ok(FetchResponse {
                    status: 500,
                    body: e.to_string().into_bytes(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_reads_existing_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), b"[]").unwrap();
        let reader = LocalDatasetReader::new(dir.path());

        let layer = LayerDescriptor::new("a", "a.json", "red", "A");
        let response = reader.fetch(&layer).await.unwrap();
        assert!(response.is_success());
        assert_eq!(response.body, b"[]");
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let dir = tempdir().unwrap();
        let reader = LocalDatasetReader::new(dir.path());

        let layer = LayerDescriptor::new("a", "missing.json", "red", "A");
        let response = reader.fetch(&layer).await.unwrap();
        assert_eq!(response.status, 404);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_parent_paths_are_refused() {
        let dir = tempdir().unwrap();
        let reader = LocalDatasetReader::new(dir.path().join("data"));

        let layer = LayerDescriptor::new("a", "../secret.json", "red", "A");
        let response = reader.fetch(&layer).await.unwrap();
        assert_eq!(response.status, 403);
    }
}
