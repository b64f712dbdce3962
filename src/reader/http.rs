use super::{DatasetReader, FetchResponse};
use crate::error::LoadError;
use crate::models::layer::LayerDescriptor;
use async_trait::async_trait;

/// Fetches datasets with plain HTTP GETs relative to a base URL.
pub struct HttpDatasetReader {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDatasetReader {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, layer: &LayerDescriptor) -> String {
        if layer.url.starts_with("http://") || layer.url.starts_with("https://") {
            return layer.url.clone();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            layer.url.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl DatasetReader for HttpDatasetReader {
    async fn fetch(&self, layer: &LayerDescriptor) -> Result<FetchResponse, LoadError> {
        let url = self.url_for(layer);
        let transport = |e: reqwest::Error| LoadError::Transport {
            url: url.clone(),
            message: e.to_string(),
        };

        let response = self.client.get(&url).send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport)?;

        Ok(FetchResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_urls_join_base() {
        let reader = HttpDatasetReader::new("http://localhost:8000/datasets/");
        let layer = LayerDescriptor::new("a", "/a.json", "red", "A");
        assert_eq!(reader.url_for(&layer), "http://localhost:8000/datasets/a.json");
    }

    #[test]
    fn test_absolute_urls_are_kept() {
        let reader = HttpDatasetReader::new("http://localhost:8000");
        let layer = LayerDescriptor::new("a", "https://example.org/a.json", "red", "A");
        assert_eq!(reader.url_for(&layer), "https://example.org/a.json");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let reader = HttpDatasetReader::new("http://127.0.0.1:1");
        let layer = LayerDescriptor::new("a", "a.json", "red", "A");
        let result = reader.fetch(&layer).await;
        assert!(matches!(result, Err(LoadError::Transport { .. })));
    }
}
