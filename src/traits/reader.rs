use crate::error::LoadError;
use crate::models::layer::LayerDescriptor;
use async_trait::async_trait;

/// Raw outcome of fetching one dataset.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn ok(body: Vec<u8>) -> Self {
        FetchResponse { status: 200, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait DatasetReader: Send + Sync {
    /// Fetch the dataset behind `layer.url`. A non-success status is still an
    /// `Ok`; `Err` is reserved for transport failures.
    async fn fetch(&self, layer: &LayerDescriptor) -> Result<FetchResponse, LoadError>;
}
