pub mod http;
pub mod local;

pub use crate::traits::reader::{DatasetReader, FetchResponse};
pub use http::HttpDatasetReader;
pub use local::LocalDatasetReader;
