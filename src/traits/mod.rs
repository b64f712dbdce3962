pub mod engine;
pub mod reader;

pub use engine::RenderEngine;
pub use reader::DatasetReader;
