pub mod app;
pub mod config;
pub mod endpoints;
pub mod engine;
pub mod error;
pub mod loader;
pub mod map;
pub mod models;
pub mod normalize;
pub mod popup;
pub mod reader;
pub mod registry;
pub mod server;
pub mod traits;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::{Config, Source, TemporalDetection};
pub use server::MapServer;
