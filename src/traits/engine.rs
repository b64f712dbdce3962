use crate::models::style::{LayerSpec, SourceSpec};
use serde_json::Value;

/// The seam to the map renderer. Everything the viewer does to the map goes
/// through these four calls.
pub trait RenderEngine: Send {
    fn add_source(&mut self, id: &str, source: SourceSpec);
    fn add_layer(&mut self, layer: LayerSpec);
    fn set_layout_property(&mut self, layer: &str, name: &str, value: Value);
    fn set_filter(&mut self, layer: &str, filter: Option<Value>);
}
