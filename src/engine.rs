use crate::models::style::{LayerSpec, SourceSpec, StyleChange};
use crate::traits::RenderEngine;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// In-process renderer state: the declarative style plus a log of the changes
/// made since the browser last synchronised.
#[derive(Debug, Default, Serialize)]
pub struct StyleEngine {
    sources: BTreeMap<String, SourceSpec>,
    layers: Vec<LayerSpec>,
    #[serde(skip)]
    pending: Vec<StyleChange>,
}

impl StyleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(&self, id: &str) -> Option<&LayerSpec> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    pub fn source(&self, id: &str) -> Option<&SourceSpec> {
        self.sources.get(id)
    }

    /// Hand over the changes recorded since the previous call.
    pub fn drain_changes(&mut self) -> Vec<StyleChange> {
        std::mem::take(&mut self.pending)
    }
}

impl RenderEngine for StyleEngine {
    fn add_source(&mut self, id: &str, source: SourceSpec) {
        self.sources.insert(id.to_string(), source);
    }

    fn add_layer(&mut self, layer: LayerSpec) {
        if self.layer(&layer.id).is_some() {
            tracing::warn!(layer = %layer.id, "render layer registered twice, replacing");
            self.layers.retain(|l| l.id != layer.id);
        }
        self.layers.push(layer);
    }

    fn set_layout_property(&mut self, layer: &str, name: &str, value: Value) {
        let Some(spec) = self.layers.iter_mut().find(|l| l.id == layer) else {
            tracing::warn!(layer, property = name, "layout change for unknown render layer");
            return;
        };
        spec.layout.insert(name.to_string(), value.clone());
        self.pending.push(StyleChange::LayoutProperty {
            layer: layer.to_string(),
            name: name.to_string(),
            value,
        });
    }

    fn set_filter(&mut self, layer: &str, filter: Option<Value>) {
        let Some(spec) = self.layers.iter_mut().find(|l| l.id == layer) else {
            tracing::warn!(layer, "filter for unknown render layer");
            return;
        };
        spec.filter = filter.clone();
        self.pending.push(StyleChange::Filter {
            layer: layer.to_string(),
            filter,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::style::LayerKind;
    use serde_json::json;

    #[test]
    fn test_changes_are_applied_and_logged() {
        let mut engine = StyleEngine::new();
        engine.add_layer(LayerSpec::new("a", LayerKind::Circle, "a").layout("visibility", "none"));

        engine.set_layout_property("a", "visibility", json!("visible"));
        engine.set_filter("a", Some(json!(["all"])));

        let layer = engine.layer("a").unwrap();
        assert_eq!(layer.visibility(), Some("visible"));
        assert_eq!(layer.filter, Some(json!(["all"])));

        let changes = engine.drain_changes();
        assert_eq!(changes.len(), 2);
        assert!(engine.drain_changes().is_empty());
    }

    #[test]
    fn test_unknown_layers_are_ignored() {
        let mut engine = StyleEngine::new();
        engine.set_layout_property("ghost", "visibility", json!("visible"));
        engine.set_filter("ghost", None);
        assert!(engine.drain_changes().is_empty());
    }
}
