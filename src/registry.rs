use crate::models::layer::LayerDescriptor;
use indexmap::IndexMap;

/// Name → descriptor, in registration order, plus the pointer to the layer
/// the slider and popups currently apply to.
#[derive(Debug, Default)]
pub struct LayerRegistry {
    layers: IndexMap<String, LayerDescriptor>,
    current: Option<String>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&LayerDescriptor> {
        self.layers.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut LayerDescriptor> {
        self.layers.get_mut(name)
    }

    /// Insert or replace. Replacing keeps the original position.
    pub fn set(&mut self, name: &str, layer: LayerDescriptor) {
        self.layers.insert(name.to_string(), layer);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.layers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.layers.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerDescriptor> {
        self.layers.values()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Point the slider and popups at `name`. Unknown names are ignored so the
    /// pointer never dangles.
    pub fn set_current(&mut self, name: &str) {
        if self.contains(name) {
            self.current = Some(name.to_string());
        } else {
            tracing::debug!(layer = name, "ignoring current-layer change to unknown layer");
        }
    }

    /// The layer whose visible flag is set, if any.
    pub fn visible_layer(&self) -> Option<&LayerDescriptor> {
        self.iter().find(|l| l.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(name: &str) -> LayerDescriptor {
        LayerDescriptor::new(name, &format!("{name}.json"), "red", name)
    }

    #[test]
    fn test_iteration_follows_registration_order() {
        let mut registry = LayerRegistry::new();
        for name in ["gilad", "achtia", "elijah"] {
            registry.set(name, layer(name));
        }
        registry.set("achtia", layer("achtia").with_fields(&["link"]));

        let names: Vec<_> = registry.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["gilad", "achtia", "elijah"]);
        assert_eq!(registry.get("achtia").unwrap().fields, ["link"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_current_starts_unset_and_rejects_unknown_names() {
        let mut registry = LayerRegistry::new();
        assert_eq!(registry.current(), None);

        registry.set("a", layer("a"));
        registry.set_current("missing");
        assert_eq!(registry.current(), None);

        registry.set_current("a");
        assert_eq!(registry.current(), Some("a"));
    }

    #[test]
    fn test_visible_layer() {
        let mut registry = LayerRegistry::new();
        registry.set("a", layer("a"));
        registry.set("b", layer("b"));
        assert!(registry.visible_layer().is_none());

        registry.get_mut("b").unwrap().visible = true;
        assert_eq!(registry.visible_layer().map(|l| l.name.as_str()), Some("b"));
    }
}
