use crate::models::feature::FeatureCollection;
use crate::models::filter::RangeFilter;
use crate::models::layer::LayerDescriptor;
use crate::models::style::{LayerKind, LayerSpec, SourceSpec, Visibility};
use crate::registry::LayerRegistry;
use crate::traits::RenderEngine;
use serde::Serialize;
use serde_json::json;

pub const EVENT_CIRCLES_SUFFIX: &str = "-event-circles";
pub const EVENT_LABELS_SUFFIX: &str = "-event-labels";

/// Render-layer ids of one layer: hit-target, event circles, event labels.
pub fn sub_layer_ids(name: &str) -> [String; 3] {
    [
        name.to_string(),
        format!("{name}{EVENT_CIRCLES_SUFFIX}"),
        format!("{name}{EVENT_LABELS_SUFFIX}"),
    ]
}

/// What a toggle request ended up doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "layer", rename_all = "lowercase")]
pub enum Toggle {
    Shown(String),
    Hidden(String),
    Unknown,
}

/// Bridges registry and feature state to a render engine.
pub struct MapAdapter<E: RenderEngine> {
    engine: E,
    filter_hit_targets: bool,
}

impl<E: RenderEngine> MapAdapter<E> {
    pub fn new(engine: E, filter_hit_targets: bool) -> Self {
        Self {
            engine,
            filter_hit_targets,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Add the source and the three stacked render layers for `layer`, and
    /// store it in the registry. A layer marked `shown` becomes the only
    /// visible one.
    pub fn register_layer(
        &mut self,
        registry: &mut LayerRegistry,
        mut layer: LayerDescriptor,
        features: FeatureCollection,
    ) {
        let name = layer.name.clone();
        let visibility = Visibility::from(layer.shown).as_str();
        let [hit_id, circles_id, labels_id] = sub_layer_ids(&name);

        self.engine.add_source(&name, SourceSpec::geojson(features));

        // Invisible oversized circles so small points are easy to click
        self.engine.add_layer(
            LayerSpec::new(hit_id, LayerKind::Circle, &name)
                .layout("visibility", visibility)
                .paint("circle-color", layer.color.as_str())
                .paint("circle-opacity", 0)
                .paint("circle-radius", 30),
        );
        self.engine.add_layer(
            LayerSpec::new(circles_id, LayerKind::Circle, &name)
                .layout("visibility", visibility)
                .paint("circle-color", layer.color.as_str())
                .paint("circle-opacity", 1),
        );
        self.engine.add_layer(
            LayerSpec::new(labels_id, LayerKind::Symbol, &name)
                .layout(
                    "text-field",
                    json!(["concat", ["to-string", ["get", "title_reverse"]]]),
                )
                .layout("text-font", json!(["Open Sans Bold", "Arial Unicode MS Bold"]))
                .layout("text-size", 20)
                .layout("visibility", visibility)
                .paint("text-color", "rgba(0,0,0,0.5)"),
        );

        layer.visible = layer.shown;
        let shown = layer.shown;
        registry.set(&name, layer);

        if shown {
            let others: Vec<String> = registry
                .iter()
                .filter(|l| l.visible && l.name != name)
                .map(|l| l.name.clone())
                .collect();
            for other in others {
                tracing::debug!(layer = %other, shown = %name, "hiding previously shown layer");
                self.set_visibility(registry, &other, false);
            }
            registry.set_current(&name);
        }
    }

    /// Show or hide all three render layers of `name`.
    pub fn set_visibility(&mut self, registry: &mut LayerRegistry, name: &str, visible: bool) {
        let Some(layer) = registry.get_mut(name) else {
            tracing::warn!(layer = name, "visibility change for unregistered layer");
            return;
        };
        let visibility = Visibility::from(visible);
        for id in sub_layer_ids(name) {
            self.engine
                .set_layout_property(&id, "visibility", json!(visibility.as_str()));
        }
        layer.visible = visible;
    }

    /// Restrict the named layer to features whose `start` lies within
    /// `radius` of `center`, bounds included.
    pub fn apply_time_filter(&mut self, name: &str, center: f64, radius: f64) -> RangeFilter {
        let filter = RangeFilter::around(center, radius);
        let [hit_id, circles_id, labels_id] = sub_layer_ids(name);

        self.engine.set_filter(&circles_id, Some(filter.to_expression()));
        self.engine.set_filter(&labels_id, Some(filter.to_expression()));
        if self.filter_hit_targets {
            self.engine.set_filter(&hit_id, Some(filter.to_expression()));
        }
        filter
    }

    /// Hide the layer if visible; otherwise hide every layer, show this one
    /// and make it current.
    pub fn toggle_layer(&mut self, registry: &mut LayerRegistry, name: &str) -> Toggle {
        let Some(layer) = registry.get(name) else {
            return Toggle::Unknown;
        };

        if layer.visible {
            self.set_visibility(registry, name, false);
            return Toggle::Hidden(name.to_string());
        }

        for other in registry.names() {
            self.set_visibility(registry, &other, false);
        }
        self.set_visibility(registry, name, true);
        registry.set_current(name);
        Toggle::Shown(name.to_string())
    }
}
