use crate::config::Config;
use crate::engine::StyleEngine;
use crate::loader::LoadReport;
use crate::map::{MapAdapter, Toggle};
use crate::models::feature::{Feature, FeatureCollection};
use crate::models::filter::RangeFilter;
use crate::models::layer::LayerDescriptor;
use crate::models::style::StyleChange;
use crate::popup::{Popup, build_popup};
use crate::registry::LayerRegistry;
use crate::ui::{SliderState, toggler_html};

/// All viewer state: the registry, the map, and the controls bound to them.
/// Every user event enters through one of the handler methods.
pub struct App {
    catalogue: Vec<LayerDescriptor>,
    registry: LayerRegistry,
    map: MapAdapter<StyleEngine>,
    slider: SliderState,
    window_radius: f64,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            catalogue: config.layers.clone(),
            registry: LayerRegistry::new(),
            map: MapAdapter::new(StyleEngine::new(), config.filter_hit_targets),
            slider: SliderState::default(),
            window_radius: config.window_radius,
        }
    }

    /// Register every loaded layer. Layers that failed to load stay in the
    /// toggler but are never registered.
    pub fn from_report(config: &Config, report: LoadReport) -> Self {
        let mut app = App::new(config);
        for loaded in report.loaded {
            app.map
                .register_layer(&mut app.registry, loaded.layer, loaded.features);
        }
        if let Some(current) = app.registry.current().map(str::to_string) {
            app.refresh_slider(&current);
        }
        // Initial registration is part of the style snapshot, not a change.
        app.map.engine_mut().drain_changes();
        app
    }

    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    pub fn engine(&self) -> &StyleEngine {
        self.map.engine()
    }

    pub fn slider(&self) -> &SliderState {
        &self.slider
    }

    /// Every configured layer, loaded or not, with the registry's state where
    /// the layer was registered.
    pub fn layers(&self) -> Vec<LayerDescriptor> {
        self.catalogue
            .iter()
            .map(|layer| {
                self.registry
                    .get(&layer.name)
                    .cloned()
                    .unwrap_or_else(|| layer.clone())
            })
            .collect()
    }

    pub fn toggler_html(&self) -> String {
        toggler_html(&self.catalogue)
    }

    pub fn features(&self, name: &str) -> Option<&FeatureCollection> {
        self.map.engine().source(name).map(|source| &source.data)
    }

    fn refresh_slider(&mut self, name: &str) {
        if let Some(layer) = self.registry.get(name) {
            self.slider = SliderState::for_layer(layer);
        }
    }

    /// Checkbox for `name` was toggled.
    pub fn toggle_layer(&mut self, name: &str) -> Toggle {
        let toggle = self.map.toggle_layer(&mut self.registry, name);
        match &toggle {
            Toggle::Shown(name) => self.refresh_slider(name),
            Toggle::Hidden(_) => {}
            Toggle::Unknown => {
                tracing::debug!(layer = name, "toggle for a layer that never loaded");
            }
        }
        toggle
    }

    /// Slider moved to `value`; filters the current layer.
    pub fn slider_input(&mut self, value: f64) -> Option<RangeFilter> {
        let Some(current) = self.registry.current().map(str::to_string) else {
            tracing::debug!(value, "slider input with no current layer");
            return None;
        };
        Some(self.map.apply_time_filter(&current, value, self.window_radius))
    }

    pub fn feature(&self, layer: &str, index: usize) -> Option<&Feature> {
        self.features(layer)?.get(index)
    }

    /// A feature of `layer` was clicked at longitude `click_lng`.
    pub fn click(&self, layer: &str, index: usize, click_lng: f64) -> Option<Popup> {
        let descriptor = self.registry.get(layer)?;
        let feature = self.feature(layer, index)?;
        Some(build_popup(feature, descriptor, click_lng))
    }

    pub fn drain_changes(&mut self) -> Vec<StyleChange> {
        self.map.engine_mut().drain_changes()
    }
}
