use crate::models::layer::LayerDescriptor;
use crate::utils::html::escape;
use serde::Serialize;

/// Bounds and tick labels of the time slider for the active layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SliderState {
    pub layer: Option<String>,
    pub enabled: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub labels: Vec<String>,
}

impl SliderState {
    /// Recompute for `layer`. A layer without a `start` range clears the
    /// labels and disables the slider.
    pub fn for_layer(layer: &LayerDescriptor) -> Self {
        let Some((min, max)) = layer.time_range() else {
            return SliderState {
                layer: Some(layer.name.clone()),
                ..Default::default()
            };
        };

        SliderState {
            layer: Some(layer.name.clone()),
            enabled: true,
            min: Some(min),
            max: Some(max),
            labels: tick_labels(min, max),
        }
    }

    /// Markup for the `#values` container.
    pub fn labels_html(&self) -> String {
        self.labels
            .iter()
            .map(|label| format!("<div>{}</div>", escape(label)))
            .collect()
    }
}

/// `min`, eight truncated steps of a tenth of the range starting at `min`,
/// then `max`.
pub fn tick_labels(min: f64, max: f64) -> Vec<String> {
    let interval = (max - min) / 10.0;
    let mut labels = Vec::with_capacity(10);
    labels.push(min.to_string());
    for i in 0..8 {
        labels.push(((min + interval * i as f64).trunc() as i64).to_string());
    }
    labels.push(max.to_string());
    labels
}

/// One checkbox per configured layer, pre-checked when shown.
pub fn toggler_html(layers: &[LayerDescriptor]) -> String {
    layers
        .iter()
        .map(|layer| {
            let name = escape(&layer.name);
            format!(
                r#"<div><input type="checkbox" {}class="toggler" id="toggle-{name}" name="{name}"/><label for="toggle-{name}">{}</label></div>"#,
                if layer.shown { "checked " } else { "" },
                escape(&layer.title),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_labels() {
        assert_eq!(
            tick_labels(1900.0, 2000.0),
            ["1900", "1900", "1910", "1920", "1930", "1940", "1950", "1960", "1970", "2000"]
        );
        assert_eq!(
            tick_labels(5.0, 15.0),
            ["5", "5", "6", "7", "8", "9", "10", "11", "12", "15"]
        );
    }

    #[test]
    fn test_tick_labels_truncate() {
        let labels = tick_labels(0.5, 3.5);
        assert_eq!(labels.first().map(String::as_str), Some("0.5"));
        assert_eq!(labels[1], "0");
        assert_eq!(labels[4], "1");
        assert_eq!(labels.last().map(String::as_str), Some("3.5"));
    }

    #[test]
    fn test_non_temporal_layer_disables_slider() {
        let layer = LayerDescriptor::new("achtia", "achtia.json", "red", "A");
        let slider = SliderState::for_layer(&layer);
        assert!(!slider.enabled);
        assert!(slider.labels.is_empty());
        assert_eq!(slider.labels_html(), "");
        assert_eq!(slider.layer.as_deref(), Some("achtia"));
    }

    #[test]
    fn test_temporal_layer_sets_bounds() {
        let mut layer = LayerDescriptor::new("m", "m.json", "blue", "M");
        layer.min = Some(5.0);
        layer.max = Some(15.0);
        let slider = SliderState::for_layer(&layer);
        assert!(slider.enabled);
        assert_eq!((slider.min, slider.max), (Some(5.0), Some(15.0)));
        assert!(slider.labels_html().starts_with("<div>5</div><div>5</div><div>6</div>"));
    }

    #[test]
    fn test_toggler_checkboxes() {
        let layers = vec![
            LayerDescriptor::new("a", "a.json", "red", "Alpha").shown(true),
            LayerDescriptor::new("b", "b.json", "red", "Beta"),
        ];
        let html = toggler_html(&layers);
        assert!(html.contains(r#"<input type="checkbox" checked class="toggler" id="toggle-a" name="a"/>"#));
        assert!(html.contains(r#"<input type="checkbox" class="toggler" id="toggle-b" name="b"/>"#));
        assert!(html.contains(r#"<label for="toggle-b">Beta</label>"#));
    }
}
