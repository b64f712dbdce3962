use crate::models::geometry::GeometryExtent;
use serde::Serialize;

/// Static description of one dataset plus the state the viewer keeps for it.
#[derive(Debug, Clone, Serialize)]
pub struct LayerDescriptor {
    pub name: String,
    pub url: String,
    pub color: String,
    pub title: String,
    pub fields: Vec<String>,
    pub link_title: Option<String>,
    pub shown: bool,
    pub visible: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub extent: Option<GeometryExtent>, // Filled in at load from the feature coordinates
}

impl LayerDescriptor {
    pub fn new(name: &str, url: &str, color: &str, title: &str) -> Self {
        LayerDescriptor {
            name: name.to_string(),
            url: url.to_string(),
            color: color.to_string(),
            title: title.to_string(),
            fields: Vec::new(),
            link_title: None,
            shown: false,
            visible: false,
            min: None,
            max: None,
            extent: None,
        }
    }

    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_link_title(mut self, link_title: &str) -> Self {
        self.link_title = Some(link_title.to_string());
        self
    }

    pub fn shown(mut self, shown: bool) -> Self {
        self.shown = shown;
        self
    }

    /// Both ends of the `start` range, when the layer has a time dimension.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        self.min.zip(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_requires_both_ends() {
        let mut layer = LayerDescriptor::new("a", "a.json", "red", "A");
        assert_eq!(layer.time_range(), None);
        layer.min = Some(0.0);
        assert_eq!(layer.time_range(), None);
        layer.max = Some(12.0);
        assert_eq!(layer.time_range(), Some((0.0, 12.0)));
    }
}
