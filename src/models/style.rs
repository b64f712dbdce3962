use crate::models::feature::FeatureCollection;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    None,
}

impl From<bool> for Visibility {
    fn from(visible: bool) -> Self {
        if visible {
            Visibility::Visible
        } else {
            Visibility::None
        }
    }
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Circle,
    Symbol,
}

/// A GeoJSON source as the renderer consumes it.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: FeatureCollection,
    #[serde(rename = "generateId")]
    pub generate_id: bool, // Feature ids become their index, which click events report back
}

impl SourceSpec {
    pub fn geojson(data: FeatureCollection) -> Self {
        SourceSpec {
            kind: "geojson",
            data,
            generate_id: true,
        }
    }
}

/// One declarative render layer.
#[derive(Debug, Clone, Serialize)]
pub struct LayerSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub source: String,
    pub layout: Map<String, Value>,
    pub paint: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
}

impl LayerSpec {
    pub fn new(id: impl Into<String>, kind: LayerKind, source: &str) -> Self {
        LayerSpec {
            id: id.into(),
            kind,
            source: source.to_string(),
            layout: Map::new(),
            paint: Map::new(),
            filter: None,
        }
    }

    pub fn layout(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.layout.insert(key.to_string(), value.into());
        self
    }

    pub fn paint(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.paint.insert(key.to_string(), value.into());
        self
    }

    pub fn visibility(&self) -> Option<&str> {
        self.layout.get("visibility").and_then(Value::as_str)
    }
}

/// A mutation of the style after registration, replayed by the web page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StyleChange {
    LayoutProperty {
        layer: String,
        name: String,
        value: Value,
    },
    Filter {
        layer: String,
        filter: Option<Value>,
    },
}
