use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record as received from a dataset endpoint.
pub type RawRecord = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
}

impl Geometry {
    pub fn coordinates(&self) -> [f64; 2] {
        match self {
            Geometry::Point { coordinates } => *coordinates,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub properties: Map<String, Value>,
    pub geometry: Geometry,
}

impl Feature {
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// A string property, with non-string values rendered as text. Whole
    /// numbers print without a fraction, as the browser would.
    pub fn property_text(&self, key: &str) -> Option<String> {
        self.properties.get(key).map(|v| match v {
            Value::String(s) => s.clone(),
            Value::Number(n) => n
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15)
                .map(|f| (f as i64).to_string())
                .unwrap_or_else(|| n.to_string()),
            other => other.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }
}

/// JavaScript truthiness of a JSON value, which is what the viewer uses to
/// decide whether a field is worth showing.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Numeric view of a value: numbers, or strings that parse as numbers.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feature_serializes_as_geojson() {
        let mut properties = Map::new();
        properties.insert("title".into(), json!("abc"));
        let collection = FeatureCollection {
            features: vec![Feature {
                properties,
                geometry: Geometry::Point {
                    coordinates: [34.9, 32.7],
                },
            }],
        };

        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": {"title": "abc"},
                    "geometry": {"type": "Point", "coordinates": [34.9, 32.7]}
                }]
            })
        );
    }

    #[test]
    fn test_property_text_prints_whole_floats_without_fraction() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "properties": {"start": 1948.0, "depth": 2.5, "count": 7, "title": "t"},
            "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
        }))
        .unwrap();
        assert_eq!(feature.property_text("start").as_deref(), Some("1948"));
        assert_eq!(feature.property_text("depth").as_deref(), Some("2.5"));
        assert_eq!(feature.property_text("count").as_deref(), Some("7"));
        assert_eq!(feature.property_text("title").as_deref(), Some("t"));
        assert_eq!(feature.property_text("missing"), None);
    }

    #[test]
    fn test_truthiness_follows_javascript() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!(1948)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn test_as_number_accepts_numeric_strings() {
        assert_eq!(as_number(&json!(5)), Some(5.0));
        assert_eq!(as_number(&json!(" 1948 ")), Some(1948.0));
        assert_eq!(as_number(&json!("spring")), None);
        assert_eq!(as_number(&json!(true)), None);
    }
}
