use crate::models::feature::as_number;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// Inclusive range predicate on a numeric property, in the renderer's
/// filter-expression language:
/// `["all", [">=", prop, lo], ["<=", prop, hi]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter {
    pub property: String,
    pub lo: f64,
    pub hi: f64,
}

impl RangeFilter {
    /// Window of `radius` on either side of `center` over the `start` property.
    pub fn around(center: f64, radius: f64) -> Self {
        RangeFilter {
            property: "start".to_string(),
            lo: center - radius,
            hi: center + radius,
        }
    }

    pub fn to_expression(&self) -> Value {
        json!([
            "all",
            [">=", self.property, self.lo],
            ["<=", self.property, self.hi]
        ])
    }

    /// Same test the renderer applies. Features without a numeric value fail.
    pub fn matches(&self, properties: &Map<String, Value>) -> bool {
        properties
            .get(&self.property)
            .and_then(as_number)
            .map(|v| v >= self.lo && v <= self.hi)
            .unwrap_or(false)
    }
}

impl Serialize for RangeFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_expression().serialize(serializer)
    }
}
