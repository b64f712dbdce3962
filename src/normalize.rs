use crate::config::TemporalDetection;
use crate::models::feature::{
    Feature, FeatureCollection, Geometry, RawRecord, as_number, is_truthy,
};
use crate::models::geometry::GeometryExtent;
use crate::models::layer::LayerDescriptor;
use serde_json::Value;

/// Codepoint reversal, used for the label layer so right-to-left titles come
/// out readable with the basemap's font shaping.
pub fn reverse_title(title: &str) -> String {
    title.chars().rev().collect()
}

/// Running minimum and maximum of `start` over every record that has a
/// numeric value for it.
pub fn start_range(records: &[RawRecord]) -> Option<(f64, f64)> {
    records
        .iter()
        .filter_map(|r| r.get("start").and_then(as_number))
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Whether the records describe a layer with a time dimension.
pub fn is_temporal(records: &[RawRecord], detection: TemporalDetection) -> bool {
    match detection {
        TemporalDetection::FirstRecord => records
            .first()
            .and_then(|r| r.get("start"))
            .map(is_truthy)
            .unwrap_or(false),
        TemporalDetection::AnyRecord => records
            .iter()
            .any(|r| r.get("start").and_then(as_number).is_some()),
    }
}

fn coordinates(record: &RawRecord) -> Option<[f64; 2]> {
    let lon = record.get("lan").and_then(as_number)?;
    let lat = record.get("lat").and_then(as_number)?;
    Some([lon, lat])
}

fn to_feature(record: &RawRecord) -> Option<Feature> {
    let coordinates = coordinates(record)?;

    let mut properties = serde_json::Map::with_capacity(record.len() + 1);
    for (key, value) in record {
        if key.is_empty() {
            continue;
        }
        properties.insert(key.clone(), value.clone());
    }
    if let Some(Value::String(title)) = record.get("title") {
        properties.insert("title_reverse".into(), Value::String(reverse_title(title)));
    }

    Some(Feature {
        properties,
        geometry: Geometry::Point { coordinates },
    })
}

/// Build the feature collection for one layer, recording its `start` range
/// and extent on the descriptor.
pub fn normalize_records(
    records: &[RawRecord],
    layer: &mut LayerDescriptor,
    detection: TemporalDetection,
) -> FeatureCollection {
    if is_temporal(records, detection) {
        if let Some((min, max)) = start_range(records) {
            layer.min = Some(min);
            layer.max = Some(max);
        }
    } else if records.iter().any(|r| r.get("start").and_then(as_number).is_some()) {
        tracing::warn!(
            layer = %layer.name,
            "first record has no start value but later records do; layer treated as non-temporal"
        );
    }

    let mut skipped = 0usize;
    let features: Vec<Feature> = records
        .iter()
        .filter_map(|record| {
            let feature = to_feature(record);
            if feature.is_none() {
                skipped += 1;
            }
            feature
        })
        .collect();

    if skipped > 0 {
        tracing::warn!(
            layer = %layer.name,
            skipped,
            "dropped records without numeric lan/lat"
        );
    }

    layer.extent = GeometryExtent::from_points(features.iter().map(|f| f.geometry.coordinates()));

    FeatureCollection { features }
}
