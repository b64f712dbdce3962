use crate::models::feature::{Feature, is_truthy};
use crate::models::layer::LayerDescriptor;
use crate::utils::html::escape;
use serde::Serialize;

pub const DEFAULT_LINK_TITLE: &str = "קישור";
pub const CONTAINER_START: &str = "container_start";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub lng_lat: [f64; 2],
    pub html: String,
}

fn truthy_text(feature: &Feature, key: &str) -> Option<String> {
    feature
        .property(key)
        .filter(|v| is_truthy(v))
        .and(feature.property_text(key))
}

/// Detail markup for a clicked feature, following the layer's field list.
pub fn popup_html(feature: &Feature, layer: &LayerDescriptor) -> String {
    let title = feature.property_text("title").unwrap_or_default();
    let mut html = vec!["<div>".to_string(), format!("<h3>{}</h3>", escape(&title))];
    let mut open_groups = 0usize;

    for field in &layer.fields {
        match field.as_str() {
            CONTAINER_START => {
                html.push("<div>".to_string());
                open_groups += 1;
            }
            "imageURL" => {
                if let Some(src) = truthy_text(feature, "imageURL") {
                    html.push(format!(
                        r#"<div><img style="width:100%" src="{}" /></div>"#,
                        escape(&src)
                    ));
                }
            }
            "link" => {
                if let Some(href) = truthy_text(feature, "link") {
                    let label = truthy_text(feature, "link_title")
                        .or_else(|| layer.link_title.clone())
                        .unwrap_or_else(|| DEFAULT_LINK_TITLE.to_string());
                    html.push(format!(
                        r#"<div><a href="{}" target="_blank">{}</a></div>"#,
                        escape(&href),
                        escape(&label)
                    ));
                }
            }
            other => {
                if let Some(value) = truthy_text(feature, other) {
                    html.push(format!("<div>{}</div>", escape(&value)));
                }
            }
        }
    }

    html.extend(std::iter::repeat_n("</div>".to_string(), open_groups));
    html.push("</div>".to_string());
    html.join("")
}

/// Move `anchor` by whole turns until it sits within 180° of the click, so the
/// popup lands on the copy of a wrapped world that was actually clicked.
/// The number of turns is computed in one step, so far-away clicks cost the
/// same as near ones.
pub fn unwrap_longitude(anchor: f64, click: f64) -> f64 {
    let delta = click - anchor;
    if !delta.is_finite() || delta.abs() <= 180.0 {
        return anchor;
    }
    let turns = ((delta.abs() - 180.0) / 360.0).ceil();
    anchor + 360.0 * turns * delta.signum()
}

pub fn build_popup(feature: &Feature, layer: &LayerDescriptor, click_lng: f64) -> Popup {
    let [lng, lat] = feature.geometry.coordinates();
    Popup {
        lng_lat: [unwrap_longitude(lng, click_lng), lat],
        html: popup_html(feature, layer),
    }
}
