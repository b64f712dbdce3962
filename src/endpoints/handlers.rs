use crate::endpoints::map::INDEX_HTML;
use crate::map::Toggle;
use crate::models::filter::RangeFilter;
use crate::models::layer::LayerDescriptor;
use crate::models::style::StyleChange;
use crate::server::AppState;
use crate::ui::SliderState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize)]
struct LayersResponse {
    center: [f64; 2],
    zoom: f64,
    current: Option<String>,
    layers: Vec<LayerDescriptor>,
    toggler: String,
    slider: SliderState,
    values: String,
}

#[derive(Serialize)]
struct ToggleResponse {
    toggle: Toggle,
    slider: SliderState,
    values: String,
    changes: Vec<StyleChange>,
}

#[derive(Deserialize)]
pub struct FilterRequest {
    pub value: f64,
}

#[derive(Serialize)]
struct FilterResponse {
    filter: Option<RangeFilter>,
    changes: Vec<StyleChange>,
}

/// Clicks further out than this many degrees are not a wrapped map copy.
pub const MAX_CLICK_LONGITUDE: f64 = 36_000.0;

#[derive(Deserialize)]
pub struct PopupRequest {
    pub layer: String,
    pub feature: usize,
    pub lng: f64,
}

pub async fn webmap_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

pub async fn get_all_layers(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let app = state.app.lock().await;
    let slider = app.slider().clone();
    let values = slider.labels_html();

    (
        StatusCode::OK,
        Json(LayersResponse {
            center: [state.map_center.0, state.map_center.1],
            zoom: state.map_zoom,
            current: app.registry().current().map(str::to_string),
            layers: app.layers(),
            toggler: app.toggler_html(),
            slider,
            values,
        }),
    )
}

pub async fn style_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let app = state.app.lock().await;
    match serde_json::to_value(app.engine()) {
        Ok(style) => (StatusCode::OK, Json(style)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

pub async fn features_handler(
    Path(layer): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let app = state.app.lock().await;
    match app.features(&layer) {
        Some(features) => (StatusCode::OK, Json(features.clone())).into_response(),
        None => (StatusCode::NOT_FOUND, format!("Layer not found: '{}'", layer)).into_response(),
    }
}

pub async fn toggle_handler(
    Path(layer): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let mut app = state.app.lock().await;
    let toggle = app.toggle_layer(&layer);
    if toggle == Toggle::Unknown {
        return (StatusCode::NOT_FOUND, format!("Layer not loaded: '{}'", layer)).into_response();
    }

    let slider = app.slider().clone();
    let values = slider.labels_html();
    let changes = app.drain_changes();
    (
        StatusCode::OK,
        Json(ToggleResponse {
            toggle,
            slider,
            values,
            changes,
        }),
    )
        .into_response()
}

pub async fn filter_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FilterRequest>,
) -> impl IntoResponse {
    let mut app = state.app.lock().await;
    let filter = app.slider_input(request.value);
    let changes = app.drain_changes();
    (StatusCode::OK, Json(FilterResponse { filter, changes }))
}

pub async fn popup_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PopupRequest>,
) -> impl IntoResponse {
    if !request.lng.is_finite() || request.lng.abs() > MAX_CLICK_LONGITUDE {
        return (
            StatusCode::BAD_REQUEST,
            format!("Invalid click longitude: {}", request.lng),
        )
            .into_response();
    }

    let app = state.app.lock().await;
    match app.click(&request.layer, request.feature, request.lng) {
        Some(popup) => (StatusCode::OK, Json(popup)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!(
                "Feature {} not found in layer '{}'",
                request.feature, request.layer
            ),
        )
            .into_response(),
    }
}
