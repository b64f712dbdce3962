use crate::app::App;
use crate::config::{Config, Source};
use crate::endpoints::handlers::{
    features_handler, filter_handler, get_all_layers, popup_handler, style_handler,
    toggle_handler, webmap_handler,
};
use crate::loader::load_datasets;
use crate::reader::{DatasetReader, HttpDatasetReader, LocalDatasetReader};
use crate::utils::status::print_layer_summary;
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::services::ServeDir;

pub struct AppState {
    pub app: Mutex<App>,
    pub map_center: (f64, f64),
    pub map_zoom: f64,
}

pub struct MapServer {
    config: Config,
    state: AppState,
}

impl MapServer {
    /// Load every configured dataset and build the viewer state.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        if config.layers.is_empty() {
            anyhow::bail!("No layers provided in the configuration");
        }

        let reader: Box<dyn DatasetReader> = match &config.source {
            Source::Local(path) => Box::new(LocalDatasetReader::new(path.clone())),
            Source::Remote { base_url } => Box::new(HttpDatasetReader::new(base_url.clone())),
        };

        let report =
            load_datasets(reader.as_ref(), &config.layers, config.temporal_detection).await;
        print_layer_summary(&config.layers, &report);

        let state = AppState {
            app: Mutex::new(App::from_report(&config, report)),
            map_center: config.map_center,
            map_zoom: config.map_zoom,
        };
        Ok(Self { config, state })
    }

    pub fn router(self) -> Router {
        let state = Arc::new(self.state);
        let router = Router::new()
            .route("/", get(webmap_handler))
            .route("/map", get(webmap_handler))
            .route("/layers", get(get_all_layers))
            .route("/layers/{layer}/toggle", post(toggle_handler))
            .route("/style", get(style_handler))
            .route("/data/{layer}", get(features_handler))
            .route("/filter", post(filter_handler))
            .route("/popup", post(popup_handler));

        let router = match &self.config.source {
            Source::Local(path) => router.nest_service("/datasets", ServeDir::new(path)),
            Source::Remote { .. } => router,
        };
        router.with_state(state)
    }

    pub async fn start(self) -> anyhow::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let loaded = self.state.app.lock().await.registry().len();
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        if loaded == 0 {
            println!(
                "⚠️ None of the configured datasets could be loaded.\n\n\
                Point --data-folder (or --base-url) at the location of the \
                JSON files. The map will still start with an empty toggler."
            );
        }

        println!(
            r#"
    🚀 pointmap serving on {}

    🌍 Browse the layers visually
       → http://{}/

    📚 Query for all layers (JSON)
       → http://{}/layers
            "#,
            addr, addr, addr
        );

        axum::serve(listener, app).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::layer::LayerDescriptor;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_new_rejects_empty_catalogue() {
        let config = Config {
            layers: Vec::new(),
            ..Config::default()
        };
        assert!(MapServer::new(config).await.is_err());
    }

    #[tokio::test]
    async fn test_new_loads_local_datasets() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), r#"[{"lan": 1, "lat": 2, "title": "x"}]"#)
            .unwrap();
        let config = Config {
            source: Source::Local(dir.path().to_path_buf()),
            layers: vec![
                LayerDescriptor::new("a", "a.json", "red", "A"),
                LayerDescriptor::new("b", "b.json", "blue", "B"),
            ],
            ..Config::default()
        };

        let server = MapServer::new(config).await.unwrap();
        let app = server.state.app.lock().await;
        assert_eq!(app.registry().names(), ["a"]);
        assert_eq!(app.layers().len(), 2);
    }
}
