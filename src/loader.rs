use crate::config::TemporalDetection;
use crate::error::LoadError;
use crate::models::feature::{FeatureCollection, RawRecord};
use crate::models::layer::LayerDescriptor;
use crate::normalize::normalize_records;
use crate::traits::DatasetReader;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};

/// A dataset that made it through fetching and normalisation.
#[derive(Debug, Clone)]
pub struct LoadedLayer {
    pub layer: LayerDescriptor,
    pub features: FeatureCollection,
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<LoadedLayer>,
    pub skipped: Vec<(String, LoadError)>,
}

/// Turn a response body into records. Anything but a JSON array of objects is
/// rejected.
pub fn parse_records(url: &str, body: &[u8]) -> Result<Vec<RawRecord>, LoadError> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(|source| LoadError::Json {
        url: url.to_string(),
        source,
    })?;
    serde_json::from_value(value).map_err(|_| LoadError::Shape {
        url: url.to_string(),
    })
}

async fn load_one(
    reader: &dyn DatasetReader,
    mut layer: LayerDescriptor,
    detection: TemporalDetection,
) -> Result<LoadedLayer, LoadError> {
    let response = reader.fetch(&layer).await?;
    if !response.is_success() {
        return Err(LoadError::Status {
            url: layer.url.clone(),
            status: response.status,
        });
    }

    let records = parse_records(&layer.url, &response.body)?;
    let features = normalize_records(&records, &mut layer, detection);
    Ok(LoadedLayer { layer, features })
}

/// Fetch every dataset concurrently and wait for all of them. A failing
/// dataset is logged and skipped; the others still load.
pub async fn load_datasets(
    reader: &dyn DatasetReader,
    layers: &[LayerDescriptor],
    detection: TemporalDetection,
) -> LoadReport {
    let pb = ProgressBar::new(layers.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n[{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▇▆▅▄▃▂▁  "),
    );
    pb.set_message("Fetching datasets");

    let outcomes = join_all(layers.iter().cloned().map(|layer| {
        let pb = pb.clone();
        async move {
            let name = layer.name.clone();
            let outcome = load_one(reader, layer, detection).await;
            pb.inc(1);
            (name, outcome)
        }
    }))
    .await;

    let mut report = LoadReport::default();
    for (name, outcome) in outcomes {
        match outcome {
            Ok(loaded) => {
                tracing::info!(
                    layer = %name,
                    features = loaded.features.len(),
                    min = ?loaded.layer.min,
                    max = ?loaded.layer.max,
                    "layer loaded"
                );
                report.loaded.push(loaded);
            }
            Err(err @ LoadError::Transport { .. }) => {
                tracing::error!(layer = %name, error = %err, "dataset request failed");
                report.skipped.push((name, err));
            }
            Err(err) => {
                tracing::warn!(layer = %name, error = %err, "looks like there was a problem, skipping layer");
                report.skipped.push((name, err));
            }
        }
    }

    pb.finish_with_message(format!(
        "✅ {} of {} datasets loaded",
        report.loaded.len(),
        layers.len()
    ));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::LocalDatasetReader;
    use crate::traits::reader::FetchResponse;
    use async_trait::async_trait;
    use tempfile::tempdir;

    struct FailingReader;

    #[async_trait]
    impl DatasetReader for FailingReader {
        async fn fetch(&self, layer: &LayerDescriptor) -> Result<FetchResponse, LoadError> {
            if layer.name == "down" {
                return Err(LoadError::Transport {
                    url: layer.url.clone(),
                    message: "connection refused".into(),
                });
            }
            Ok(FetchResponse::ok(br#"[{"lan": 1, "lat": 2}]"#.to_vec()))
        }
    }

    fn layer(name: &str) -> LayerDescriptor {
        LayerDescriptor::new(name, &format!("{name}.json"), "red", name)
    }

    #[tokio::test]
    async fn test_partial_failures_are_skipped() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("good.json"),
            r#"[{"lan": 34.9, "lat": 32.7, "title": "abc", "start": 5},
                {"lan": 35.0, "lat": 32.8, "title": "xyz", "start": 15}]"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.json"), "[{").unwrap();
        std::fs::write(dir.path().join("object.json"), r#"{"lan": 1}"#).unwrap();

        let reader = LocalDatasetReader::new(dir.path());
        let layers = vec![layer("good"), layer("missing"), layer("broken"), layer("object")];
        let report = load_datasets(&reader, &layers, TemporalDetection::FirstRecord).await;

        assert_eq!(report.loaded.len(), 1);
        let good = &report.loaded[0];
        assert_eq!(good.layer.name, "good");
        assert_eq!(good.features.len(), 2);
        assert_eq!(good.layer.time_range(), Some((5.0, 15.0)));

        let skipped: Vec<_> = report.skipped.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(skipped, ["missing", "broken", "object"]);
        assert!(matches!(report.skipped[0].1, LoadError::Status { status: 404, .. }));
        assert!(matches!(report.skipped[1].1, LoadError::Json { .. }));
        assert!(matches!(report.skipped[2].1, LoadError::Shape { .. }));
    }

    #[tokio::test]
    async fn test_transport_failure_does_not_abort_batch() {
        let layers = vec![layer("down"), layer("up")];
        let report = load_datasets(&FailingReader, &layers, TemporalDetection::FirstRecord).await;

        assert_eq!(report.loaded.len(), 1);
        assert_eq!(report.loaded[0].layer.name, "up");
        assert!(matches!(report.skipped[0].1, LoadError::Transport { .. }));
    }
}
