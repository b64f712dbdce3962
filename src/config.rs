use crate::models::layer::LayerDescriptor;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Source {
    Local(PathBuf),
    Remote { base_url: String },
}

/// How a layer is recognised as having a time dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TemporalDetection {
    /// Only the first record is checked for a truthy `start`.
    #[default]
    FirstRecord,
    /// Any record with a numeric `start` makes the layer temporal.
    AnyRecord,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    pub layers: Vec<LayerDescriptor>,
    pub port: u16,
    pub window_radius: f64,
    pub temporal_detection: TemporalDetection,
    pub filter_hit_targets: bool,
    pub map_center: (f64, f64),
    pub map_zoom: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: Source::Local(PathBuf::from("data")),
            layers: default_layers(),
            port: 8000,
            window_radius: 10.0,
            temporal_detection: TemporalDetection::default(),
            filter_hit_targets: true,
            map_center: (34.9918, 32.7919),
            map_zoom: 13.0,
        }
    }
}

/// The compiled-in dataset catalogue.
pub fn default_layers() -> Vec<LayerDescriptor> {
    vec![
        LayerDescriptor::new("archiology", "archiology.json", "green", "סקר ארכיאולוגי")
            .with_fields(&["link"])
            .with_link_title("קישור לאתר רשות העתיקות"),
        LayerDescriptor::new(
            "collective_memory",
            "collective_memory.json",
            "blue",
            "זכרון קולקטיבי",
        )
        .with_fields(&[
            "informant",
            "place_name",
            "start",
            "imageURL",
            "imageTitle",
            "link",
        ]),
        LayerDescriptor::new("elijah", "elijah.json", "orange", "מעבדת אליהו").with_fields(&[
            "place_name",
            "source",
            "category",
            "link",
            "content",
        ]),
        LayerDescriptor::new("achtia", "achtia.json", "red", "אח'טיה").with_fields(&["link"]),
        LayerDescriptor::new("gilad", "gilad.json", "purple", "אתר ארכיאולוגי חוף דור")
            .with_fields(&["imageURL"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_catalogue_has_unique_names() {
        let layers = default_layers();
        let names: HashSet<_> = layers.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names.len(), layers.len());
        assert!(layers.iter().all(|l| !l.shown && !l.visible));
    }

    #[test]
    fn test_default_window_is_ten() {
        let config = Config::default();
        assert_eq!(config.window_radius, 10.0);
        assert_eq!(config.temporal_detection, TemporalDetection::FirstRecord);
    }
}
