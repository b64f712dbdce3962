use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryExtent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl GeometryExtent {
    /// Bounding box of a set of lon/lat points, `None` when there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        points.into_iter().fold(None, |acc, [x, y]| {
            Some(match acc {
                None => GeometryExtent::from((x, y, x, y)),
                Some(e) => GeometryExtent {
                    minx: e.minx.min(x),
                    miny: e.miny.min(y),
                    maxx: e.maxx.max(x),
                    maxy: e.maxy.max(y),
                },
            })
        })
    }
}

impl From<(f64, f64, f64, f64)> for GeometryExtent {
    fn from(extent: (f64, f64, f64, f64)) -> Self {
        GeometryExtent {
            minx: extent.0, // minx
            miny: extent.1, // miny
            maxx: extent.2, // maxx
            maxy: extent.3, // maxy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_of_points() {
        let extent = GeometryExtent::from_points([[34.9, 32.7], [35.0, 32.8], [34.95, 32.6]]);
        assert_eq!(extent, Some(GeometryExtent::from((34.9, 32.6, 35.0, 32.8))));
    }

    #[test]
    fn test_extent_of_nothing() {
        assert_eq!(GeometryExtent::from_points(Vec::new()), None);
    }
}
