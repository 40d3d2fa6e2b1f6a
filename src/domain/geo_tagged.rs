use crate::domain::Coordinate;

/// Anything that may carry a position on the map.
pub trait GeoTaggable {
    fn coordinate(&self) -> Option<Coordinate>;
}

impl GeoTaggable for Coordinate {
    fn coordinate(&self) -> Option<Coordinate> {
        Some(*self)
    }
}

/// Wraps a record that has loose, optional latitude and longitude fields.
#[derive(Clone, PartialEq, Debug)]
pub enum GeoTagged<T> {
    Located { coordinate: Coordinate, item: T },
    Unlocated { item: T },
}

impl<T> GeoTagged<T> {
    /// Only a record with both a latitude and a longitude is located.
    pub fn new(item: T, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => GeoTagged::Located {
                coordinate: Coordinate { latitude, longitude },
                item,
            },
            _ => GeoTagged::Unlocated { item },
        }
    }

    pub fn item(&self) -> &T {
        match self {
            GeoTagged::Located { item, .. } => item,
            GeoTagged::Unlocated { item } => item,
        }
    }
}

impl<T> GeoTaggable for GeoTagged<T> {
    fn coordinate(&self) -> Option<Coordinate> {
        match self {
            GeoTagged::Located { coordinate, .. } => Some(*coordinate),
            GeoTagged::Unlocated { .. } => None,
        }
    }
}
