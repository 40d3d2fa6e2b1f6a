use crate::domain::Coordinate;
use serde::{Deserialize, Serialize};

/// A GeoJSON point. The coordinates are ordered `[longitude, latitude]`.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn from_coordinate(coordinate: Coordinate) -> Self {
        GeoPoint {
            kind: "Point".to_string(),
            coordinates: [coordinate.longitude, coordinate.latitude],
        }
    }

    pub fn to_coordinate(&self) -> Coordinate {
        let [longitude, latitude] = self.coordinates;
        Coordinate { latitude, longitude }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn to_coordinate_swaps_longitude_and_latitude() {
        let point = serde_json::from_value::<GeoPoint>(json!({ "type": "Point", "coordinates": [4.89, 52.37] })).unwrap();

        assert_eq!(point.to_coordinate(), Coordinate::new(52.37, 4.89));
    }

    #[test]
    fn from_coordinate_writes_longitude_first() {
        let point = GeoPoint::from_coordinate(Coordinate::new(52.37, 4.89));

        assert_eq!(serde_json::to_value(&point).unwrap(), json!({ "type": "Point", "coordinates": [4.89, 52.37] }));
    }
}
