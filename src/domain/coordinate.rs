use crate::proximity::calculate_distance;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A point on the earth in degrees.
///
/// Constructing a coordinate directly does not validate the ranges, use [`Coordinate::try_new`] for input that comes
/// from a user. Deserialization always validates.
#[derive(Clone, Copy, Default, PartialEq, Debug, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }
        Ok(Coordinate { latitude, longitude })
    }

    /// Great-circle distance in kilometers, rounded to one decimal.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        calculate_distance(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum CoordinateError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    Latitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    Longitude(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(51.8615899, 4.3580323)]
    fn try_new_accepts_coordinates_in_range(#[case] latitude: f64, #[case] longitude: f64) {
        assert_eq!(Coordinate::try_new(latitude, longitude), Ok(Coordinate { latitude, longitude }));
    }

    #[rstest]
    #[case::latitude_too_large(90.1, 0.0, CoordinateError::Latitude(90.1))]
    #[case::latitude_too_small(-91.0, 0.0, CoordinateError::Latitude(-91.0))]
    #[case::longitude_too_large(0.0, 180.5, CoordinateError::Longitude(180.5))]
    #[case::longitude_too_small(0.0, -200.0, CoordinateError::Longitude(-200.0))]
    fn try_new_rejects_coordinates_out_of_range(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: CoordinateError) {
        assert_eq!(Coordinate::try_new(latitude, longitude), Err(expected));
    }

    #[test]
    fn try_new_rejects_nan() {
        assert!(Coordinate::try_new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn distance_to_delegates_to_haversine() {
        let equator = Coordinate::new(0.0, 0.0);
        let one_east = Coordinate::new(0.0, 1.0);

        assert_eq!(equator.distance_to(&one_east), 111.2);
    }

    #[test]
    fn display_uses_latitude_first() {
        assert_eq!(Coordinate::new(52.37, 4.89).to_string(), "52.37,4.89");
    }
}
