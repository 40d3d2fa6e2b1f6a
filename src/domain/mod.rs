mod book;
mod coordinate;
mod geo_point;
mod geo_tagged;

pub use book::{Book, BookCondition, ListingType};
pub use coordinate::{Coordinate, CoordinateError};
pub use geo_point::GeoPoint;
pub use geo_tagged::{GeoTaggable, GeoTagged};

#[cfg(test)]
pub use book::tests::test_book;
