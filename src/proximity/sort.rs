use crate::domain::{Coordinate, GeoTaggable};
use crate::proximity::calculate_distance;
use ordered_float::OrderedFloat;
use serde::Serialize;

/// A copy of an item annotated with its distance in kilometers to a reference point.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct WithDistance<T> {
    #[serde(flatten)]
    pub item: T,
    pub distance: Option<f64>,
}

/// Annotates every item with its distance to the user and sorts them, nearest first.
///
/// Items without a coordinate get no distance and end up last, in the order they were given.
pub fn sort_by_distance<T>(items: &[T], user_latitude: f64, user_longitude: f64) -> Vec<WithDistance<T>>
where
    T: GeoTaggable + Clone,
{
    let mut annotated = items
        .iter()
        .map(|item| WithDistance {
            distance: item
                .coordinate()
                .map(|c| calculate_distance(user_latitude, user_longitude, c.latitude, c.longitude)),
            item: item.clone(),
        })
        .collect::<Vec<_>>();

    // Stable, so equal distances and unlocated items keep their relative order
    annotated.sort_by_key(|annotated| (annotated.distance.is_none(), annotated.distance.map(OrderedFloat)));
    annotated
}

pub trait SortByDistance<T> {
    fn sorted_by_distance_to(&self, origin: &Coordinate) -> Vec<WithDistance<T>>;
}

impl<T> SortByDistance<T> for [T]
where
    T: GeoTaggable + Clone,
{
    fn sorted_by_distance_to(&self, origin: &Coordinate) -> Vec<WithDistance<T>> {
        sort_by_distance(self, origin.latitude, origin.longitude)
    }
}
