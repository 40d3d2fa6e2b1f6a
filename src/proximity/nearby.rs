use crate::domain::{Coordinate, GeoTaggable};
use crate::proximity::{WithDistance, sort_by_distance};
use tracing::debug;

/// Returns the items within `radius_km` of `origin`, nearest first. Items without a coordinate are left out.
pub fn nearby<T>(items: &[T], origin: &Coordinate, radius_km: f64) -> Vec<WithDistance<T>>
where
    T: GeoTaggable + Clone,
{
    let within = sort_by_distance(items, origin.latitude, origin.longitude)
        .into_iter()
        .take_while(|annotated| annotated.distance.is_some_and(|distance| distance <= radius_km))
        .collect::<Vec<_>>();

    debug!("📍 {} of {} item(s) within {}km of {}", within.len(), items.len(), radius_km, origin);
    within
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_book;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn books() -> Vec<crate::domain::Book> {
        vec![
            test_book("rotterdam", Some(51.9225), Some(4.47917)),
            test_book("nowhere", None, None),
            test_book("amsterdam", Some(52.3676), Some(4.90414)),
            test_book("delft", Some(52.0116), Some(4.35839)),
        ]
    }

    #[rstest]
    #[case::only_the_origin(0.0, vec!["rotterdam"])]
    #[case::neighbouring_city(15.0, vec!["rotterdam", "delft"])]
    #[case::everything_located(100.0, vec!["rotterdam", "delft", "amsterdam"])]
    fn keeps_items_within_the_radius(#[case] radius_km: f64, #[case] expected: Vec<&str>) {
        let origin = Coordinate::new(51.9225, 4.47917);

        let result = nearby(&books(), &origin, radius_km);

        assert_eq!(result.iter().map(|annotated| annotated.item.id.as_str()).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn negative_radius_finds_nothing() {
        assert_eq!(nearby(&books(), &Coordinate::new(51.9225, 4.47917), -1.0), vec![]);
    }
}
