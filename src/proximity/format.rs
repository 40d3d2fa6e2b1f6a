/// Renders a distance in kilometers for display next to a listing.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        let meters = (km * 1000.0).round();
        // Rounding a tiny negative distance yields -0, which would print as "-0m"
        format!("{}m away", if meters == 0.0 { 0.0 } else { meters })
    } else if km < 10.0 {
        format!("{:.1}km away", km)
    } else {
        format!("{}km away", km.round())
    }
}
