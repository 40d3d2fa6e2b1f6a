use crate::domain::Coordinate;
use reqwest::Url;
use thiserror::Error;
use tracing::debug;

const COORDINATE_PARAMETERS: [&str; 5] = ["q", "query", "ll", "center", "destination"];

/// Extracts the coordinate from a link copied out of a web map.
///
/// Recognised, first match wins:
/// - a place marker `!3d{lat}!4d{lng}`
/// - a viewport `@{lat},{lng},{zoom}z`
/// - a query parameter (`q`, `query`, `ll`, `center`, `destination`) holding `{lat},{lng}`
/// - OpenStreetMap `mlat`/`mlon` parameters or a `#map={zoom}/{lat}/{lng}` fragment
/// - a bare `{lat},{lng}` pair
pub fn extract_coordinate(input: &str) -> Result<Coordinate, MapUrlError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(MapUrlError::Empty);
    }

    let (latitude, longitude) = place_marker(input)
        .or_else(|| viewport(input))
        .or_else(|| Url::parse(input).ok().and_then(|url| from_query(&url).or_else(|| from_fragment(&url))))
        .or_else(|| pair(input, ','))
        .ok_or(MapUrlError::NoCoordinates)?;

    debug!("📌 Extracted {},{} from '{}'", latitude, longitude, input);
    Coordinate::try_new(latitude, longitude).map_err(|_| MapUrlError::OutOfRange { latitude, longitude })
}

#[derive(Error, PartialEq, Debug)]
pub enum MapUrlError {
    #[error("no map link given")]
    Empty,
    #[error("the link does not contain coordinates")]
    NoCoordinates,
    #[error("coordinates out of range: {latitude},{longitude}")]
    OutOfRange { latitude: f64, longitude: f64 },
}

fn place_marker(input: &str) -> Option<(f64, f64)> {
    let latitude = number_after(input, "!3d")?;
    let longitude = number_after(input, "!4d")?;
    Some((latitude, longitude))
}

fn viewport(input: &str) -> Option<(f64, f64)> {
    let (_, rest) = input.split_once('@')?;
    let segment = rest.split(['/', '?', '&']).next()?;
    let mut parts = segment.split(',');
    let latitude = parts.next()?.trim().parse().ok()?;
    let longitude = parts.next()?.trim().parse().ok()?;
    Some((latitude, longitude))
}

fn from_query(url: &Url) -> Option<(f64, f64)> {
    let pairs = url.query_pairs().collect::<Vec<_>>();
    let value_of = |name: &str| pairs.iter().find(|(key, _)| key == name).map(|(_, value)| value.trim().to_string());

    let from_parameter = COORDINATE_PARAMETERS
        .iter()
        .filter_map(|name| value_of(*name))
        .find_map(|value| pair(value.trim_start_matches("loc:"), ','));

    from_parameter.or_else(|| {
        let latitude = value_of("mlat")?.parse().ok()?;
        let longitude = value_of("mlon")?.parse().ok()?;
        Some((latitude, longitude))
    })
}

fn from_fragment(url: &Url) -> Option<(f64, f64)> {
    let map = url.fragment()?.split('&').find_map(|part| part.strip_prefix("map="))?;
    let (_zoom, position) = map.split_once('/')?;
    pair(position, '/')
}

fn pair(value: &str, separator: char) -> Option<(f64, f64)> {
    let (latitude, longitude) = value.split_once(separator)?;
    Some((latitude.trim().parse().ok()?, longitude.trim().parse().ok()?))
}

fn number_after(input: &str, marker: &str) -> Option<f64> {
    let start = input.find(marker)? + marker.len();
    let number = input[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect::<String>();
    number.parse().ok()
}
