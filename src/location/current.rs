use crate::domain::Coordinate;
use crate::location::{LocationError, LocationOptions, LocationProvider, Position};
use chrono::{DateTime, TimeDelta, Utc};
use tokio::time::timeout;
use tracing::{info, instrument, warn};

/// Asks the provider for the current location, waiting at most `options.timeout`.
///
/// Every call issues its own request, concurrent calls are not merged. Failures are returned as is, the caller decides
/// whether to retry or fall back to a stored location.
#[instrument(skip_all, fields(provider = provider.name()))]
pub async fn get_current_location<P>(provider: &P, options: &LocationOptions) -> Result<Coordinate, LocationError>
where
    P: LocationProvider + ?Sized,
{
    info!("📍 Acquiring location...");
    let requested_at = Utc::now();

    let result = match timeout(options.timeout, provider.current_position(options)).await {
        Ok(position) => position.and_then(|position| accept_fresh(position, requested_at, options)),
        Err(_) => Err(LocationError::Timeout(options.timeout)),
    };

    match &result {
        Ok(coordinate) => info!("📍 Acquiring location... OK, {}", coordinate),
        Err(error) => warn!("📍 Acquiring location... failed, {}", error),
    }
    result
}

fn accept_fresh(position: Position, requested_at: DateTime<Utc>, options: &LocationOptions) -> Result<Coordinate, LocationError> {
    let oldest_accepted = TimeDelta::from_std(options.maximum_age)
        .ok()
        .and_then(|maximum_age| requested_at.checked_sub_signed(maximum_age));

    match oldest_accepted {
        Some(oldest) if position.timestamp < oldest => Err(LocationError::Unavailable(format!(
            "stale position from {}",
            position.timestamp.to_rfc3339()
        ))),
        _ => Ok(position.coordinate),
    }
}
