use crate::location::{LocationError, LocationOptions, Position};
use async_trait::async_trait;

/// The host's capability to tell where it is, e.g. a GPS receiver or a lookup service.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Issues one request to the underlying service. Implementations do not retry.
    async fn current_position(&self, options: &LocationOptions) -> Result<Position, LocationError>;
}
