use crate::domain::Coordinate;
use crate::location::{LocationError, LocationOptions, LocationProvider, Position};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Locates the host by its public IP address.
#[derive(Clone, Debug)]
pub struct IpLocationProvider {
    client: Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    message: Option<String>,
}

impl IpLocationProvider {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        IpLocationProvider { client, url: url.into() }
    }
}

#[async_trait]
impl LocationProvider for IpLocationProvider {
    fn name(&self) -> &'static str {
        "ip_lookup"
    }

    #[instrument(skip_all, fields(url = %self.url))]
    async fn current_position(&self, options: &LocationOptions) -> Result<Position, LocationError> {
        if options.high_accuracy {
            debug!("High accuracy requested, an IP lookup is only accurate to the city");
        }

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => return Err(LocationError::PermissionDenied),
            status if !status.is_success() => return Err(LocationError::Unavailable(format!("lookup service answered {}", status))),
            _ => {}
        }

        let lookup = response
            .json::<LookupResponse>()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;
        debug!("🔸 Received lookup: {:?}", lookup);

        match lookup {
            LookupResponse {
                status,
                lat: Some(latitude),
                lon: Some(longitude),
                ..
            } if status == "success" => Coordinate::try_new(latitude, longitude)
                .map(Position::now)
                .map_err(|e| LocationError::Unavailable(e.to_string())),
            LookupResponse { message, .. } => Err(LocationError::Unavailable(message.unwrap_or_else(|| "lookup failed".to_string()))),
        }
    }
}
