use crate::domain::Coordinate;
use crate::location::LocationOptions;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    http: Http,
    location: Location,
    books: Books,
    preferences: Preferences,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("BOOKSWAP").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn http(&self) -> &Http {
        &self.http
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn books(&self) -> &Books {
        &self.books
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }
}

#[derive(Debug, Deserialize)]
pub struct Http {
    user_agent: String,
    #[serde(with = "humantime_serde")]
    request_timeout: Duration,
}

impl Http {
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Fixed,
    IpLookup,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    provider: ProviderKind,
    lookup_url: String,
    fixed: Option<Coordinate>,
    fallback: Option<Coordinate>,
    #[serde(default)]
    options: LocationOptions,
    radius_km: Option<f64>,
}

impl Location {
    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    pub fn lookup_url(&self) -> &str {
        &self.lookup_url
    }

    /// The coordinate answered by the fixed provider.
    pub fn fixed(&self) -> Option<Coordinate> {
        self.fixed
    }

    /// Used when acquisition fails and no location was remembered.
    pub fn fallback(&self) -> Option<Coordinate> {
        self.fallback
    }

    pub fn options(&self) -> &LocationOptions {
        &self.options
    }

    pub fn radius_km(&self) -> Option<f64> {
        self.radius_km
    }
}

#[derive(Debug, Deserialize)]
pub struct Books {
    api_url: Option<String>,
    snapshot_directory: String,
}

impl Books {
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    pub fn snapshot_directory(&self) -> &str {
        &self.snapshot_directory
    }
}

#[derive(Debug, Deserialize)]
pub struct Preferences {
    path: String,
}

impl Preferences {
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                http: Http {
                    user_agent: "bookswap-test".to_string(),
                    request_timeout: Duration::from_secs(5),
                },
                location: Location {
                    provider: ProviderKind::Fixed,
                    lookup_url: "http://ip-api.test/json".to_string(),
                    fixed: Some(Coordinate::new(51.8615899, 4.3580323)),
                    fallback: None,
                    options: LocationOptions::default(),
                    radius_km: None,
                },
                books: Books {
                    api_url: None,
                    snapshot_directory: "listings".to_string(),
                },
                preferences: Preferences {
                    path: "preferences.json".to_string(),
                },
            },
        }
    }

    pub fn api_url(mut self, url: String) -> Self {
        self.config.books.api_url = Some(url);
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};
    use pretty_assertions::assert_eq;

    fn parse(toml: &str) -> Result<AppConfig, ConfigError> {
        Config::builder().add_source(File::from_str(toml, FileFormat::Toml)).build()?.try_deserialize()
    }

    const CONFIG: &str = r#"
        [http]
        user_agent = "bookswap/0.1"
        request_timeout = "10s"

        [location]
        provider = "ip_lookup"
        lookup_url = "http://ip-api.com/json"
        fallback = { latitude = 52.3676, longitude = 4.90414 }
        radius_km = 25.0

        [location.options]
        timeout = "3s"

        [books]
        snapshot_directory = "listings"

        [preferences]
        path = "preferences.json"
    "#;

    #[test]
    fn loads_a_complete_configuration() -> Result<(), ConfigError> {
        let config = parse(CONFIG)?;

        assert_eq!(config.http().request_timeout(), Duration::from_secs(10));
        assert_eq!(config.location().provider(), ProviderKind::IpLookup);
        assert_eq!(config.location().fallback(), Some(Coordinate::new(52.3676, 4.90414)));
        assert_eq!(config.location().fixed(), None);
        assert_eq!(config.location().options().timeout, Duration::from_secs(3));
        assert_eq!(config.location().options().maximum_age, Duration::ZERO);
        assert_eq!(config.location().radius_km(), Some(25.0));
        assert_eq!(config.books().api_url(), None);
        assert_eq!(config.preferences().path(), "preferences.json");

        Ok(())
    }

    #[test]
    fn rejects_an_out_of_range_fallback_location() {
        let config = CONFIG.replace("latitude = 52.3676", "latitude = 152.3676");

        let error = parse(&config).unwrap_err();

        assert!(error.to_string().contains("invalid latitude"), "unexpected error: {}", error);
    }
}
