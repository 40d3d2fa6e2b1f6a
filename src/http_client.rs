use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, HttpClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .user_agent(HeaderValue::from_str(config.http().user_agent())?)
        .timeout(config.http().request_timeout())
        .default_headers(headers)
        .build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum HttpClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("invalid user agent: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}
