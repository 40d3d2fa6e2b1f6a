use crate::domain::{Book, Coordinate, ListingType};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

/// Filters understood by `GET /books`.
#[derive(Clone, Default, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    /// Kilometers around `lat`,`lng`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_type: Option<ListingType>,
}

impl BookQuery {
    pub fn near(coordinate: Coordinate, radius_km: Option<f64>) -> Self {
        BookQuery {
            lat: Some(coordinate.latitude),
            lng: Some(coordinate.longitude),
            max_distance: radius_km,
            ..Default::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BooksResponse {
    List(Vec<Book>),
    Wrapped { books: Vec<Book> },
}

#[derive(Error, Debug)]
pub enum BooksClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[derive(Clone, Debug)]
pub struct BooksClient {
    client: Client,
    base_url: String,
}

impl BooksClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        BooksClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[instrument(skip(self), fields(url = %self.base_url))]
    pub async fn list_books(&self, query: &BookQuery) -> Result<Vec<Book>, BooksClientError> {
        info!("📚 Retrieving books...");

        let response = self
            .client
            .get(format!("{}/books", self.base_url))
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        let books = match response.json::<BooksResponse>().await? {
            BooksResponse::List(books) => books,
            BooksResponse::Wrapped { books } => books,
        };
        info!("📚 Retrieving books... OK, {} found", books.len());

        Ok(books)
    }
}
