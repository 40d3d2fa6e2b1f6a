use crate::domain::{BookCondition, ListingType};
use serde::Serialize;

/// What the user has typed in so far, across all steps.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct ListingDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub condition: Option<BookCondition>,
    pub listing_type: Option<ListingType>,
    pub price: Option<f64>,
    pub map_url: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: String,
}

/// The body of a create listing request.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    pub condition: BookCondition,
    pub listing_type: ListingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}
