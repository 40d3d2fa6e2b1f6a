use crate::domain::{BookCondition, Coordinate, CoordinateError, ListingType};
use crate::map_url::{MapUrlError, extract_coordinate};
use crate::submission::ListingDraft;
use thiserror::Error;

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_PRICE: f64 = 10_000.0;

#[derive(Error, PartialEq, Debug)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,
    #[error("title is longer than {max} characters", max = MAX_TITLE_LENGTH)]
    TitleTooLong,
    #[error("author is required")]
    MissingAuthor,
    #[error("'{0}' is not a valid ISBN-10 or ISBN-13")]
    InvalidIsbn(String),
    #[error("condition is required")]
    MissingCondition,
    #[error("listing type is required")]
    MissingListingType,
    #[error("a price is required to sell a book")]
    MissingPrice,
    #[error("price {0} must be above 0 and at most {max}", max = MAX_PRICE)]
    PriceOutOfRange(f64),
    #[error("a book to {0} cannot have a price")]
    UnexpectedPrice(ListingType),
    #[error("a map link or a latitude and longitude is required")]
    MissingLocation,
    #[error(transparent)]
    MapUrl(#[from] MapUrlError),
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

impl ValidationError {
    /// The draft field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingTitle | ValidationError::TitleTooLong => "title",
            ValidationError::MissingAuthor => "author",
            ValidationError::InvalidIsbn(_) => "isbn",
            ValidationError::MissingCondition => "condition",
            ValidationError::MissingListingType => "listing_type",
            ValidationError::MissingPrice | ValidationError::PriceOutOfRange(_) | ValidationError::UnexpectedPrice(_) => "price",
            ValidationError::MissingLocation | ValidationError::Coordinate(_) => "location",
            ValidationError::MapUrl(_) => "map_url",
        }
    }
}

/// The values of the details step, once valid.
#[derive(Debug)]
pub struct Details {
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub condition: BookCondition,
}

pub fn validate_details(draft: &ListingDraft) -> Result<Details, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.push(ValidationError::MissingTitle);
    } else if title.chars().count() > MAX_TITLE_LENGTH {
        errors.push(ValidationError::TitleTooLong);
    }

    let author = draft.author.trim();
    if author.is_empty() {
        errors.push(ValidationError::MissingAuthor);
    }

    let isbn = match draft.isbn.trim() {
        "" => None,
        isbn => match normalize_isbn(isbn) {
            Some(normalized) => Some(normalized),
            None => {
                errors.push(ValidationError::InvalidIsbn(isbn.to_string()));
                None
            }
        },
    };

    if draft.condition.is_none() {
        errors.push(ValidationError::MissingCondition);
    }

    match draft.condition {
        Some(condition) if errors.is_empty() => Ok(Details {
            title: title.to_string(),
            author: author.to_string(),
            isbn,
            condition,
        }),
        _ => Err(errors),
    }
}

pub fn validate_exchange(draft: &ListingDraft) -> Result<(ListingType, Option<f64>), Vec<ValidationError>> {
    let error = match (draft.listing_type, draft.price) {
        (None, _) => ValidationError::MissingListingType,
        (Some(ListingType::Sell), None) => ValidationError::MissingPrice,
        (Some(ListingType::Sell), Some(price)) if !(price > 0.0 && price <= MAX_PRICE) => ValidationError::PriceOutOfRange(price),
        (Some(listing_type @ (ListingType::Exchange | ListingType::Donate)), Some(_)) => ValidationError::UnexpectedPrice(listing_type),
        (Some(listing_type), price) => return Ok((listing_type, price)),
    };
    Err(vec![error])
}

/// A pasted map link wins over typed in coordinates.
pub fn validate_location(draft: &ListingDraft) -> Result<Coordinate, Vec<ValidationError>> {
    let result = match (draft.map_url.trim(), draft.latitude, draft.longitude) {
        ("", Some(latitude), Some(longitude)) => Coordinate::try_new(latitude, longitude).map_err(ValidationError::from),
        ("", _, _) => Err(ValidationError::MissingLocation),
        (map_url, _, _) => extract_coordinate(map_url).map_err(ValidationError::from),
    };
    result.map_err(|error| vec![error])
}

/// Removes hyphens and spaces, `None` when the rest is not an ISBN-10 or ISBN-13.
fn normalize_isbn(isbn: &str) -> Option<String> {
    let normalized = isbn.chars().filter(|c| *c != '-' && *c != ' ').collect::<String>().to_uppercase();
    let length = normalized.chars().count();
    let digits = normalized.chars().filter(char::is_ascii_digit).count();
    // Counted in characters, pasted input is not guaranteed to be ASCII
    let valid = match (length, normalized.chars().last()) {
        (10, Some('X')) => digits == 9,
        (10 | 13, _) => digits == length,
        _ => false,
    };
    valid.then_some(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn details() -> ListingDraft {
        ListingDraft {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            condition: Some(BookCondition::Good),
            ..Default::default()
        }
    }

    #[test]
    fn valid_details_are_trimmed() {
        let draft = ListingDraft {
            title: "  Dune ".to_string(),
            isbn: "978-0-441-17271-9".to_string(),
            ..details()
        };

        let details = validate_details(&draft).unwrap();

        assert_eq!(details.title, "Dune");
        assert_eq!(details.isbn, Some("9780441172719".to_string()));
    }

    #[test]
    fn reports_every_invalid_detail() {
        let draft = ListingDraft {
            isbn: "12345".to_string(),
            ..Default::default()
        };

        let errors = validate_details(&draft).unwrap_err();

        assert_eq!(
            errors,
            vec![
                ValidationError::MissingTitle,
                ValidationError::MissingAuthor,
                ValidationError::InvalidIsbn("12345".to_string()),
                ValidationError::MissingCondition
            ]
        );
        assert_eq!(errors.iter().map(ValidationError::field).collect::<Vec<_>>(), vec!["title", "author", "isbn", "condition"]);
    }

    #[test]
    fn a_non_ascii_isbn_is_a_field_error() {
        let draft = ListingDraft {
            isbn: "12345678é".to_string(),
            ..details()
        };

        assert_eq!(validate_details(&draft).unwrap_err(), vec![ValidationError::InvalidIsbn("12345678é".to_string())]);
    }

    #[test]
    fn rejects_a_title_that_is_too_long() {
        let draft = ListingDraft {
            title: "a".repeat(MAX_TITLE_LENGTH + 1),
            ..details()
        };

        assert_eq!(validate_details(&draft).unwrap_err(), vec![ValidationError::TitleTooLong]);
    }

    #[rstest]
    #[case::isbn_10("0-441-17271-7", Some("0441172717"))]
    #[case::isbn_10_with_check_character("080442957x", Some("080442957X"))]
    #[case::isbn_13("978 0 441 17271 9", Some("9780441172719"))]
    #[case::too_short("978044117", None)]
    #[case::letters("97804411727AB", None)]
    #[case::check_character_in_isbn_13("978044117271X", None)]
    #[case::non_ascii("12345678é", None)]
    #[case::non_ascii_isbn_13("978044117271é", None)]
    fn normalizes_isbns(#[case] isbn: &str, #[case] expected: Option<&str>) {
        assert_eq!(normalize_isbn(isbn), expected.map(str::to_string));
    }

    #[rstest]
    #[case::sell(Some(ListingType::Sell), Some(7.5), Ok((ListingType::Sell, Some(7.5))))]
    #[case::exchange(Some(ListingType::Exchange), None, Ok((ListingType::Exchange, None)))]
    #[case::donate(Some(ListingType::Donate), None, Ok((ListingType::Donate, None)))]
    #[case::missing_type(None, None, Err(vec![ValidationError::MissingListingType]))]
    #[case::sell_without_price(Some(ListingType::Sell), None, Err(vec![ValidationError::MissingPrice]))]
    #[case::free_sale(Some(ListingType::Sell), Some(0.0), Err(vec![ValidationError::PriceOutOfRange(0.0)]))]
    #[case::expensive_sale(Some(ListingType::Sell), Some(10_000.5), Err(vec![ValidationError::PriceOutOfRange(10_000.5)]))]
    #[case::priced_exchange(Some(ListingType::Exchange), Some(3.0), Err(vec![ValidationError::UnexpectedPrice(ListingType::Exchange)]))]
    fn validates_the_exchange(
        #[case] listing_type: Option<ListingType>,
        #[case] price: Option<f64>,
        #[case] expected: Result<(ListingType, Option<f64>), Vec<ValidationError>>,
    ) {
        let draft = ListingDraft {
            listing_type,
            price,
            ..Default::default()
        };

        assert_eq!(validate_exchange(&draft), expected);
    }

    #[test]
    fn nan_price_is_out_of_range() {
        let draft = ListingDraft {
            listing_type: Some(ListingType::Sell),
            price: Some(f64::NAN),
            ..Default::default()
        };

        let errors = validate_exchange(&draft).unwrap_err();

        assert!(matches!(errors.as_slice(), [ValidationError::PriceOutOfRange(_)]));
    }

    #[test]
    fn location_from_a_map_url_wins_over_typed_coordinates() {
        let draft = ListingDraft {
            map_url: "https://maps.google.com/?q=51.9225,4.47917".to_string(),
            latitude: Some(1.0),
            longitude: Some(1.0),
            ..Default::default()
        };

        assert_eq!(validate_location(&draft), Ok(Coordinate::new(51.9225, 4.47917)));
    }

    #[rstest]
    #[case::typed(None, Some(52.37), Some(4.89), Ok(Coordinate::new(52.37, 4.89)))]
    #[case::nothing(None, None, None, Err(vec![ValidationError::MissingLocation]))]
    #[case::half_typed(None, Some(52.37), None, Err(vec![ValidationError::MissingLocation]))]
    #[case::out_of_range(None, Some(100.0), Some(4.89), Err(vec![ValidationError::Coordinate(CoordinateError::Latitude(100.0))]))]
    #[case::unusable_map_url(Some("https://www.google.com/maps/place/Delft"), None, None, Err(vec![ValidationError::MapUrl(MapUrlError::NoCoordinates)]))]
    fn validates_the_location(
        #[case] map_url: Option<&str>,
        #[case] latitude: Option<f64>,
        #[case] longitude: Option<f64>,
        #[case] expected: Result<Coordinate, Vec<ValidationError>>,
    ) {
        let draft = ListingDraft {
            map_url: map_url.unwrap_or_default().to_string(),
            latitude,
            longitude,
            ..Default::default()
        };

        assert_eq!(validate_location(&draft), expected);
    }
}
