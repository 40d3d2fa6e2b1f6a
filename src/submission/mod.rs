mod draft;
mod validation;
mod wizard;

pub use draft::{ListingDraft, NewListing};
pub use validation::{MAX_PRICE, MAX_TITLE_LENGTH, ValidationError};
pub use wizard::{Step, SubmissionError, SubmissionWizard};
