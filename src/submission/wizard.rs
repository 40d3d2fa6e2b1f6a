use crate::submission::validation::{ValidationError, validate_details, validate_exchange, validate_location};
use crate::submission::{ListingDraft, NewListing};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum Step {
    #[default]
    Details,
    Exchange,
    Location,
    Complete,
}

impl Step {
    fn next(self) -> Step {
        match self {
            Step::Details => Step::Exchange,
            Step::Exchange => Step::Location,
            Step::Location | Step::Complete => Step::Complete,
        }
    }

    fn previous(self) -> Step {
        match self {
            Step::Details | Step::Exchange => Step::Details,
            Step::Location => Step::Exchange,
            Step::Complete => Step::Location,
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Details => write!(f, "details"),
            Step::Exchange => write!(f, "exchange"),
            Step::Location => write!(f, "location"),
            Step::Complete => write!(f, "complete"),
        }
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum SubmissionError {
    #[error("the {step} step has {} invalid field(s)", .errors.len())]
    Invalid { step: Step, errors: Vec<ValidationError> },
    #[error("the listing is not complete, still at the {0} step")]
    Incomplete(Step),
}

/// Walks a new listing through the details, exchange and location steps.
///
/// The draft may be edited at any step. Moving forward validates the current step only, moving back never validates.
#[derive(Default, Debug)]
pub struct SubmissionWizard {
    step: Step,
    draft: ListingDraft,
}

impl SubmissionWizard {
    pub fn new() -> Self {
        SubmissionWizard::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ListingDraft {
        &mut self.draft
    }

    #[instrument(skip(self), fields(step = %self.step))]
    pub fn advance(&mut self) -> Result<Step, SubmissionError> {
        let validation = match self.step {
            Step::Details => validate_details(&self.draft).map(|_| ()),
            Step::Exchange => validate_exchange(&self.draft).map(|_| ()),
            Step::Location => validate_location(&self.draft).map(|_| ()),
            Step::Complete => Ok(()),
        };

        if let Err(errors) = validation {
            debug!("🧭 Staying at the {} step, {} invalid field(s)", self.step, errors.len());
            return Err(SubmissionError::Invalid { step: self.step, errors });
        }

        self.step = self.step.next();
        debug!("🧭 Moved to the {} step", self.step);
        Ok(self.step)
    }

    pub fn back(&mut self) -> Step {
        self.step = self.step.previous();
        self.step
    }

    /// Validates the whole draft again, it may have been edited after a step was passed.
    #[instrument(skip(self))]
    pub fn submit(&self) -> Result<NewListing, SubmissionError> {
        if self.step != Step::Complete {
            return Err(SubmissionError::Incomplete(self.step));
        }

        let details = validate_details(&self.draft).map_err(invalid(Step::Details))?;
        let (listing_type, price) = validate_exchange(&self.draft).map_err(invalid(Step::Exchange))?;
        let coordinate = validate_location(&self.draft).map_err(invalid(Step::Location))?;

        let city = self.draft.city.trim();
        let listing = NewListing {
            title: details.title,
            author: details.author,
            isbn: details.isbn,
            condition: details.condition,
            listing_type,
            price,
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            city: (!city.is_empty()).then(|| city.to_string()),
        };
        info!("📚 Listing '{}' ready to {} at {}", listing.title, listing.listing_type, coordinate);
        Ok(listing)
    }
}

fn invalid(step: Step) -> impl FnOnce(Vec<ValidationError>) -> SubmissionError {
    move |errors| SubmissionError::Invalid { step, errors }
}
