use thiserror::Error;

use crate::date_utils::{DateError, RegistrationDate};
use crate::plate::Plate;
use crate::region_code::InvalidRegionalCode;

/// Reasons a plate could not be issued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlateError {
    #[error(transparent)]
    InvalidRegionalCode(#[from] InvalidRegionalCode),

    #[error(transparent)]
    MalformedDate(#[from] DateError),

    /// The date is outside every registration window.
    #[error("no registration window covers {0}")]
    InvalidAgeWindow(RegistrationDate),

    #[error("plate {0} has already been issued")]
    DuplicatePlate(Plate),
}

impl PlateError {
    pub fn is_invalid_regional_code(&self) -> bool {
        matches!(self, PlateError::InvalidRegionalCode(_))
    }

    pub fn is_malformed_date(&self) -> bool {
        matches!(self, PlateError::MalformedDate(_))
    }

    pub fn is_invalid_age_window(&self) -> bool {
        matches!(self, PlateError::InvalidAgeWindow(_))
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, PlateError::DuplicatePlate(_))
    }
}
