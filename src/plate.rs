use std::fmt;

use crate::date_utils::AgeIdentifier;
use crate::region_code::RegionalCode;

/// An issued number plate, rendered as `XX-NN-YYY`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plate {
    regional_code: RegionalCode,
    age_identifier: AgeIdentifier,
    suffix: String,
}

impl Plate {
    pub(crate) fn new(
        regional_code: RegionalCode,
        age_identifier: AgeIdentifier,
        suffix: String,
    ) -> Self {
        Self {
            regional_code,
            age_identifier,
            suffix,
        }
    }

    pub fn regional_code(&self) -> RegionalCode {
        self.regional_code
    }

    pub fn age_identifier(&self) -> AgeIdentifier {
        self.age_identifier
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.regional_code, self.age_identifier, self.suffix
        )
    }
}
