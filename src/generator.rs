use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::date_utils::{DateCheck, RegistrationDate};
use crate::error::PlateError;
use crate::ledger::IssuanceLedger;
use crate::plate::Plate;
use crate::region_code::RegionalCode;
use crate::suffix::{SuffixMode, generate_suffix};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub suffix_mode: SuffixMode,
    pub date_check: DateCheck,
}

/// Issues plates and remembers every plate it has issued, so that the same
/// plate is never handed out twice for a regional code.
#[derive(Debug)]
pub struct PlateGenerator<R = StdRng> {
    config: GeneratorConfig,
    rng: R,
    ledger: IssuanceLedger,
}

impl PlateGenerator<StdRng> {
    /// Creates a generator with a randomly seeded RNG.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a generator whose suffixes are reproducible for a given seed.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PlateGenerator<R> {
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            ledger: IssuanceLedger::new(),
        }
    }

    /// Replaces the ledger, e.g. to continue from plates issued earlier.
    pub fn with_ledger(mut self, ledger: IssuanceLedger) -> Self {
        self.ledger = ledger;
        self
    }

    pub fn ledger(&self) -> &IssuanceLedger {
        &self.ledger
    }

    pub fn into_ledger(self) -> IssuanceLedger {
        self.ledger
    }

    /// Generates a plate for `code` registered on `date` (`dd/mm/yyyy`).
    ///
    /// The ledger is only updated when a plate is returned.
    pub fn generate_plate(&mut self, code: &str, date: &str) -> Result<Plate, PlateError> {
        match self.issue(code, date) {
            Ok(plate) => {
                info!(%plate, "Issued plate");
                Ok(plate)
            }
            Err(err) => {
                debug!(code, date, %err, "Plate not issued");
                Err(err)
            }
        }
    }

    /// Same as [`Self::generate_plate`] without the failure reason.
    pub fn try_generate_plate(&mut self, code: &str, date: &str) -> Option<Plate> {
        self.generate_plate(code, date).ok()
    }

    fn issue(&mut self, code: &str, date: &str) -> Result<Plate, PlateError> {
        let regional_code = RegionalCode::parse(code)?;
        let registration = RegistrationDate::parse_with(date, self.config.date_check)?;
        let age_identifier = registration
            .age_identifier()
            .ok_or(PlateError::InvalidAgeWindow(registration))?;

        let suffix = generate_suffix(&mut self.rng, self.config.suffix_mode);
        let plate = Plate::new(regional_code, age_identifier, suffix);

        if !self.ledger.record(plate.clone()) {
            return Err(PlateError::DuplicatePlate(plate));
        }

        Ok(plate)
    }
}
