//! Generates vehicle number plates of the form `XX-NN-YYY`.
//!
//! `XX` is a two-letter regional code, `NN` the age identifier derived from the
//! registration date and `YYY` a random three-letter suffix.
//!
//! ```
//! use number_plate_generator::{GeneratorConfig, PlateGenerator};
//!
//! let mut generator = PlateGenerator::new(GeneratorConfig::default());
//! let plate = generator.generate_plate("YC", "04/07/2019").unwrap();
//! assert!(plate.to_string().starts_with("YC-19-"));
//! ```

pub mod date_utils;
pub mod error;
pub mod generator;
pub mod ledger;
pub mod plate;
pub mod region_code;
pub mod suffix;

pub use date_utils::{AgeIdentifier, DateCheck, DateError, RegistrationDate};
pub use error::PlateError;
pub use generator::{GeneratorConfig, PlateGenerator};
pub use ledger::IssuanceLedger;
pub use plate::Plate;
pub use region_code::{InvalidRegionalCode, RegionalCode};
pub use suffix::SuffixMode;
