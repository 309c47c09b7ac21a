use std::collections::{HashMap, HashSet};

use crate::plate::Plate;
use crate::region_code::RegionalCode;

/// Plates issued so far, grouped by regional code.
///
/// Entries are kept for the lifetime of the ledger; nothing is evicted or
/// persisted.
#[derive(Debug, Default, Clone)]
pub struct IssuanceLedger {
    issued: HashMap<RegionalCode, HashSet<Plate>>,
}

impl IssuanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, plate: &Plate) -> bool {
        self.issued
            .get(&plate.regional_code())
            .is_some_and(|plates| plates.contains(plate))
    }

    /// Records `plate`, returning `false` if it had already been issued.
    #[must_use]
    pub fn record(&mut self, plate: Plate) -> bool {
        self.issued
            .entry(plate.regional_code())
            .or_default()
            .insert(plate)
    }

    pub fn issued_for(&self, code: &RegionalCode) -> impl Iterator<Item = &Plate> {
        self.issued.get(code).into_iter().flatten()
    }

    pub fn count_for(&self, code: &RegionalCode) -> usize {
        self.issued.get(code).map_or(0, HashSet::len)
    }

    pub fn len(&self) -> usize {
        self.issued.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
