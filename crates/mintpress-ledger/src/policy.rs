//! # Minting Policy
//!
//! Two rules gate every mint, checked before any ledger mutation:
//!
//! 1. **Sequential numbering.** Pressing numbers run 1, 2, 3, … per
//!    series, across editions. The caller supplies the number it
//!    expects to mint; anything but the next value is rejected.
//! 2. **Per-edition capacity.** Each series may press at most 42 items
//!    per edition — 21 for the designated tribute series. Capacity
//!    refreshes when the edition advances; numbering does not restart.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Per-edition pressing cap for a standard series.
pub const STANDARD_CAP: u16 = 42;

/// Per-edition pressing cap for a tribute series.
pub const TRIBUTE_CAP: u16 = 21;

/// Sequential-numbering and per-edition-capacity enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintingPolicy {
    tribute_series: BTreeSet<u8>,
    /// Next expected pressing number per series; absent means 1.
    next_pressing: HashMap<u8, u16>,
    /// Per series: the edition last minted into and how many pressings
    /// it has received there. Stale entries count as zero once the
    /// edition has moved on.
    edition_counts: HashMap<u8, (u8, u16)>,
}

impl MintingPolicy {
    /// Create a policy with the given tribute-series designations.
    pub fn new(tribute_series: BTreeSet<u8>) -> Self {
        Self {
            tribute_series,
            next_pressing: HashMap::new(),
            edition_counts: HashMap::new(),
        }
    }

    /// Whether `series` is a tribute series.
    pub fn is_tribute(&self, series: u8) -> bool {
        self.tribute_series.contains(&series)
    }

    /// The per-edition cap for `series`.
    pub fn cap_for(&self, series: u8) -> u16 {
        if self.is_tribute(series) {
            TRIBUTE_CAP
        } else {
            STANDARD_CAP
        }
    }

    /// The next valid pressing number for `series`.
    pub fn expected_pressing(&self, series: u8) -> u16 {
        self.next_pressing.get(&series).copied().unwrap_or(1)
    }

    /// How many pressings `series` has received in `edition`.
    pub fn minted_in_edition(&self, series: u8, edition: u8) -> u16 {
        match self.edition_counts.get(&series) {
            Some(&(counted_edition, count)) if counted_edition == edition => count,
            _ => 0,
        }
    }

    /// Validate a mint of `pressing` into `series` during `edition`.
    ///
    /// # Errors
    ///
    /// `InvalidPressingNumber` if `pressing` is not the next sequential
    /// number; `MintingCapExceeded` if the series has no capacity left
    /// in `edition`.
    pub fn validate_mint(&self, series: u8, pressing: u16, edition: u8) -> LedgerResult<()> {
        let expected = self.expected_pressing(series);
        if pressing != expected {
            return Err(LedgerError::InvalidPressingNumber {
                series,
                submitted: pressing,
                expected,
            });
        }
        let cap = self.cap_for(series);
        if self.minted_in_edition(series, edition) >= cap {
            return Err(LedgerError::MintingCapExceeded {
                series,
                edition,
                cap,
            });
        }
        Ok(())
    }

    /// Record a successful mint into `series` during `edition`.
    ///
    /// Must be called only after [`MintingPolicy::validate_mint`]
    /// passed for the same arguments.
    pub fn record_mint(&mut self, series: u8, edition: u8) {
        let next = self.expected_pressing(series).saturating_add(1);
        self.next_pressing.insert(series, next);
        let count = self.minted_in_edition(series, edition);
        self.edition_counts.insert(series, (edition, count + 1));
    }
}
