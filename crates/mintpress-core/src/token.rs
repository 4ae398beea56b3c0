//! # Composite Token Identifier
//!
//! A token is identified by a single `u32` packing three components:
//!
//! ```text
//! bits 24-31   edition   (u8,  1-255, advances weekly)
//! bits 16-23   series    (u8,  which design within the catalogue)
//! bits  0-15   pressing  (u16, sequential number within the edition)
//! ```
//!
//! ## Security Invariant
//!
//! Components are typed (`u8`/`u8`/`u16`), so packing can never overflow
//! one field into its neighbor. Untrusted wide-integer input (CLI
//! arguments, wire values) must go through [`TokenId::compose`], which
//! rejects out-of-range components instead of truncating them.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

const EDITION_SHIFT: u32 = 24;
const SERIES_SHIFT: u32 = 16;

/// A packed (edition, series, pressing) token identifier.
///
/// Identifiers are globally unique across the lifetime of a ledger and
/// are never reused. The packing is bijective: [`TokenId::edition`],
/// [`TokenId::series`], and [`TokenId::pressing`] recover exactly the
/// components passed to [`TokenId::from_parts`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TokenId(u32);

impl TokenId {
    /// Pack typed components into an identifier. Infallible: the field
    /// widths make out-of-range values unrepresentable.
    pub fn from_parts(edition: u8, series: u8, pressing: u16) -> Self {
        Self((u32::from(edition) << EDITION_SHIFT) | (u32::from(series) << SERIES_SHIFT) | u32::from(pressing))
    }

    /// Pack untrusted wide-integer components, rejecting out-of-range
    /// values.
    ///
    /// # Errors
    ///
    /// Returns the specific out-of-range error for the first component
    /// that does not fit its field.
    pub fn compose(edition: u64, series: u64, pressing: u64) -> Result<Self, CoreError> {
        let edition = u8::try_from(edition).map_err(|_| CoreError::EditionOutOfRange(edition))?;
        let series = u8::try_from(series).map_err(|_| CoreError::SeriesOutOfRange(series))?;
        let pressing =
            u16::try_from(pressing).map_err(|_| CoreError::PressingOutOfRange(pressing))?;
        Ok(Self::from_parts(edition, series, pressing))
    }

    /// Reinterpret a raw `u32` as an identifier.
    ///
    /// Every `u32` decodes to some (edition, series, pressing) triple;
    /// whether that token exists is a ledger question, not a codec one.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw packed value.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// The edition component (bits 24-31).
    pub fn edition(&self) -> u8 {
        (self.0 >> EDITION_SHIFT) as u8
    }

    /// The series component (bits 16-23).
    pub fn series(&self) -> u8 {
        (self.0 >> SERIES_SHIFT) as u8
    }

    /// The pressing component (bits 0-15).
    pub fn pressing(&self) -> u16 {
        self.0 as u16
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TokenId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u32 = s
            .parse()
            .map_err(|_| CoreError::InvalidTokenId(s.to_string()))?;
        Ok(Self::from_raw(raw))
    }
}
