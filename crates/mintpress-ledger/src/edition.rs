//! # Edition Schedule
//!
//! Editions advance purely as a function of wall-clock time: one new
//! edition every seven days from the ledger's activation, regardless of
//! how many mints occurred. The counter starts at 1 and is
//! monotonically non-decreasing.
//!
//! ## Design
//!
//! Advancement is split into a pure projection and a commit. `mint`
//! computes the projection from the injected clock reading, validates
//! the whole operation against the projected edition, and applies the
//! projection only when the mint succeeds — a failed mint leaves the
//! schedule untouched. Queries read the stored edition without
//! advancing it.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use mintpress_core::Timestamp;

/// Length of one edition period: seven days, in seconds.
pub const EDITION_PERIOD_SECS: i64 = 7 * 24 * 60 * 60;

/// The stored edition state: where the current period started and which
/// edition it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionSchedule {
    edition_start: Timestamp,
    current_edition: u8,
}

/// A projected advancement, computed without mutating the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditionProjection {
    edition: u8,
    edition_start: Timestamp,
}

impl EditionProjection {
    /// The edition a mint at the projected instant would be stamped with.
    pub fn edition(&self) -> u8 {
        self.edition
    }
}

impl EditionSchedule {
    /// Start the schedule at activation time, in edition 1.
    pub fn new(activated_at: Timestamp) -> Self {
        Self {
            edition_start: activated_at,
            current_edition: 1,
        }
    }

    /// The edition as of the last committed advancement. Reading does
    /// not advance the schedule.
    pub fn current_edition(&self) -> u8 {
        self.current_edition
    }

    /// Compute the edition in effect at `now`, without mutating state.
    ///
    /// Advances one edition per whole elapsed period. The counter
    /// saturates at 255, the width of the identifier's edition field;
    /// a clock reading before the period start (the clock is
    /// non-decreasing, so this does not happen in practice) projects no
    /// advancement.
    pub fn project(&self, now: Timestamp) -> EditionProjection {
        let elapsed = now.since(self.edition_start).num_seconds();
        if elapsed < EDITION_PERIOD_SECS || self.current_edition == u8::MAX {
            return EditionProjection {
                edition: self.current_edition,
                edition_start: self.edition_start,
            };
        }
        let whole_periods = elapsed / EDITION_PERIOD_SECS;
        let headroom = i64::from(u8::MAX - self.current_edition);
        let steps = whole_periods.min(headroom);
        EditionProjection {
            edition: self.current_edition + steps as u8,
            edition_start: self
                .edition_start
                .advanced_by(Duration::seconds(steps * EDITION_PERIOD_SECS)),
        }
    }

    /// Commit a previously computed projection.
    pub fn apply(&mut self, projection: EditionProjection) {
        self.current_edition = projection.edition;
        self.edition_start = projection.edition_start;
    }
}
