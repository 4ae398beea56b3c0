//! # Account Identity Newtype
//!
//! Account identities are supplied by the execution environment (the
//! caller of every ledger operation); the ledger never generates them.
//! The newtype prevents accidental confusion between an account string
//! and any other opaque string in the system.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// An opaque account identity supplied by the execution environment.
///
/// The ledger treats accounts as equality-comparable opaque values.
/// The only validation applied is non-emptiness: an empty identity can
/// never own, list, or buy anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Wrap an environment-supplied identity, rejecting empty strings.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CoreError::EmptyAccount);
        }
        Ok(Self(raw))
    }

    /// Access the inner identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
