//! # Capability Discovery
//!
//! The ledger answers capability queries so that a host embedding it
//! behind a plugin or network boundary can negotiate what the ledger
//! supports, in the manner of interface-discovery handshakes.

use serde::{Deserialize, Serialize};

/// A discoverable ledger capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Basic ownership tracking and transfer.
    OwnershipTransfer,
    /// Per-token metadata (URIs, memos).
    Metadata,
    /// Dense enumeration of all tokens and per-owner holdings.
    Enumeration,
}

impl Capability {
    /// All capabilities this ledger can be asked about.
    pub const ALL: [Capability; 3] = [
        Capability::OwnershipTransfer,
        Capability::Metadata,
        Capability::Enumeration,
    ];
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::OwnershipTransfer => "OWNERSHIP_TRANSFER",
            Self::Metadata => "METADATA",
            Self::Enumeration => "ENUMERATION",
        };
        f.write_str(s)
    }
}
