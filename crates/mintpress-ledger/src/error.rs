//! # Ledger Error Taxonomy
//!
//! One structured error enum covering every way a ledger operation can
//! fail. Every error aborts the whole operation before any state has
//! been mutated — callers observe success or exactly one of these
//! kinds, never a partially applied call.

use thiserror::Error;

use mintpress_core::{AccountId, Amount, CoreError, TokenId};

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Error raised by a ledger operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The token identifier does not name a minted token.
    #[error("unknown token {0}")]
    UnknownToken(TokenId),

    /// A token with this identifier has already been minted.
    #[error("token {0} already minted")]
    DuplicateToken(TokenId),

    /// Enumeration index beyond the end of the sequence.
    #[error("index {index} out of range (length {len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the sequence.
        len: usize,
    },

    /// Caller does not own the token it tried to operate on.
    #[error("account {caller} is not authorized over token {token}")]
    NotAuthorized {
        /// The rejected caller.
        caller: AccountId,
        /// The token in question.
        token: TokenId,
    },

    /// Caller is not the issuing authority.
    #[error("account {0} is not the issuer")]
    NotIssuer(AccountId),

    /// The token is not currently listed for sale.
    #[error("token {0} is not for sale")]
    NotForSale(TokenId),

    /// Payment below the listed asking price.
    #[error("payment {payment} below asking price {price}")]
    InsufficientPayment {
        /// What the buyer attached.
        payment: Amount,
        /// The listed price.
        price: Amount,
    },

    /// Pressing numbers must be sequential per series, starting at 1.
    #[error("pressing {submitted} invalid for series {series}: expected {expected}")]
    InvalidPressingNumber {
        /// The series being minted into.
        series: u8,
        /// The pressing number the caller supplied.
        submitted: u16,
        /// The next valid pressing number.
        expected: u16,
    },

    /// The series has no capacity left in the current edition.
    #[error("series {series} reached its cap of {cap} pressings in edition {edition}")]
    MintingCapExceeded {
        /// The series being minted into.
        series: u8,
        /// The edition whose cap is exhausted.
        edition: u8,
        /// The per-edition cap for this series.
        cap: u16,
    },

    /// The escrow pool cannot cover the requested withdrawal.
    #[error("pool balance {balance} cannot cover withdrawal of {requested}")]
    InsufficientBalance {
        /// The pool's current balance.
        balance: Amount,
        /// The amount requested.
        requested: Amount,
    },

    /// Malformed argument (out-of-range identifier component, empty
    /// account, and similar).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<CoreError> for LedgerError {
    fn from(err: CoreError) -> Self {
        LedgerError::InvalidArgument(err.to_string())
    }
}
