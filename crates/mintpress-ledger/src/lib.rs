//! # mintpress-ledger — Pressing Ledger with Embedded Marketplace
//!
//! Tracks ownership of uniquely identified collectible pressings,
//! enforces per-edition minting caps, and lets owners list and sell
//! their pressings with a fixed cut retained by the issuing authority.
//!
//! ## Architecture
//!
//! All state lives in a single owned [`Ledger`] aggregate passed
//! explicitly to every operation — no ambient globals. The execution
//! environment supplies a caller identity and a clock reading to each
//! call, and executes the [`Payout`] instructions that `buy` and
//! `withdraw` return.
//!
//! - **`index`** — dense enumeration sequences with O(1) swap-and-
//!   truncate removal, backing `token_by_index` and per-owner listings.
//! - **`edition`** — weekly edition advancement as a pure function of
//!   the injected clock reading.
//! - **`policy`** — per-edition minting caps (21 tribute / 42 standard)
//!   and sequential pressing numbers.
//! - **`market`** — the `NotListed`/`Listed` sale state machine and the
//!   1.5% issuer fee split.
//! - **`ledger`** — the aggregate and the full public operation surface.
//! - **`capability`** — discoverable-capability queries.
//!
//! ## Atomicity
//!
//! Every operation validates before its first mutation. An error leaves
//! the ledger untouched; callers observe only success or one specific
//! [`LedgerError`] kind. Outward payment effects are returned as
//! instructions and executed by the environment strictly after internal
//! state is final, so a reentrant call can never observe a stale
//! listing.

pub mod capability;
pub mod edition;
pub mod error;
pub mod index;
pub mod ledger;
pub mod market;
pub mod policy;

// Re-export primary types for ergonomic imports.
pub use capability::Capability;
pub use edition::{EditionProjection, EditionSchedule, EDITION_PERIOD_SECS};
pub use error::{LedgerError, LedgerResult};
pub use index::TokenIndex;
pub use ledger::{Ledger, LedgerConfig, Token};
pub use market::{sale_fee, Payout, SaleReceipt, SaleState};
pub use policy::{MintingPolicy, STANDARD_CAP, TRIBUTE_CAP};
