//! # mintpress-core — Foundational Types for the Pressing Ledger
//!
//! Defines the type-system primitives shared by every crate in the
//! workspace. `mintpress-core` depends on nothing internal; it is the
//! leaf of the dependency DAG.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `AccountId` and
//!    `TokenId` are newtypes with validated constructors. No bare strings
//!    or bare integers for identifiers.
//!
//! 2. **Range enforcement by construction.** A `TokenId` is built from
//!    typed fields (`u8` edition, `u8` series, `u16` pressing), so a
//!    field can never silently overflow into its neighbor. Untrusted
//!    wide-integer input goes through the checked [`TokenId::compose`]
//!    path and is rejected, not truncated.
//!
//! 3. **UTC-only timestamps.** The [`Timestamp`] type enforces UTC with
//!    seconds precision. Ledger operations take a timestamp argument
//!    rather than reading the wall clock, keeping time-dependent logic
//!    deterministic and testable.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mintpress-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod temporal;
pub mod token;

// Re-export primary types for ergonomic imports.
pub use error::CoreError;
pub use identity::AccountId;
pub use temporal::Timestamp;
pub use token::TokenId;

/// A native-currency amount, in the environment's smallest unit.
pub type Amount = u64;
