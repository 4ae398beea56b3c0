//! # mintpress-cli — Command-Line Host for the Pressing Ledger
//!
//! A thin host around [`mintpress_ledger::Ledger`]: each invocation
//! loads the ledger from a JSON file, runs exactly one operation, and
//! writes the ledger back. The CLI plays the execution environment's
//! roles — it supplies the caller identity (`--caller`), the clock
//! reading, and it "executes" outward payment instructions by
//! reporting them.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business
//!   logic; handlers delegate to the ledger crate.
//! - `anyhow` at this boundary only; the domain crates return typed
//!   errors.

pub mod admin;
pub mod init;
pub mod market;
pub mod mint;
pub mod query;
pub mod store;

use mintpress_ledger::Payout;

/// Report an outward payment instruction. The ledger has already
/// finalized its state by the time one of these exists.
pub fn report_payout(payout: &Payout) {
    tracing::info!(to = %payout.to, amount = payout.amount, "credit instruction");
    println!("credit {} to {}", payout.amount, payout.to);
}
