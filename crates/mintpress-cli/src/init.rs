//! # Init Subcommand
//!
//! Creates a fresh ledger file from collection parameters.

use std::collections::BTreeSet;

use anyhow::{bail, Result};
use clap::Args;

use mintpress_core::{AccountId, Timestamp};
use mintpress_ledger::{Ledger, LedgerConfig};

use crate::store::LedgerStore;

/// Arguments for the init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Collection name.
    #[arg(long)]
    pub name: String,

    /// Collection symbol.
    #[arg(long)]
    pub symbol: String,

    /// Base URI prepended to every token's URI suffix.
    #[arg(long)]
    pub base_uri: String,

    /// The initial issuing authority.
    #[arg(long)]
    pub issuer: AccountId,

    /// The escrow-pool account.
    #[arg(long)]
    pub pool: AccountId,

    /// Series numbers designated as tribute series (cap 21 per edition).
    #[arg(long, value_delimiter = ',')]
    pub tribute_series: Vec<u8>,

    /// Activation instant (RFC 3339); defaults to now.
    #[arg(long)]
    pub activated_at: Option<String>,
}

/// Create the ledger file. Refuses to overwrite an existing one.
pub fn run(store: &LedgerStore, args: InitArgs) -> Result<()> {
    if store.exists() {
        bail!("ledger file {} already exists", store.path().display());
    }
    let activated_at = match &args.activated_at {
        Some(raw) => Timestamp::parse(raw)?,
        None => Timestamp::now(),
    };
    let ledger = Ledger::new(LedgerConfig {
        name: args.name,
        symbol: args.symbol,
        base_uri: args.base_uri,
        issuer: args.issuer,
        pool_account: args.pool,
        tribute_series: BTreeSet::from_iter(args.tribute_series),
        activated_at,
    });
    store.save(&ledger)?;
    tracing::info!(path = %store.path().display(), "ledger initialized");
    println!("initialized {} ({})", ledger.name(), ledger.symbol());
    Ok(())
}
