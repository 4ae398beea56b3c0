//! # Mint Subcommand
//!
//! Issuer-only: presses a new token, optionally listing it for sale
//! immediately.

use anyhow::Result;
use clap::Args;

use mintpress_core::{AccountId, Amount, Timestamp};

use crate::store::LedgerStore;

/// Arguments for the mint subcommand.
#[derive(Args, Debug)]
pub struct MintArgs {
    /// The caller identity (must be the issuer).
    #[arg(long)]
    pub caller: AccountId,

    /// Recipient of the new token (the pool account for inventory).
    #[arg(long)]
    pub to: AccountId,

    /// Series number (0-255).
    #[arg(long)]
    pub series: u8,

    /// Pressing number; must be the next sequential value for the
    /// series.
    #[arg(long)]
    pub pressing: u16,

    /// Asking price; non-zero lists the token for sale at mint.
    #[arg(long, default_value_t = 0)]
    pub price: Amount,

    /// Opaque immutable memo.
    #[arg(long, default_value = "")]
    pub memo: String,

    /// URI suffix resolved against the ledger base URI.
    #[arg(long, default_value = "")]
    pub uri: String,

    /// Clock reading (RFC 3339); defaults to now.
    #[arg(long)]
    pub at: Option<String>,
}

/// Mint one pressing and persist the ledger.
pub fn run(store: &LedgerStore, args: MintArgs) -> Result<()> {
    let now = match &args.at {
        Some(raw) => Timestamp::parse(raw)?,
        None => Timestamp::now(),
    };
    let mut ledger = store.load()?;
    let id = ledger.mint(
        &args.caller,
        args.to.clone(),
        args.series,
        args.pressing,
        args.price,
        args.memo,
        args.uri,
        now,
    )?;
    store.save(&ledger)?;
    tracing::info!(%id, to = %args.to, "minted");
    println!("minted token {id} to {}", args.to);
    Ok(())
}
