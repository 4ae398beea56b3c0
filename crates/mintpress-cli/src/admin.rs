//! # Administrative Subcommands
//!
//! Issuer-gated operations: withdrawal, metadata and bridge pointer
//! updates, direct transfers, and handover of the issuer role.

use anyhow::Result;
use clap::Args;

use mintpress_core::{AccountId, Amount, TokenId};

use crate::store::LedgerStore;

/// Arguments for the withdraw subcommand.
#[derive(Args, Debug)]
pub struct WithdrawArgs {
    /// The caller identity (must be the issuer).
    #[arg(long)]
    pub caller: AccountId,

    /// Recipient of the withdrawn funds.
    #[arg(long)]
    pub to: AccountId,

    /// Amount to withdraw from the pool balance.
    pub amount: Amount,
}

/// Arguments for the set-base-uri subcommand.
#[derive(Args, Debug)]
pub struct SetBaseUriArgs {
    /// The caller identity (must be the issuer).
    #[arg(long)]
    pub caller: AccountId,

    /// New base URI; applies to every existing and future token.
    pub base_uri: String,
}

/// Arguments for the set-bridge subcommand.
#[derive(Args, Debug)]
pub struct SetBridgeArgs {
    /// The caller identity (must be the issuer).
    #[arg(long)]
    pub caller: AccountId,

    /// Opaque cross-chain address; stored without validation.
    pub address: String,
}

/// Arguments for the transfer subcommand.
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// The caller identity (the owner, or the issuer for pool-held
    /// tokens).
    #[arg(long)]
    pub caller: AccountId,

    /// The account the token is moving from.
    #[arg(long)]
    pub from: AccountId,

    /// The recipient.
    #[arg(long)]
    pub to: AccountId,

    /// The token to move.
    pub token: TokenId,
}

/// Arguments for the transfer-ownership subcommand.
#[derive(Args, Debug)]
pub struct TransferOwnershipArgs {
    /// The caller identity (must be the current issuer).
    #[arg(long)]
    pub caller: AccountId,

    /// The account taking over every issuer gate.
    pub new_issuer: AccountId,
}

/// Debit the pool and report the credit instruction.
pub fn withdraw(store: &LedgerStore, args: WithdrawArgs) -> Result<()> {
    let mut ledger = store.load()?;
    let payout = ledger.withdraw(&args.caller, args.to, args.amount)?;
    store.save(&ledger)?;
    crate::report_payout(&payout);
    Ok(())
}

/// Replace the base URI for all tokens.
pub fn set_base_uri(store: &LedgerStore, args: SetBaseUriArgs) -> Result<()> {
    let mut ledger = store.load()?;
    ledger.set_base_uri(&args.caller, args.base_uri.clone())?;
    store.save(&ledger)?;
    println!("base URI set to {}", args.base_uri);
    Ok(())
}

/// Record the cross-chain pointer.
pub fn set_bridge(store: &LedgerStore, args: SetBridgeArgs) -> Result<()> {
    let mut ledger = store.load()?;
    ledger.set_cross_chain_address(&args.caller, args.address.clone())?;
    store.save(&ledger)?;
    println!("cross-chain address set to {}", args.address);
    Ok(())
}

/// Move a token between accounts without a sale.
pub fn transfer(store: &LedgerStore, args: TransferArgs) -> Result<()> {
    let mut ledger = store.load()?;
    ledger.transfer_from(&args.caller, &args.from, args.to.clone(), args.token)?;
    store.save(&ledger)?;
    println!("token {} transferred to {}", args.token, args.to);
    Ok(())
}

/// Hand the issuer role to a new account.
pub fn transfer_ownership(store: &LedgerStore, args: TransferOwnershipArgs) -> Result<()> {
    let mut ledger = store.load()?;
    ledger.transfer_ownership(&args.caller, args.new_issuer.clone())?;
    store.save(&ledger)?;
    tracing::info!(new_issuer = %args.new_issuer, "issuer role transferred");
    println!("issuer role transferred to {}", args.new_issuer);
    Ok(())
}
