//! # Marketplace Subcommands
//!
//! Listing, delisting, and purchase against a stored ledger.

use anyhow::Result;
use clap::Args;

use mintpress_core::{AccountId, Amount, TokenId};

use crate::store::LedgerStore;

/// Arguments for the offer subcommand.
#[derive(Args, Debug)]
pub struct OfferArgs {
    /// The caller identity (must own the token).
    #[arg(long)]
    pub caller: AccountId,

    /// The token to list.
    pub token: TokenId,

    /// Asking price; 0 delists.
    pub price: Amount,
}

/// Arguments for the delist subcommand.
#[derive(Args, Debug)]
pub struct DelistArgs {
    /// The caller identity (must own the token).
    #[arg(long)]
    pub caller: AccountId,

    /// The token to take off the market.
    pub token: TokenId,
}

/// Arguments for the buy subcommand.
#[derive(Args, Debug)]
pub struct BuyArgs {
    /// The buyer identity.
    #[arg(long)]
    pub caller: AccountId,

    /// The token to purchase.
    pub token: TokenId,

    /// Attached payment; must meet the asking price. Excess is not
    /// refunded.
    pub payment: Amount,
}

/// List a token for sale and persist the ledger.
pub fn offer(store: &LedgerStore, args: OfferArgs) -> Result<()> {
    let mut ledger = store.load()?;
    ledger.offer_for_sale(&args.caller, args.token, args.price)?;
    store.save(&ledger)?;
    if args.price == 0 {
        println!("token {} delisted", args.token);
    } else {
        println!("token {} listed at {}", args.token, args.price);
    }
    Ok(())
}

/// Take a token off the market and persist the ledger.
pub fn delist(store: &LedgerStore, args: DelistArgs) -> Result<()> {
    let mut ledger = store.load()?;
    ledger.remove_from_sale(&args.caller, args.token)?;
    store.save(&ledger)?;
    println!("token {} delisted", args.token);
    Ok(())
}

/// Purchase a listed token and persist the ledger.
///
/// State is finalized on disk before the seller's credit instruction
/// is reported.
pub fn buy(store: &LedgerStore, args: BuyArgs) -> Result<()> {
    let mut ledger = store.load()?;
    let receipt = ledger.buy(args.caller, args.token, args.payment)?;
    store.save(&ledger)?;
    tracing::info!(
        token = %receipt.token,
        seller = %receipt.seller,
        buyer = %receipt.buyer,
        payment = receipt.payment,
        pool_cut = receipt.pool_cut,
        "sale settled"
    );
    println!(
        "token {} sold to {} for {} (pool cut {})",
        receipt.token, receipt.buyer, receipt.payment, receipt.pool_cut
    );
    if let Some(payout) = &receipt.seller_proceeds {
        crate::report_payout(payout);
    }
    Ok(())
}
