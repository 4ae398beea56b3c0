//! # Query Subcommands
//!
//! Read-only inspection of a stored ledger. Queries never mutate the
//! file, and never advance the edition schedule.

use anyhow::Result;
use clap::Args;

use mintpress_core::{AccountId, TokenId};
use mintpress_ledger::{Capability, Ledger};

use crate::store::LedgerStore;

/// Arguments for the show subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// The token to inspect.
    pub token: TokenId,
}

/// Arguments for the holdings subcommand.
#[derive(Args, Debug)]
pub struct HoldingsArgs {
    /// The account whose tokens to list; defaults to the pool.
    pub account: Option<AccountId>,
}

/// Print one token's full record.
pub fn show(store: &LedgerStore, args: ShowArgs) -> Result<()> {
    let ledger = store.load()?;
    let id = args.token;
    let token = ledger.token(id)?;
    println!("token    {id}");
    println!("owner    {}", token.owner);
    println!("series   {}", token.series);
    println!("pressing {}", token.pressing);
    println!("edition  {}", token.edition);
    println!("price    {}", ledger.token_price(id)?);
    println!("uri      {}", ledger.token_uri(id)?);
    if !token.memo.is_empty() {
        println!("memo     {}", token.memo);
    }
    Ok(())
}

/// Print every live token in enumeration order.
pub fn list(store: &LedgerStore) -> Result<()> {
    let ledger = store.load()?;
    for i in 0..ledger.total_supply() {
        let id = ledger.token_by_index(i)?;
        print_line(&ledger, id)?;
    }
    Ok(())
}

/// Print one account's holdings, defaulting to the pool's inventory.
pub fn holdings(store: &LedgerStore, args: HoldingsArgs) -> Result<()> {
    let ledger = store.load()?;
    let ids = match &args.account {
        Some(account) => ledger.tokens_owned_by(account),
        None => ledger.pool_holdings(),
    };
    for id in ids {
        print_line(&ledger, id)?;
    }
    Ok(())
}

/// Print the ledger's top-level state.
pub fn status(store: &LedgerStore) -> Result<()> {
    let ledger = store.load()?;
    println!("name            {}", ledger.name());
    println!("symbol          {}", ledger.symbol());
    println!("issuer          {}", ledger.issuer());
    println!("pool account    {}", ledger.pool_account());
    println!("pool balance    {}", ledger.pool_balance());
    println!("total supply    {}", ledger.total_supply());
    println!("current edition {}", ledger.current_edition());
    if let Some(address) = ledger.cross_chain_address() {
        println!("bridge address  {address}");
    }
    let caps: Vec<String> = Capability::ALL
        .iter()
        .filter(|c| ledger.supports(**c))
        .map(ToString::to_string)
        .collect();
    println!("capabilities    {}", caps.join(", "));
    Ok(())
}

fn print_line(ledger: &Ledger, id: TokenId) -> Result<()> {
    let token = ledger.token(id)?;
    let sale = match ledger.token_price(id)? {
        0 => String::from("not for sale"),
        price => format!("for sale at {price}"),
    };
    println!(
        "{id}  series {} pressing {} edition {}  owner {}  {sale}",
        token.series, token.pressing, token.edition, token.owner
    );
    Ok(())
}
