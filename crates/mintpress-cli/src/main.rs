//! # mintpress CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;

use clap::Parser;

use mintpress_cli::store::LedgerStore;
use mintpress_cli::{admin, init, market, mint, query};

/// Token ledger and marketplace over a JSON file.
///
/// Mints numbered pressings under per-edition caps, tracks ownership
/// and listings, and settles sales with a fixed pool fee.
#[derive(Parser, Debug)]
#[command(name = "mintpress", version, about)]
struct Cli {
    /// Path to the ledger file.
    #[arg(long, global = true, default_value = "ledger.json")]
    ledger: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Create a new ledger file.
    Init(init::InitArgs),
    /// Mint a new pressing (issuer only).
    Mint(mint::MintArgs),
    /// List a token for sale.
    Offer(market::OfferArgs),
    /// Take a token off the market.
    Delist(market::DelistArgs),
    /// Buy a listed token.
    Buy(market::BuyArgs),
    /// Move a token between accounts without a sale.
    Transfer(admin::TransferArgs),
    /// Withdraw pooled funds (issuer only).
    Withdraw(admin::WithdrawArgs),
    /// Replace the base URI for all tokens (issuer only).
    SetBaseUri(admin::SetBaseUriArgs),
    /// Record the cross-chain pointer (issuer only).
    SetBridge(admin::SetBridgeArgs),
    /// Hand the issuer role to a new account (issuer only).
    TransferOwnership(admin::TransferOwnershipArgs),
    /// Show one token's record.
    Show(query::ShowArgs),
    /// List every live token.
    List,
    /// List one account's holdings (defaults to the pool).
    Holdings(query::HoldingsArgs),
    /// Show the ledger's top-level state.
    Status,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = LedgerStore::new(cli.ledger);

    match cli.command {
        Commands::Init(args) => init::run(&store, args),
        Commands::Mint(args) => mint::run(&store, args),
        Commands::Offer(args) => market::offer(&store, args),
        Commands::Delist(args) => market::delist(&store, args),
        Commands::Buy(args) => market::buy(&store, args),
        Commands::Transfer(args) => admin::transfer(&store, args),
        Commands::Withdraw(args) => admin::withdraw(&store, args),
        Commands::SetBaseUri(args) => admin::set_base_uri(&store, args),
        Commands::SetBridge(args) => admin::set_bridge(&store, args),
        Commands::TransferOwnership(args) => admin::transfer_ownership(&store, args),
        Commands::Show(args) => query::show(&store, args),
        Commands::List => query::list(&store),
        Commands::Holdings(args) => query::holdings(&store, args),
        Commands::Status => query::status(&store),
    }
}
