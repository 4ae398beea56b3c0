//! # The Ledger Aggregate
//!
//! One owned structure holds every piece of ledger state: token
//! records, enumeration indices, the edition schedule, minting
//! counters, the marketplace, the escrow pool balance, and the issuer
//! authority. The execution environment passes a caller identity into
//! every restricted operation and a clock reading into every
//! time-sensitive one.
//!
//! ## Operation discipline
//!
//! Every operation validates completely before its first mutation, so
//! any failure leaves the aggregate exactly as it was. Operations with
//! outward payment effects (`buy`, `withdraw`) finalize internal state
//! and then *return* the credit instruction for the environment to
//! execute — checks, effects, interactions, in that order.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use mintpress_core::{AccountId, Amount, Timestamp, TokenId};

use crate::capability::Capability;
use crate::edition::EditionSchedule;
use crate::error::{LedgerError, LedgerResult};
use crate::index::TokenIndex;
use crate::market::{sale_fee, Payout, SaleReceipt, SaleState};
use crate::policy::MintingPolicy;

/// Construction parameters for a ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Collection name (e.g. "Squeeze Cheese").
    pub name: String,
    /// Collection symbol (e.g. "SQCHZ").
    pub symbol: String,
    /// Prefix prepended to every token's URI suffix.
    pub base_uri: String,
    /// The initial issuing authority.
    pub issuer: AccountId,
    /// The distinguished escrow-pool account. Tokens minted to this
    /// account are issuer-controlled inventory; sales by it retain the
    /// whole payment in the pool.
    pub pool_account: AccountId,
    /// Series designated as tribute series (capped at 21 per edition).
    pub tribute_series: BTreeSet<u8>,
    /// Activation instant; edition 1 starts here.
    pub activated_at: Timestamp,
}

/// A single minted pressing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Current owner.
    pub owner: AccountId,
    /// Series component, fixed at mint.
    pub series: u8,
    /// Pressing number, fixed at mint.
    pub pressing: u16,
    /// Edition stamped at mint time, fixed thereafter.
    pub edition: u8,
    /// Marketplace state.
    pub sale: SaleState,
    /// Opaque immutable memo.
    pub memo: String,
    /// Immutable URI suffix, resolved against the ledger base URI.
    pub uri: String,
}

/// The ledger aggregate. See the module docs for the operation
/// discipline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    name: String,
    symbol: String,
    base_uri: String,
    issuer: AccountId,
    pool_account: AccountId,
    cross_chain_address: Option<String>,
    tokens: HashMap<TokenId, Token>,
    all_tokens: TokenIndex,
    owned: HashMap<AccountId, TokenIndex>,
    editions: EditionSchedule,
    policy: MintingPolicy,
    pool_balance: Amount,
}

impl Ledger {
    /// Create an empty ledger from its configuration.
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            name: config.name,
            symbol: config.symbol,
            base_uri: config.base_uri,
            issuer: config.issuer,
            pool_account: config.pool_account,
            cross_chain_address: None,
            tokens: HashMap::new(),
            all_tokens: TokenIndex::new(),
            owned: HashMap::new(),
            editions: EditionSchedule::new(config.activated_at),
            policy: MintingPolicy::new(config.tribute_series),
            pool_balance: 0,
        }
    }

    // ─── Collection queries ──────────────────────────────────────────

    /// Collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Collection symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The current issuing authority.
    pub fn issuer(&self) -> &AccountId {
        &self.issuer
    }

    /// The escrow-pool account.
    pub fn pool_account(&self) -> &AccountId {
        &self.pool_account
    }

    /// The pool's accumulated balance from sales.
    pub fn pool_balance(&self) -> Amount {
        self.pool_balance
    }

    /// The cross-chain pointer, if set. Opaque and unvalidated.
    pub fn cross_chain_address(&self) -> Option<&str> {
        self.cross_chain_address.as_deref()
    }

    /// The edition as of the last mint. Queries never advance it.
    pub fn current_edition(&self) -> u8 {
        self.editions.current_edition()
    }

    /// Capability discovery: every capability in [`Capability`] is
    /// supported.
    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::OwnershipTransfer | Capability::Metadata | Capability::Enumeration => true,
        }
    }

    // ─── Token queries ───────────────────────────────────────────────

    /// The token record for `id`.
    pub fn token(&self, id: TokenId) -> LedgerResult<&Token> {
        self.tokens.get(&id).ok_or(LedgerError::UnknownToken(id))
    }

    /// The current owner of `id`.
    pub fn owner_of(&self, id: TokenId) -> LedgerResult<&AccountId> {
        Ok(&self.token(id)?.owner)
    }

    /// The resolved metadata URI: base URI concatenated with the
    /// token's suffix. A base-URI update applies to all tokens at once.
    pub fn token_uri(&self, id: TokenId) -> LedgerResult<String> {
        let token = self.token(id)?;
        Ok(format!("{}{}", self.base_uri, token.uri))
    }

    /// The token's series component.
    pub fn token_series(&self, id: TokenId) -> LedgerResult<u8> {
        Ok(self.token(id)?.series)
    }

    /// The token's pressing number.
    pub fn token_pressing(&self, id: TokenId) -> LedgerResult<u16> {
        Ok(self.token(id)?.pressing)
    }

    /// The edition the token was minted in.
    pub fn token_edition(&self, id: TokenId) -> LedgerResult<u8> {
        Ok(self.token(id)?.edition)
    }

    /// The token's asking price; 0 when not listed.
    pub fn token_price(&self, id: TokenId) -> LedgerResult<Amount> {
        Ok(self.token(id)?.sale.price())
    }

    // ─── Enumeration ─────────────────────────────────────────────────

    /// Number of live tokens.
    pub fn total_supply(&self) -> usize {
        self.all_tokens.len()
    }

    /// Number of tokens held by `account`.
    pub fn balance_of(&self, account: &AccountId) -> usize {
        self.owned.get(account).map_or(0, TokenIndex::len)
    }

    /// The `i`-th token in the global enumeration.
    pub fn token_by_index(&self, i: usize) -> LedgerResult<TokenId> {
        self.all_tokens.get(i).ok_or(LedgerError::IndexOutOfRange {
            index: i,
            len: self.all_tokens.len(),
        })
    }

    /// The `i`-th token among `account`'s holdings.
    pub fn token_of_owner_by_index(&self, account: &AccountId, i: usize) -> LedgerResult<TokenId> {
        let len = self.balance_of(account);
        self.owned
            .get(account)
            .and_then(|index| index.get(i))
            .ok_or(LedgerError::IndexOutOfRange { index: i, len })
    }

    /// All tokens held by `account`, in enumeration order.
    pub fn tokens_owned_by(&self, account: &AccountId) -> Vec<TokenId> {
        self.owned.get(account).map_or_else(Vec::new, TokenIndex::to_vec)
    }

    /// All tokens currently held by the escrow pool.
    pub fn pool_holdings(&self) -> Vec<TokenId> {
        self.tokens_owned_by(&self.pool_account)
    }

    // ─── Issuer operations ───────────────────────────────────────────

    /// Mint a new pressing. Issuer-only.
    ///
    /// The edition stamped onto the token is derived from `now`; a
    /// failed mint leaves the edition schedule unchanged. A non-zero
    /// `price` lists the token for sale immediately, which is how
    /// issuer inventory is offered: mint to the pool account with a
    /// price attached.
    #[allow(clippy::too_many_arguments)]
    pub fn mint(
        &mut self,
        caller: &AccountId,
        to: AccountId,
        series: u8,
        pressing: u16,
        price: Amount,
        memo: impl Into<String>,
        uri: impl Into<String>,
        now: Timestamp,
    ) -> LedgerResult<TokenId> {
        self.require_issuer(caller)?;

        let projection = self.editions.project(now);
        let edition = projection.edition();
        self.policy.validate_mint(series, pressing, edition)?;

        let id = TokenId::from_parts(edition, series, pressing);
        if self.tokens.contains_key(&id) {
            return Err(LedgerError::DuplicateToken(id));
        }

        // All checks passed; commit.
        self.editions.apply(projection);
        self.policy.record_mint(series, edition);
        self.tokens.insert(
            id,
            Token {
                owner: to.clone(),
                series,
                pressing,
                edition,
                sale: SaleState::from_price(price),
                memo: memo.into(),
                uri: uri.into(),
            },
        );
        self.all_tokens.push(id);
        self.owned.entry(to).or_default().push(id);
        Ok(id)
    }

    /// Hand the issuing authority to `new_issuer`. Issuer-only; takes
    /// effect immediately for every subsequent issuer gate.
    pub fn transfer_ownership(
        &mut self,
        caller: &AccountId,
        new_issuer: AccountId,
    ) -> LedgerResult<()> {
        self.require_issuer(caller)?;
        self.issuer = new_issuer;
        Ok(())
    }

    /// Replace the base URI for all existing and future tokens.
    /// Issuer-only.
    pub fn set_base_uri(&mut self, caller: &AccountId, new_base: impl Into<String>) -> LedgerResult<()> {
        self.require_issuer(caller)?;
        self.base_uri = new_base.into();
        Ok(())
    }

    /// Set the opaque cross-chain pointer. Issuer-only; no validation.
    pub fn set_cross_chain_address(
        &mut self,
        caller: &AccountId,
        address: impl Into<String>,
    ) -> LedgerResult<()> {
        self.require_issuer(caller)?;
        self.cross_chain_address = Some(address.into());
        Ok(())
    }

    /// Debit the escrow pool and instruct the environment to credit
    /// `to`. Issuer-only.
    pub fn withdraw(
        &mut self,
        caller: &AccountId,
        to: AccountId,
        amount: Amount,
    ) -> LedgerResult<Payout> {
        self.require_issuer(caller)?;
        if amount > self.pool_balance {
            return Err(LedgerError::InsufficientBalance {
                balance: self.pool_balance,
                requested: amount,
            });
        }
        self.pool_balance -= amount;
        Ok(Payout { to, amount })
    }

    // ─── Transfers ───────────────────────────────────────────────────

    /// Transfer `id` from `from` to `to`.
    ///
    /// Pool-held tokens are issuer-controlled inventory: only the
    /// current issuer may move them. Any other token may be moved only
    /// by its direct owner. The listing, if any, travels with the
    /// token.
    pub fn transfer_from(
        &mut self,
        caller: &AccountId,
        from: &AccountId,
        to: AccountId,
        id: TokenId,
    ) -> LedgerResult<()> {
        let owner = self.owner_of(id)?.clone();
        if owner != *from {
            return Err(LedgerError::NotAuthorized {
                caller: from.clone(),
                token: id,
            });
        }
        if owner == self.pool_account {
            self.require_issuer(caller)?;
        } else if *caller != owner {
            return Err(LedgerError::NotAuthorized {
                caller: caller.clone(),
                token: id,
            });
        }
        self.move_token(id, &owner, to);
        Ok(())
    }

    // ─── Marketplace ─────────────────────────────────────────────────

    /// List `id` for sale at `price`. Owner-only; a price of 0 delists.
    pub fn offer_for_sale(
        &mut self,
        caller: &AccountId,
        id: TokenId,
        price: Amount,
    ) -> LedgerResult<()> {
        self.require_owner(caller, id)?;
        // require_owner verified existence.
        if let Some(token) = self.tokens.get_mut(&id) {
            token.sale = SaleState::from_price(price);
        }
        Ok(())
    }

    /// Take `id` off the market. Owner-only.
    pub fn remove_from_sale(&mut self, caller: &AccountId, id: TokenId) -> LedgerResult<()> {
        self.offer_for_sale(caller, id, 0)
    }

    /// Buy `id` with the attached `payment`.
    ///
    /// On success the token moves to `buyer` and is delisted, the
    /// pool's cut is added to the pool balance, and the receipt carries
    /// the seller's credit (if any) for the environment to execute —
    /// after, never before, this bookkeeping. Payment in excess of the
    /// asking price follows the same routing and is not refunded.
    pub fn buy(
        &mut self,
        buyer: AccountId,
        id: TokenId,
        payment: Amount,
    ) -> LedgerResult<SaleReceipt> {
        let token = self.token(id)?;
        let price = token.sale.asking_price().ok_or(LedgerError::NotForSale(id))?;
        if payment < price {
            return Err(LedgerError::InsufficientPayment { payment, price });
        }
        let seller = token.owner.clone();

        // Effects: delist and change hands before any payment routing.
        if let Some(token) = self.tokens.get_mut(&id) {
            token.sale = SaleState::NotListed;
        }
        self.move_token(id, &seller, buyer.clone());

        let (pool_cut, seller_proceeds) = if seller == self.pool_account {
            (payment, None)
        } else {
            let fee = sale_fee(payment);
            (
                fee,
                Some(Payout {
                    to: seller.clone(),
                    amount: payment - fee,
                }),
            )
        };
        self.pool_balance = self.pool_balance.saturating_add(pool_cut);

        Ok(SaleReceipt {
            token: id,
            seller,
            buyer,
            payment,
            pool_cut,
            seller_proceeds,
        })
    }

    // ─── Internal helpers ────────────────────────────────────────────

    fn require_issuer(&self, caller: &AccountId) -> LedgerResult<()> {
        if *caller != self.issuer {
            return Err(LedgerError::NotIssuer(caller.clone()));
        }
        Ok(())
    }

    fn require_owner(&self, caller: &AccountId, id: TokenId) -> LedgerResult<()> {
        let owner = self.owner_of(id)?;
        if caller != owner {
            return Err(LedgerError::NotAuthorized {
                caller: caller.clone(),
                token: id,
            });
        }
        Ok(())
    }

    /// Move `id` between per-owner enumerations and update the record.
    /// Callers have already validated existence and authority.
    fn move_token(&mut self, id: TokenId, from: &AccountId, to: AccountId) {
        if let Some(index) = self.owned.get_mut(from) {
            index.remove(id);
            if index.is_empty() {
                self.owned.remove(from);
            }
        }
        self.owned.entry(to.clone()).or_default().push(id);
        if let Some(token) = self.tokens.get_mut(&id) {
            token.owner = to;
        }
    }
}
