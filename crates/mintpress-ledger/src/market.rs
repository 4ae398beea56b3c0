//! # Marketplace Sale State and Fee Split
//!
//! Each token carries a two-state sale machine: `NotListed` or
//! `Listed { price }`. Listing at price 0 is a delisting, so a zero
//! price is never observable in the `Listed` state.
//!
//! On a successful purchase the payment is split: a sale by the escrow
//! pool itself retains the whole payment in the pool; a sale by any
//! other account retains a 1.5% fee in the pool and credits the seller
//! the remainder. The fee is `payment * 15 / 1000` in integer
//! arithmetic, rounding down. Overpayment above the asking price
//! follows the same routing and is not refunded.

use serde::{Deserialize, Serialize};

use mintpress_core::{AccountId, Amount, TokenId};

/// Fee numerator: 15 parts per 1000 (1.5%).
pub const SALE_FEE_NUMERATOR: u64 = 15;

/// Fee denominator.
pub const SALE_FEE_DENOMINATOR: u64 = 1000;

/// The sale state of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleState {
    /// Not on the market.
    NotListed,
    /// Offered for sale at a fixed asking price (always non-zero).
    Listed {
        /// The asking price.
        price: Amount,
    },
}

impl SaleState {
    /// Build a sale state from a price, normalizing 0 to `NotListed`.
    pub fn from_price(price: Amount) -> Self {
        if price == 0 {
            Self::NotListed
        } else {
            Self::Listed { price }
        }
    }

    /// The asking price, if listed.
    pub fn asking_price(&self) -> Option<Amount> {
        match self {
            Self::NotListed => None,
            Self::Listed { price } => Some(*price),
        }
    }

    /// The price as reported to callers: 0 when not listed.
    pub fn price(&self) -> Amount {
        self.asking_price().unwrap_or(0)
    }

    /// Whether the token is on the market.
    pub fn is_listed(&self) -> bool {
        matches!(self, Self::Listed { .. })
    }
}

/// The issuer's cut of a payment: floor(payment * 15 / 1000).
pub fn sale_fee(payment: Amount) -> Amount {
    ((u128::from(payment) * u128::from(SALE_FEE_NUMERATOR)) / u128::from(SALE_FEE_DENOMINATOR))
        as Amount
}

/// An outward payment instruction.
///
/// The ledger finalizes all internal state before returning one of
/// these; the execution environment performs the actual credit. That
/// ordering is what makes the purchase protocol reentrancy-safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    /// The account to credit.
    pub to: AccountId,
    /// The amount to credit.
    pub amount: Amount,
}

/// The outcome of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleReceipt {
    /// The token that changed hands.
    pub token: TokenId,
    /// The previous owner.
    pub seller: AccountId,
    /// The new owner.
    pub buyer: AccountId,
    /// The full payment the buyer attached.
    pub payment: Amount,
    /// The portion retained by the escrow pool (the whole payment when
    /// the pool itself was the seller).
    pub pool_cut: Amount,
    /// The credit owed to the seller; `None` when the pool sold its own
    /// holding.
    pub seller_proceeds: Option<Payout>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_price_normalizes_zero() {
        assert_eq!(SaleState::from_price(0), SaleState::NotListed);
        assert_eq!(SaleState::from_price(5), SaleState::Listed { price: 5 });
    }

    #[test]
    fn test_price_reporting() {
        assert_eq!(SaleState::NotListed.price(), 0);
        assert_eq!(SaleState::Listed { price: 1000 }.price(), 1000);
        assert_eq!(SaleState::NotListed.asking_price(), None);
        assert!(!SaleState::NotListed.is_listed());
        assert!(SaleState::Listed { price: 1 }.is_listed());
    }

    #[test]
    fn test_fee_is_one_and_a_half_percent_floor() {
        assert_eq!(sale_fee(1000), 15);
        assert_eq!(sale_fee(2000), 30);
        // Floor division: 99 * 15 / 1000 = 1.485 -> 1.
        assert_eq!(sale_fee(99), 1);
        assert_eq!(sale_fee(66), 0);
        assert_eq!(sale_fee(0), 0);
    }

    #[test]
    fn test_fee_no_overflow_near_max() {
        // Wide intermediate: payment * 15 would overflow u64 here.
        let payment = Amount::MAX;
        assert_eq!(sale_fee(payment), payment / 1000 * 15 + (payment % 1000) * 15 / 1000);
    }
}
