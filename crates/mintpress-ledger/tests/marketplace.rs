//! End-to-end marketplace scenarios: issuer inventory sales, resales
//! with the fee split, edition boundaries, and cap exhaustion, driven
//! through the public operation surface only.

use std::collections::BTreeSet;

use chrono::Duration;

use mintpress_core::{AccountId, Timestamp, TokenId};
use mintpress_ledger::{
    sale_fee, Capability, Ledger, LedgerConfig, LedgerError, Payout, STANDARD_CAP, TRIBUTE_CAP,
};

const BASE_URI: &str = "https://pressings.example/";

fn account(name: &str) -> AccountId {
    AccountId::new(name).unwrap()
}

fn activation() -> Timestamp {
    Timestamp::parse("2026-01-01T00:00:00Z").unwrap()
}

fn new_ledger() -> Ledger {
    Ledger::new(LedgerConfig {
        name: "Squeeze Cheese".to_string(),
        symbol: "SQCHZ".to_string(),
        base_uri: BASE_URI.to_string(),
        issuer: account("owner"),
        pool_account: account("pool"),
        tribute_series: BTreeSet::from([2]),
        activated_at: activation(),
    })
}

#[test]
fn supported_capabilities() {
    let ledger = new_ledger();
    for capability in Capability::ALL {
        assert!(ledger.supports(capability));
    }
    assert_eq!(ledger.name(), "Squeeze Cheese");
    assert_eq!(ledger.symbol(), "SQCHZ");
}

#[test]
fn minted_for_sale_can_be_bought_straight_from_the_pool() {
    let mut ledger = new_ledger();
    let owner = account("owner");
    let pool = account("pool");

    let id = ledger
        .mint(&owner, pool.clone(), 1, 1, 1000, "memo1", "1.json", activation())
        .unwrap();
    assert_eq!(ledger.owner_of(id).unwrap(), &pool);
    assert_eq!(ledger.token_uri(id).unwrap(), format!("{BASE_URI}1.json"));

    let receipt = ledger.buy(account("bob"), id, 1000).unwrap();
    assert_eq!(ledger.owner_of(id).unwrap(), &account("bob"));
    assert_eq!(receipt.pool_cut, 1000);
    assert_eq!(receipt.seller_proceeds, None);
    assert_eq!(ledger.pool_balance(), 1000);
}

#[test]
fn resale_splits_payment_between_seller_and_pool() {
    let mut ledger = new_ledger();
    let owner = account("owner");
    let bob = account("bob");
    let sara = account("sara");

    let id = ledger
        .mint(&owner, account("pool"), 1, 1, 1000, "memo1", "1.json", activation())
        .unwrap();
    ledger.buy(bob.clone(), id, 1000).unwrap();

    // Double-buy fails: the first purchase delisted the token.
    assert_eq!(
        ledger.buy(sara.clone(), id, 1000).unwrap_err(),
        LedgerError::NotForSale(id)
    );

    let resale_price = 2000;
    ledger.offer_for_sale(&bob, id, resale_price).unwrap();
    assert_eq!(ledger.token_price(id).unwrap(), resale_price);

    let receipt = ledger.buy(sara.clone(), id, resale_price).unwrap();
    assert_eq!(ledger.owner_of(id).unwrap(), &sara);

    let fee = sale_fee(resale_price);
    assert_eq!(receipt.pool_cut, fee);
    assert_eq!(
        receipt.seller_proceeds,
        Some(Payout {
            to: bob,
            amount: resale_price - fee,
        })
    );
    // Pool kept the mint sale plus the resale fee.
    assert_eq!(ledger.pool_balance(), 1000 + fee);
}

#[test]
fn delisting_blocks_purchase_until_relisted() {
    let mut ledger = new_ledger();
    let owner = account("owner");
    let bob = account("bob");
    let sara = account("sara");

    let id = ledger
        .mint(&owner, bob.clone(), 1, 1, 1000, "memo1", "1.json", activation())
        .unwrap();

    ledger.remove_from_sale(&bob, id).unwrap();
    assert_eq!(
        ledger.buy(sara.clone(), id, 1000).unwrap_err(),
        LedgerError::NotForSale(id)
    );

    ledger.offer_for_sale(&bob, id, 5000).unwrap();
    ledger.buy(sara.clone(), id, 5000).unwrap();
    assert_eq!(ledger.owner_of(id).unwrap(), &sara);
}

#[test]
fn pooled_funds_leave_only_through_issuer_withdrawal() {
    let mut ledger = new_ledger();
    let owner = account("owner");
    let bob = account("bob");

    let id = ledger
        .mint(&owner, account("pool"), 1, 1, 1000, "memo1", "1.json", activation())
        .unwrap();
    ledger.buy(bob.clone(), id, 1000).unwrap();

    assert_eq!(
        ledger.withdraw(&bob, account("sara"), 1000).unwrap_err(),
        LedgerError::NotIssuer(bob)
    );
    let payout = ledger.withdraw(&owner, account("sara"), 1000).unwrap();
    assert_eq!(payout.amount, 1000);
    assert_eq!(ledger.pool_balance(), 0);
}

#[test]
fn enumeration_follows_mints_and_transfers() {
    let mut ledger = new_ledger();
    let owner = account("owner");
    let bob = account("bob");
    let sara = account("sara");

    let id1 = ledger
        .mint(&owner, bob.clone(), 1, 1, 0, "memo1", "1.json", activation())
        .unwrap();
    let id2 = ledger
        .mint(&owner, bob.clone(), 1, 2, 0, "memo2", "2.json", activation())
        .unwrap();
    let id3 = ledger
        .mint(&owner, sara.clone(), 1, 3, 0, "memo3", "3.json", activation())
        .unwrap();

    assert_eq!(ledger.total_supply(), 3);
    assert_eq!(ledger.token_by_index(0).unwrap(), id1);
    assert_eq!(ledger.token_by_index(1).unwrap(), id2);
    assert_eq!(ledger.token_by_index(2).unwrap(), id3);
    assert_eq!(ledger.token_of_owner_by_index(&bob, 1).unwrap(), id2);

    // Density invariant under transfer churn.
    ledger.transfer_from(&bob, &bob, sara.clone(), id1).unwrap();
    for holder in [&bob, &sara] {
        assert_eq!(
            ledger.balance_of(holder),
            ledger.tokens_owned_by(holder).len()
        );
        for id in ledger.tokens_owned_by(holder) {
            assert_eq!(ledger.owner_of(id).unwrap(), holder);
        }
    }
    assert_eq!(ledger.balance_of(&bob), 1);
    assert_eq!(ledger.balance_of(&sara), 2);
}

#[test]
fn pool_holdings_are_enumerable() {
    let mut ledger = new_ledger();
    let owner = account("owner");
    let pool = account("pool");

    ledger
        .mint(&owner, pool.clone(), 1, 1, 1000, "memo", "uri", activation())
        .unwrap();
    ledger
        .mint(&owner, pool.clone(), 1, 2, 1000, "memo", "uri", activation())
        .unwrap();

    assert_eq!(ledger.pool_holdings().len(), 2);
    assert_eq!(ledger.balance_of(&pool), 2);
}

#[test]
fn editions_stamp_by_elapsed_time_not_mint_count() {
    let mut ledger = new_ledger();
    let owner = account("owner");
    let bob = account("bob");
    let sara = account("sara");

    let id1 = ledger
        .mint(&owner, bob.clone(), 1, 1, 0, "memo1", "1.json", activation())
        .unwrap();

    // Half a period later: same edition.
    let mid_period = activation().advanced_by(Duration::days(3) + Duration::hours(12));
    let id2 = ledger
        .mint(&owner, sara.clone(), 1, 2, 0, "memo2", "2.json", mid_period)
        .unwrap();

    // Past the seven-day boundary: next edition, numbering continues.
    let next_period = activation().advanced_by(Duration::days(7) + Duration::hours(3));
    let id3 = ledger
        .mint(&owner, bob.clone(), 1, 3, 0, "memo3", "3.json", next_period)
        .unwrap();

    assert_eq!(ledger.token_edition(id1).unwrap(), 1);
    assert_eq!(ledger.token_edition(id2).unwrap(), 1);
    assert_eq!(ledger.token_edition(id3).unwrap(), 2);
    assert_eq!(id3, TokenId::from_parts(2, 1, 3));
}

#[test]
fn minting_caps_per_edition() {
    let mut ledger = new_ledger();
    let owner = account("owner");
    let pool = account("pool");
    let tribute_series = 2;
    let standard_series = 8;

    // Pressing numbers start at 1, not 0.
    assert!(matches!(
        ledger
            .mint(&owner, pool.clone(), standard_series, 0, 1000, "m", "u", activation())
            .unwrap_err(),
        LedgerError::InvalidPressingNumber { expected: 1, .. }
    ));

    for n in 1..=STANDARD_CAP {
        ledger
            .mint(&owner, pool.clone(), standard_series, n, 1000, "m", "u", activation())
            .unwrap();
    }
    assert_eq!(
        ledger
            .mint(
                &owner,
                pool.clone(),
                standard_series,
                STANDARD_CAP + 1,
                1000,
                "m",
                "u",
                activation(),
            )
            .unwrap_err(),
        LedgerError::MintingCapExceeded {
            series: standard_series,
            edition: 1,
            cap: STANDARD_CAP,
        }
    );

    for n in 1..=TRIBUTE_CAP {
        ledger
            .mint(&owner, pool.clone(), tribute_series, n, 1000, "m", "u", activation())
            .unwrap();
    }
    assert_eq!(
        ledger
            .mint(
                &owner,
                pool.clone(),
                tribute_series,
                TRIBUTE_CAP + 1,
                1000,
                "m",
                "u",
                activation(),
            )
            .unwrap_err(),
        LedgerError::MintingCapExceeded {
            series: tribute_series,
            edition: 1,
            cap: TRIBUTE_CAP,
        }
    );

    // A new edition refreshes capacity; numbering carries on.
    let next_edition = activation().advanced_by(Duration::days(8));
    let id = ledger
        .mint(
            &owner,
            pool.clone(),
            standard_series,
            STANDARD_CAP + 1,
            1000,
            "m",
            "u",
            next_edition,
        )
        .unwrap();
    assert_eq!(ledger.token_edition(id).unwrap(), 2);
}

#[test]
fn supply_matches_successful_mints_exactly() {
    let mut ledger = new_ledger();
    let owner = account("owner");
    let bob = account("bob");
    let mut minted = 0;

    for (series, pressing) in [(1u8, 1u16), (1, 2), (3, 1), (1, 9), (3, 2), (3, 9)] {
        if ledger
            .mint(&owner, bob.clone(), series, pressing, 0, "m", "u", activation())
            .is_ok()
        {
            minted += 1;
        }
    }
    // The out-of-sequence pressings (1,9) and (3,9) were rejected.
    assert_eq!(minted, 4);
    assert_eq!(ledger.total_supply(), minted);

    // No duplicate identifiers in the global enumeration.
    let mut seen = std::collections::HashSet::new();
    for i in 0..ledger.total_supply() {
        assert!(seen.insert(ledger.token_by_index(i).unwrap()));
    }
}

#[test]
fn example_scenario_mint_inspect_buy() {
    let mut ledger = new_ledger();
    let owner = account("owner");
    let bob = account("bob");
    let carol = account("carol");

    let id = ledger
        .mint(&owner, bob.clone(), 1, 1, 1000, "memo1", "1.json", activation())
        .unwrap();
    assert_eq!(id, TokenId::from_parts(1, 1, 1));
    assert_eq!(ledger.token_uri(id).unwrap(), format!("{BASE_URI}1.json"));
    assert_eq!(ledger.token_series(id).unwrap(), 1);
    assert_eq!(ledger.token_pressing(id).unwrap(), 1);

    let receipt = ledger.buy(carol.clone(), id, 1000).unwrap();
    assert_eq!(ledger.owner_of(id).unwrap(), &carol);
    assert_eq!(ledger.token_price(id).unwrap(), 0);
    assert_eq!(receipt.seller_proceeds.unwrap().to, bob);
}

#[test]
fn new_issuer_controls_every_gate() {
    let mut ledger = new_ledger();
    let owner = account("owner");
    let bob = account("bob");

    ledger.transfer_ownership(&owner, bob.clone()).unwrap();

    assert_eq!(
        ledger
            .mint(&owner, account("sara"), 1, 1, 0, "m", "u", activation())
            .unwrap_err(),
        LedgerError::NotIssuer(owner.clone())
    );
    assert_eq!(
        ledger.set_base_uri(&owner, "https://x/").unwrap_err(),
        LedgerError::NotIssuer(owner)
    );
    ledger
        .mint(&bob, account("sara"), 1, 1, 0, "m", "u", activation())
        .unwrap();
    ledger.set_base_uri(&bob, "https://x/").unwrap();
    ledger.set_cross_chain_address(&bob, "remote:deadbeef").unwrap();
    assert_eq!(ledger.cross_chain_address(), Some("remote:deadbeef"));
}
