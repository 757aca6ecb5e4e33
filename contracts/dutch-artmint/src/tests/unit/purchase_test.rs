use crate::tests::test_utils::*;
use crate::*;
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

// One half-life after T0 the live project's price is 300.
fn at_half_life() -> u64 {
    T0 + 300
}

fn prepare_at_half_life(contract: &mut Contract, deposit: u128) -> Result<PendingPurchase, MinterError> {
    testing_env!(context_at(buyer(), at_half_life()).build());
    contract.prepare_purchase(&buyer(), core_contract(), 1, deposit)
}

#[test]
fn prepare_checks_price_and_locks() {
    let mut contract = contract_with_live_project();
    let pending = prepare_at_half_life(&mut contract, 300).unwrap();

    assert_eq!(pending.price, U128(300));
    assert_eq!(pending.deposit, U128(300));
    assert_eq!(pending.splits.len(), 2);
    let total: u128 = pending.splits.iter().map(|(_, amount)| amount.0).sum();
    assert_eq!(total, 300);
    assert_eq!(contract.get_purchase_count(core_contract(), 1), 1);

    // The lock is held until settlement.
    let err = contract
        .prepare_purchase(&buyer(), core_contract(), 1, 1_000)
        .unwrap_err();
    assert!(matches!(err, MinterError::OperationInProgress(_)));
}

#[test]
fn deposit_below_price_rejected() {
    let mut contract = contract_with_live_project();
    let err = prepare_at_half_life(&mut contract, 299).unwrap_err();
    assert!(matches!(err, MinterError::PriceNotMet(_)));
    // Nothing was persisted.
    assert_eq!(contract.get_purchase_count(core_contract(), 1), 0);
    let _ = prepare_at_half_life(&mut contract, 300).unwrap();
}

#[test]
fn unbound_project_rejected() {
    let mut contract = contract_with_live_project();
    contract
        .clear_binding(&filter_account(), core_contract(), 1)
        .unwrap();
    let err = prepare_at_half_life(&mut contract, 1_000).unwrap_err();
    assert!(matches!(err, MinterError::Unauthorized(_)));
}

#[test]
fn unconfigured_auction_rejected() {
    let mut contract = contract_with_live_project();
    contract
        .reset_auction(&owner(), core_contract(), 1)
        .unwrap();
    let err = prepare_at_half_life(&mut contract, 1_000).unwrap_err();
    assert!(matches!(err, MinterError::AuctionNotConfigured(_)));
}

#[test]
fn purchase_before_start_rejected() {
    let mut contract = new_contract();
    contract
        .set_splits(&owner(), core_contract(), 1, artist(), None, 0)
        .unwrap();
    contract
        .configure_auction(
            &owner(),
            core_contract(),
            1,
            T0 + 600,
            DecayKind::Exponential {
                half_life_seconds: 300,
            },
            U128(500),
            U128(100),
        )
        .unwrap();
    contract
        .record_binding(&filter_account(), core_contract(), 1)
        .unwrap();

    testing_env!(context_at(buyer(), T0 + 599).build());
    let err = contract
        .prepare_purchase(&buyer(), core_contract(), 1, 1_000)
        .unwrap_err();
    assert!(matches!(err, MinterError::AuctionNotStarted(_)));
}

#[test]
fn settlement_success_releases_lock_and_emits() {
    let mut contract = contract_with_live_project();
    let pending = prepare_at_half_life(&mut contract, 350).unwrap();

    let token_id = contract.finish_purchase(pending, Some("core.artmint.near:1:42".into()));
    assert_eq!(token_id.as_deref(), Some("core.artmint.near:1:42"));
    assert_eq!(contract.get_purchase_count(core_contract(), 1), 1);

    let logs = get_logs();
    assert!(logs.iter().any(|log| {
        log.contains("purchase_completed")
            && log.contains("\"price\":\"300\"")
            && log.contains("core.artmint.near:1:42")
    }));

    // Lock released: the next purchase may proceed.
    let _ = prepare_at_half_life(&mut contract, 300).unwrap();
}

#[test]
fn settlement_failure_rolls_back_and_refunds() {
    let mut contract = contract_with_live_project();
    let pending = prepare_at_half_life(&mut contract, 350).unwrap();

    let token_id = contract.finish_purchase(pending, None);
    assert!(token_id.is_none());
    // Counter rolled back, lock released.
    assert_eq!(contract.get_purchase_count(core_contract(), 1), 0);
    let _ = prepare_at_half_life(&mut contract, 300).unwrap();

    let logs = get_logs();
    assert!(logs.iter().any(|log| {
        log.contains("purchase_failed") && log.contains("\"refunded\":\"350\"")
    }));
}

#[test]
fn purchase_counts_accumulate() {
    let mut contract = contract_with_live_project();
    for count in 1..=3u64 {
        let pending = prepare_at_half_life(&mut contract, 500).unwrap();
        contract.finish_purchase(pending, Some(format!("token:{count}")));
        assert_eq!(contract.get_purchase_count(core_contract(), 1), count);
    }
}

#[test]
fn splits_carried_into_settlement_conserve_price() {
    let mut contract = contract_with_live_project();
    contract
        .set_splits(
            &owner(),
            core_contract(),
            1,
            artist(),
            Some(payee()),
            50,
        )
        .unwrap();
    let pending = prepare_at_half_life(&mut contract, 301).unwrap();

    // provider 10% of 300 = 30; payee half of 270 = 135; artist the rest.
    assert_eq!(
        pending.splits,
        vec![
            (provider(), U128(30)),
            (payee(), U128(135)),
            (artist(), U128(135)),
        ]
    );
}
