use crate::tests::test_utils::*;
use crate::*;

fn project_with_payee(payee_percentage: u8) -> Contract {
    let mut contract = new_contract();
    contract
        .set_splits(
            &owner(),
            core_contract(),
            1,
            artist(),
            Some(payee()),
            payee_percentage,
        )
        .unwrap();
    contract
}

#[test]
fn documented_split_example() {
    // gross 1_000_000, provider 10%, payee 50% of the artist's remainder
    let contract = project_with_payee(50);
    let splits = contract
        .get_splits(core_contract(), 1, U128(1_000_000))
        .unwrap();
    assert_eq!(
        splits,
        vec![
            (provider(), U128(100_000)),
            (payee(), U128(450_000)),
            (artist(), U128(450_000)),
        ]
    );
}

#[test]
fn platform_provider_is_an_independent_line_item() {
    let mut contract = project_with_payee(50);
    contract
        .patch_provider_config(
            &owner(),
            ProviderConfigUpdate {
                platform_provider_id: Some("platform.artmint.near".parse().unwrap()),
                platform_provider_primary_percentage: Some(5),
                ..Default::default()
            },
        )
        .unwrap();

    let splits = contract
        .get_splits(core_contract(), 1, U128(1_000_000))
        .unwrap();
    // 10% and 5% both of the gross; payee takes half of the 850_000 left.
    assert_eq!(splits.len(), 4);
    assert_eq!(splits[0], (provider(), U128(100_000)));
    assert_eq!(splits[1].1, U128(50_000));
    assert_eq!(splits[2], (payee(), U128(425_000)));
    assert_eq!(splits[3], (artist(), U128(425_000)));
}

#[test]
fn conservation_holds_for_awkward_amounts() {
    let contract = project_with_payee(33);
    for gross in [1u128, 7, 99, 101, 1_003, 999_999_999_999_999_999] {
        let splits = contract
            .get_splits(core_contract(), 1, U128(gross))
            .unwrap();
        let total: u128 = splits.iter().map(|(_, amount)| amount.0).sum();
        assert_eq!(total, gross);
        assert!(splits.iter().all(|(_, amount)| amount.0 > 0 || gross == 0));
    }
}

#[test]
fn zero_gross_produces_no_entries() {
    let contract = project_with_payee(50);
    assert!(contract
        .get_splits(core_contract(), 1, U128(0))
        .unwrap()
        .is_empty());
}

#[test]
fn splits_on_unconfigured_project_fail() {
    let contract = new_contract();
    let err = contract
        .get_splits(core_contract(), 1, U128(1_000))
        .unwrap_err();
    assert!(matches!(err, MinterError::InvalidConfiguration(_)));
}

#[test]
fn payee_percentage_over_100_rejected() {
    let mut contract = new_contract();
    let err = contract
        .set_splits(&owner(), core_contract(), 1, artist(), Some(payee()), 101)
        .unwrap_err();
    assert!(matches!(err, MinterError::PercentagesInvalid(_)));
}

#[test]
fn payee_percentage_without_recipient_rejected() {
    let mut contract = new_contract();
    let err = contract
        .set_splits(&owner(), core_contract(), 1, artist(), None, 10)
        .unwrap_err();
    assert!(matches!(err, MinterError::PercentagesInvalid(_)));
}

#[test]
fn artist_maintains_own_payee() {
    let mut contract = project_with_payee(0);
    contract
        .set_splits(
            &artist(),
            core_contract(),
            1,
            artist(),
            Some(payee()),
            25,
        )
        .unwrap();
    let splits = contract.get_project_splits(core_contract(), 1).unwrap();
    assert_eq!(splits.additional_payee_percentage, 25);
}

#[test]
fn stranger_cannot_touch_splits() {
    let mut contract = project_with_payee(0);
    let err = contract
        .set_splits(&buyer(), core_contract(), 1, buyer(), None, 0)
        .unwrap_err();
    assert!(matches!(err, MinterError::Unauthorized(_)));
}

#[test]
fn initial_assignment_is_owner_only() {
    let mut contract = new_contract();
    let err = contract
        .set_splits(&artist(), core_contract(), 1, artist(), None, 0)
        .unwrap_err();
    assert!(matches!(err, MinterError::Unauthorized(_)));
}
