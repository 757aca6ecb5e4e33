use crate::tests::test_utils::*;
use crate::*;

fn exponential(start_price: u128, base_price: u128, half_life_seconds: u64) -> AuctionConfig {
    AuctionConfig {
        start_time: T0,
        start_price: U128(start_price),
        base_price: U128(base_price),
        kind: DecayKind::Exponential { half_life_seconds },
        configured_by: owner(),
        configured_at: T0,
    }
}

fn linear(start_price: u128, base_price: u128, end_time: u64) -> AuctionConfig {
    AuctionConfig {
        start_time: T0,
        start_price: U128(start_price),
        base_price: U128(base_price),
        kind: DecayKind::Linear { end_time },
        configured_by: owner(),
        configured_at: T0,
    }
}

// --- Shared behavior ---

#[test]
fn before_start_is_an_error() {
    for config in [exponential(500, 100, 60), linear(500, 100, T0 + 86_400)] {
        let err = config.price_at(T0 - 1).unwrap_err();
        assert!(matches!(err, MinterError::AuctionNotStarted(_)));
    }
}

#[test]
fn at_start_is_start_price() {
    assert_eq!(exponential(500, 100, 60).price_at(T0).unwrap(), 500);
    assert_eq!(linear(500, 100, T0 + 86_400).price_at(T0).unwrap(), 500);
}

#[test]
fn flat_auction_stays_at_base() {
    let config = exponential(100, 100, 60);
    assert_eq!(config.price_at(T0).unwrap(), 100);
    assert_eq!(config.price_at(T0 + 1_000_000).unwrap(), 100);
}

// --- Exponential decay ---

#[test]
fn one_half_life_halves_the_gap() {
    // 100 + (500 - 100) / 2
    assert_eq!(exponential(500, 100, 60).price_at(T0 + 60).unwrap(), 300);
}

#[test]
fn two_half_lives_quarter_the_gap() {
    assert_eq!(exponential(500, 100, 60).price_at(T0 + 120).unwrap(), 200);
}

#[test]
fn mid_period_interpolates_linearly() {
    // Half-way through the first period: 400 - 400 * 30 / 120 = 300 above base
    assert_eq!(exponential(500, 100, 60).price_at(T0 + 30).unwrap(), 400);
}

#[test]
fn distant_future_converges_to_base() {
    let config = exponential(500, 100, 60);
    assert_eq!(config.price_at(T0 + 60 * 40).unwrap(), 100);
    // Past 128 halvings the gap is defined to be gone.
    assert_eq!(config.price_at(T0 + 60 * 10_000).unwrap(), 100);
}

#[test]
fn exponential_is_monotone_and_floored() {
    let config = exponential(1_000_000_000, 250_000, 97);
    let mut last = config.price_at(T0).unwrap();
    for step in 1..=2_000u64 {
        let price = config.price_at(T0 + step * 7).unwrap();
        assert!(price <= last, "price rose at step {step}");
        assert!(price >= 250_000, "price fell below base at step {step}");
        last = price;
    }
}

#[test]
fn large_values_no_overflow() {
    let start = 100_000_000_000_000_000_000_000_000u128; // 100 NEAR
    let base = 1_000_000_000_000_000_000_000_000u128; // 1 NEAR
    let config = exponential(start, base, 3_600);
    let expected = base + (start - base) / 2;
    assert_eq!(config.price_at(T0 + 3_600).unwrap(), expected);
}

// --- Linear decay ---

#[test]
fn linear_boundary_values() {
    let config = linear(500, 100, T0 + 86_400);
    assert_eq!(config.price_at(T0).unwrap(), 500);
    assert_eq!(config.price_at(T0 + 43_200).unwrap(), 300);
    assert_eq!(config.price_at(T0 + 86_400).unwrap(), 100);
    // Past the end the price is exactly the base, forever.
    assert_eq!(config.price_at(T0 + 200_000).unwrap(), 100);
}

#[test]
fn linear_rounds_toward_base() {
    // drop = 900 * 1 / 7 = 128 (floor), price = 1000 - 128
    let config = linear(1_000, 100, T0 + 7);
    assert_eq!(config.price_at(T0 + 1).unwrap(), 872);
}

#[test]
fn linear_is_monotone_and_floored() {
    let config = linear(999_983, 17, T0 + 100_003);
    let mut last = config.price_at(T0).unwrap();
    for step in 1..=1_000u64 {
        let price = config.price_at(T0 + step * 101).unwrap();
        assert!(price <= last, "price rose at step {step}");
        assert!(price >= 17, "price fell below base at step {step}");
        last = price;
    }
}
