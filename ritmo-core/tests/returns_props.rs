use proptest::prelude::*;
use ritmo_core::{cumulative_returns, daily_returns};

fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "{a} != {b} (tol {tol})");
}

#[test]
fn ten_percent_steps() {
    let closes = [100.0, 110.0, 121.0];
    let daily = daily_returns(&closes);
    let cumulative = cumulative_returns(&closes);
    assert_eq!(daily.len(), 2);
    assert_close(daily[0], 0.10, 1e-12);
    assert_close(daily[1], 0.10, 1e-12);
    assert_close(cumulative[0], 0.10, 1e-12);
    assert_close(cumulative[1], 0.21, 1e-12);
}

#[test]
fn constant_series_has_zero_returns() {
    let closes = [42.0; 10];
    assert!(daily_returns(&closes).iter().all(|&r| r == 0.0));
    assert!(cumulative_returns(&closes).iter().all(|&c| c == 0.0));
}

#[test]
fn short_series_yield_empty_returns() {
    assert!(daily_returns(&[]).is_empty());
    assert!(daily_returns(&[100.0]).is_empty());
    assert!(cumulative_returns(&[100.0]).is_empty());
}

proptest! {
    #[test]
    fn lengths_are_one_less_than_input(closes in proptest::collection::vec(1.0f64..10_000.0, 2..300)) {
        prop_assert_eq!(daily_returns(&closes).len(), closes.len() - 1);
        prop_assert_eq!(cumulative_returns(&closes).len(), closes.len() - 1);
    }

    #[test]
    fn cumulative_return_telescopes(closes in proptest::collection::vec(1.0f64..10_000.0, 2..300)) {
        let cumulative = cumulative_returns(&closes);
        let expected = closes[closes.len() - 1] / closes[0] - 1.0;
        let got = *cumulative.last().unwrap();
        prop_assert!((got - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }
}
