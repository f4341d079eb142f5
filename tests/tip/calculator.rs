use calcapp::tip::{TipTier, calculate_tip, parse_cost_of_service, tip_from_input};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn given_cost_and_tier_when_calculating_then_tip_is_percentage_of_cost() {
    assert_close(calculate_tip(100.0, TipTier::Amazing, false), 20.0);
    assert_close(calculate_tip(100.0, TipTier::Good, false), 18.0);
    assert_close(calculate_tip(100.0, TipTier::Ok, false), 15.0);
}

#[test]
fn given_round_up_when_calculating_then_tip_is_ceiled_to_whole_unit() {
    assert_close(calculate_tip(42.10, TipTier::Good, false), 7.578);
    assert_close(calculate_tip(42.10, TipTier::Good, true), 8.0);
    assert_close(calculate_tip(100.0, TipTier::Amazing, true), 20.0);
}

#[test]
fn given_text_input_when_parsing_cost_then_only_non_negative_numbers_are_accepted() {
    assert_eq!(parse_cost_of_service(" 12.5 "), Some(12.5));
    assert_eq!(parse_cost_of_service("0"), Some(0.0));
    assert_eq!(parse_cost_of_service(""), None);
    assert_eq!(parse_cost_of_service("   "), None);
    assert_eq!(parse_cost_of_service("abc"), None);
    assert_eq!(parse_cost_of_service("-3"), None);
    assert_eq!(parse_cost_of_service("NaN"), None);
    assert_eq!(parse_cost_of_service("inf"), None);
}

#[test]
fn given_unreadable_cost_when_calculating_from_input_then_tip_is_zero() {
    let outcome = tip_from_input("twelve", TipTier::Amazing, true);

    assert_eq!(outcome.cost_of_service, None);
    assert_eq!(outcome.tip, 0.0);
    assert_eq!(outcome.tier, TipTier::Amazing);
    assert!(outcome.round_up);
}

#[test]
fn given_readable_cost_when_calculating_from_input_then_outcome_carries_cost_and_tip() {
    let outcome = tip_from_input("20", TipTier::Ok, false);

    assert_eq!(outcome.cost_of_service, Some(20.0));
    assert_close(outcome.tip, 3.0);
}
