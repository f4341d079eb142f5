use calcapp::{
    cli::TipArgs,
    config::TipConfig,
    tip::{TipTier, render_for},
};

fn tip_config(value: serde_json::Value) -> TipConfig {
    serde_json::from_value(value).expect("tip config should deserialize")
}

fn args(cost: &str, tier: Option<TipTier>, round_up: Option<bool>) -> TipArgs {
    TipArgs {
        cost: cost.to_string(),
        tier,
        round_up,
    }
}

#[test]
fn given_config_default_tier_when_no_tier_flag_then_config_tier_applies() {
    let config = tip_config(serde_json::json!({ "default_tier": "good" }));

    let screen = render_for(&config, &args("100", None, None));

    assert_eq!(screen.outcome.tier, TipTier::Good);
    assert!((screen.outcome.tip - 18.0).abs() < 1e-9);
    assert_eq!(screen.message, "Tip Amount: $18.00");
}

#[test]
fn given_config_round_up_when_no_round_up_flag_then_tip_is_ceiled() {
    let config = tip_config(serde_json::json!({ "default_tier": "good", "round_up": true }));

    let screen = render_for(&config, &args("42.10", None, None));

    assert!(screen.outcome.round_up);
    assert_eq!(screen.outcome.tip, 8.0);
    assert_eq!(screen.message, "Tip Amount: $8.00");
}

#[test]
fn given_explicit_tier_when_config_has_default_then_flag_wins() {
    let config = tip_config(serde_json::json!({ "default_tier": "good" }));

    let screen = render_for(&config, &args("100", Some(TipTier::Amazing), None));

    assert_eq!(screen.outcome.tier, TipTier::Amazing);
    assert_eq!(screen.message, "Tip Amount: $20.00");
}

#[test]
fn given_round_up_flag_when_config_disables_rounding_then_flag_wins() {
    let config = TipConfig::default();

    let screen = render_for(&config, &args("42.10", None, Some(true)));

    assert_eq!(screen.outcome.tier, TipTier::Ok);
    assert_eq!(screen.outcome.tip, 7.0);
    assert_eq!(screen.message, "Tip Amount: $7.00");
}

#[test]
fn given_configured_currency_when_rendering_then_message_uses_it() {
    let config = tip_config(serde_json::json!({
        "currency": {
            "symbol": "€",
            "symbol_position": "suffix",
            "decimal_separator": ",",
            "grouping_separator": "."
        }
    }));

    let screen = render_for(&config, &args("10000", None, None));

    assert_eq!(screen.message, "Tip Amount: 1.500,00 €");
}

#[test]
fn given_unreadable_cost_when_rendering_then_zero_tip_is_shown() {
    let screen = render_for(&TipConfig::default(), &args("lots", Some(TipTier::Good), Some(true)));

    assert_eq!(screen.outcome.cost_of_service, None);
    assert_eq!(screen.message, "Tip Amount: $0.00");
}
