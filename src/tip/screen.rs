use crate::{
    cli::TipArgs,
    config::TipConfig,
    tip::{
        calculator::{TipOutcome, tip_from_input},
        currency::tip_amount_message,
    },
};

/// What the tip screen shows for one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct TipScreen {
    pub outcome: TipOutcome,
    pub message: String,
}

/// Options left unset on the command line fall back to the `tip` config section.
pub fn render_for(tip_config: &TipConfig, args: &TipArgs) -> TipScreen {
    let tier = args.tier.unwrap_or(tip_config.default_tier);
    let round_up = args.round_up.unwrap_or(tip_config.round_up);
    let outcome = tip_from_input(&args.cost, tier, round_up);
    let message = tip_amount_message(&tip_config.currency.format(outcome.tip));

    TipScreen { outcome, message }
}
