pub mod calculator;
pub mod currency;
pub mod error;
pub mod screen;
pub mod tier;

pub use calculator::{TipOutcome, calculate_tip, parse_cost_of_service, tip_from_input};
pub use currency::{CurrencyFormat, SymbolPosition, tip_amount_message};
pub use error::{TipError, TipErrorKind};
pub use screen::{TipScreen, render_for};
pub use tier::TipTier;
