use serde::{Deserialize, Serialize};

const TIP_AMOUNT_LABEL: &str = "Tip Amount";

fn default_symbol() -> String {
    "$".to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

fn default_grouping_separator() -> String {
    ",".to_string()
}

fn default_fraction_digits() -> u8 {
    2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    #[default]
    Prefix,
    Suffix,
}

/// Currency rendering rules; the locale lookup itself belongs to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default)]
    pub symbol_position: SymbolPosition,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: String,
    #[serde(default = "default_fraction_digits")]
    pub fraction_digits: u8,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            symbol_position: SymbolPosition::default(),
            decimal_separator: default_decimal_separator(),
            grouping_separator: default_grouping_separator(),
            fraction_digits: default_fraction_digits(),
        }
    }
}

impl CurrencyFormat {
    pub fn format(&self, amount: f64) -> String {
        let digits = usize::from(self.fraction_digits);
        let fixed = format!("{:.*}", digits, amount.abs());
        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut number = group_thousands(whole, &self.grouping_separator);
        if let Some(fraction) = fraction {
            number.push_str(&self.decimal_separator);
            number.push_str(fraction);
        }

        // Amounts that round to zero render unsigned.
        let negative =
            amount.is_sign_negative() && fixed.bytes().any(|byte| matches!(byte, b'1'..=b'9'));
        let sign = if negative { "-" } else { "" };
        match self.symbol_position {
            SymbolPosition::Prefix => format!("{sign}{}{number}", self.symbol),
            SymbolPosition::Suffix => format!("{sign}{number} {}", self.symbol),
        }
    }
}

fn group_thousands(whole: &str, separator: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (index, ch) in whole.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

pub fn tip_amount_message(formatted_tip: &str) -> String {
    format!("{TIP_AMOUNT_LABEL}: {formatted_tip}")
}
