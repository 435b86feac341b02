//! Display currencies and monetary formatting
//!
//! All projection arithmetic happens in the base unit (hryvnia). A currency
//! only converts and labels amounts at display time.

use crate::error::{Result, SalaryError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency used to display monetary values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    /// Ukrainian hryvnia (base unit)
    #[default]
    UAH,
    /// Euro
    EUR,
    /// US dollar
    USD,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::UAH => "UAH",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::UAH => "₴",
            Currency::EUR => "€",
            Currency::USD => "$",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Currency::UAH => "Hryvnia",
            Currency::EUR => "Euro",
            Currency::USD => "US Dollar",
        }
    }

    /// Approximate units of this currency per one base unit
    pub fn rate(&self) -> f64 {
        match self {
            Currency::UAH => 1.0,
            Currency::EUR => 0.025,
            Currency::USD => 0.027,
        }
    }

    /// Convert a base-unit amount into this currency
    pub fn convert(&self, amount: f64) -> f64 {
        amount * self.rate()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = SalaryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UAH" => Ok(Currency::UAH),
            "EUR" => Ok(Currency::EUR),
            "USD" => Ok(Currency::USD),
            _ => Err(SalaryError::UnknownCurrency(s.to_string())),
        }
    }
}

/// Format a base-unit amount as a rounded, thousands-grouped figure in `currency`
///
/// `25000.0` in UAH renders as `"25,000 ₴"`.
pub fn format_currency(amount: f64, currency: Currency) -> String {
    // + 0.0 folds -0.0 into 0.0
    let converted = currency.convert(amount).round() + 0.0;
    format!("{} {}", group_thousands(&format!("{:.0}", converted)), currency.symbol())
}

/// Compact form used for chart axis ticks: `"1.2M €"`, `"27.0K ₴"`
pub fn format_currency_short(amount: f64, currency: Currency) -> String {
    let converted = currency.convert(amount);
    if converted >= 1_000_000.0 {
        format!("{:.1}M {}", converted / 1_000_000.0, currency.symbol())
    } else if converted >= 1_000.0 {
        format!("{:.1}K {}", converted / 1_000.0, currency.symbol())
    } else {
        format_currency(amount, currency)
    }
}

/// Insert `,` separators into a formatted integer such as `"-1500"`
fn group_thousands(formatted: &str) -> String {
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let mut grouped = String::with_capacity(formatted.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
