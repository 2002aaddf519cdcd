//! Currency codes and amount formatting.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` end to end.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A currency code such as `IQD` or `USD`.
///
/// Comparison is case-insensitive (codes are stored uppercased), but unknown
/// codes are never normalized away: any code the data carries forms its own
/// aggregation bucket. Records without a currency default to [`CurrencyCode::IQD`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct CurrencyCode(String);

/// The Iraqi dinar, the system default currency.
pub const IQD: &str = "IQD";

/// The US dollar.
pub const USD: &str = "USD";

impl CurrencyCode {
    /// Creates a currency code, uppercasing for case-insensitive comparison.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_uppercase())
    }

    /// The Iraqi dinar.
    #[must_use]
    pub fn iqd() -> Self {
        Self(IQD.to_string())
    }

    /// The US dollar.
    #[must_use]
    pub fn usd() -> Self {
        Self(USD.to_string())
    }

    /// The uppercased code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decimal places this currency is displayed with.
    ///
    /// The dinar has no circulating subunit; everything else renders with two
    /// places.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        if self.0 == IQD { 0 } else { 2 }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::iqd()
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self::new(&code)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formats an amount for display in the given currency.
///
/// Thousands are grouped with commas and the code is suffixed:
/// `12,500 IQD`, `250.00 USD`. Rounding uses Banker's Rounding
/// (`MidpointNearestEven`).
#[must_use]
pub fn format_amount(amount: Decimal, currency: &CurrencyCode) -> String {
    let places = currency.decimal_places();
    let mut value =
        amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    value.rescale(places);

    let text = value.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let grouped = group_thousands(int_part);
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac} {currency}"),
        None => format!("{sign}{grouped} {currency}"),
    }
}

/// Inserts a comma every three digits, right to left.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
