//! Currency formatting for projection output
//!
//! A [`CurrencyFormatter`] is built once from a [`FormatterConfig`] and
//! handed to whatever renders amounts. It holds no mutable state, so a
//! shared reference can be used from any thread.

use serde::{Deserialize, Serialize};

use crate::error::{InvestmentError, Result};

/// Largest number of fraction digits a formatter accepts
pub const MAX_FRACTION_DIGITS: u8 = 20;

/// Locale and currency settings for a formatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// BCP 47 language tag, informational
    pub locale: String,

    /// ISO 4217 currency code
    pub currency: String,

    /// Symbol placed before the amount
    pub symbol: String,

    pub grouping_separator: char,
    pub decimal_separator: char,
    pub minimum_fraction_digits: u8,
    pub maximum_fraction_digits: u8,
}

impl FormatterConfig {
    /// US dollars in en-US style with whole-dollar amounts
    pub fn usd() -> Self {
        Self {
            locale: "en-US".to_string(),
            currency: "USD".to_string(),
            symbol: "$".to_string(),
            grouping_separator: ',',
            decimal_separator: '.',
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 0,
        }
    }

    /// Same settings with a fixed number of fraction digits
    pub fn with_fraction_digits(mut self, digits: u8) -> Self {
        self.minimum_fraction_digits = digits;
        self.maximum_fraction_digits = digits;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.maximum_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(InvestmentError::invalid(
                "maximum_fraction_digits",
                format!(
                    "must be at most {} (got {})",
                    MAX_FRACTION_DIGITS, self.maximum_fraction_digits
                ),
            ));
        }
        if self.minimum_fraction_digits > self.maximum_fraction_digits {
            return Err(InvestmentError::invalid(
                "minimum_fraction_digits",
                format!(
                    "must not exceed maximum_fraction_digits ({} > {})",
                    self.minimum_fraction_digits, self.maximum_fraction_digits
                ),
            ));
        }
        Ok(())
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::usd()
    }
}

/// Formats amounts as currency strings, e.g. `1000.0` -> `"$1,000"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    config: FormatterConfig,
}

impl CurrencyFormatter {
    pub fn new(config: FormatterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// en-US dollars, no cents
    pub fn usd() -> Self {
        Self {
            config: FormatterConfig::usd(),
        }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Format an amount.
    ///
    /// Rounds half away from zero at the maximum fraction digits and drops
    /// trailing zeros down to the minimum. Negative amounts keep their sign
    /// even when they round to zero.
    pub fn format(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{}NaN", self.config.symbol);
        }

        let sign = if amount.is_sign_negative() { "-" } else { "" };
        if amount.is_infinite() {
            return format!("{}{}∞", sign, self.config.symbol);
        }

        let digits = self.config.maximum_fraction_digits as usize;
        let text = round_half_away(amount.abs(), digits);

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text.as_str(), ""),
        };

        let min_digits = self.config.minimum_fraction_digits as usize;
        let mut fraction = fraction.trim_end_matches('0');
        if fraction.len() < min_digits {
            fraction = &text[whole.len() + 1..whole.len() + 1 + min_digits];
        }

        let mut out = String::with_capacity(text.len() + whole.len() / 3 + 4);
        out.push_str(sign);
        out.push_str(&self.config.symbol);
        out.push_str(&group_thousands(whole, self.config.grouping_separator));
        if !fraction.is_empty() {
            out.push(self.config.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::usd()
    }
}

/// Digits after the point needed to print any `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round a non-negative finite value to `digits` decimals, ties away from
/// zero, and return it as `whole[.fraction]` text.
///
/// Works on the exact decimal expansion of the binary value, so 1.115
/// (stored as 1.11499...) rounds down. Rust's own `{:.N}` breaks exact ties
/// toward even, and scaling by a power of ten rounds before we do.
fn round_half_away(value: f64, digits: usize) -> String {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let point = exact.find('.').unwrap_or(exact.len());

    let mut kept: Vec<u8> = exact[..point].bytes().collect();
    kept.extend_from_slice(&exact.as_bytes()[point + 1..point + 1 + digits]);

    if exact.as_bytes()[point + 1 + digits] >= b'5' {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let whole_len = kept.len() - digits;
    let mut text = String::with_capacity(kept.len() + 1);
    text.extend(kept[..whole_len].iter().map(|&b| b as char));
    if digits > 0 {
        text.push('.');
        text.extend(kept[whole_len..].iter().map(|&b| b as char));
    }
    text
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}
