//! Strict coercion of unit-suffixed strings.
//!
//! Upstream records carry formatted strings like `"500 tons"`, `"₹2,800/ton"`
//! and `"99.8%"`. The original data layer stripped non-digits and silently
//! zeroed anything unparseable; here malformed input is a typed
//! [`DomainError`] so bad records surface in testing instead of pricing at 0.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A non-negative amount parsed out of a unit-suffixed string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: u64,
    /// Trailing unit word, when present (e.g. `"tons"`, `"kg"`).
    pub unit: Option<String>,
}

impl Quantity {
    /// Parse `"500 tons"`, `"5,000kg"`, `"120"` and similar.
    ///
    /// At least one digit is required; anything else is a validation error.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let value = digits_value(raw)
            .ok_or_else(|| DomainError::validation(format!("quantity not parseable: {raw:?}")))?;
        Ok(Self {
            value,
            unit: trailing_unit(raw),
        })
    }
}

/// A whole-unit monetary amount parsed out of a formatted price string.
///
/// Currency symbols, thousands separators and `"/ton"`-style rate suffixes
/// are tolerated; only the digits carry meaning.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub u64);

impl Money {
    /// Parse `"₹2,800/ton"`, `"Rs. 45"`, `"2650"` and similar.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        digits_value(raw)
            .map(Self)
            .ok_or_else(|| DomainError::validation(format!("price not parseable: {raw:?}")))
    }

    pub fn amount(&self) -> u64 {
        self.0
    }
}

/// A percentage-like value, e.g. `"72%"` or `"99.8"`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(pub f64);

impl Percentage {
    /// Parse with an optional trailing `%`. The value must be a finite,
    /// non-negative float.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim().trim_end_matches('%').trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| DomainError::validation(format!("percentage not parseable: {raw:?}")))?;
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::validation(format!(
                "percentage out of range: {raw:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Concatenate every ASCII digit in `raw` and parse the result.
///
/// Returns `None` when the string contains no digits at all, or when the
/// digit run overflows `u64`.
fn digits_value(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// The trailing alphabetic word of a formatted amount, lowercased.
fn trailing_unit(raw: &str) -> Option<String> {
    let tail: String = raw
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    if tail.is_empty() {
        None
    } else {
        Some(tail.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_parses_unit_suffixed_string() {
        let q = Quantity::parse("500 tons").unwrap();
        assert_eq!(q.value, 500);
        assert_eq!(q.unit.as_deref(), Some("tons"));
    }

    #[test]
    fn quantity_parses_thousands_separator() {
        let q = Quantity::parse("5,000kg").unwrap();
        assert_eq!(q.value, 5000);
        assert_eq!(q.unit.as_deref(), Some("kg"));
    }

    #[test]
    fn quantity_without_unit_has_none() {
        let q = Quantity::parse("120").unwrap();
        assert_eq!(q.value, 120);
        assert_eq!(q.unit, None);
    }

    #[test]
    fn quantity_rejects_digitless_string() {
        let err = Quantity::parse("lots").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn money_parses_currency_and_rate_suffix() {
        assert_eq!(Money::parse("₹2,800/ton").unwrap(), Money(2800));
        assert_eq!(Money::parse("Rs. 45").unwrap(), Money(45));
    }

    #[test]
    fn money_rejects_empty_and_symbol_only() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("₹/ton").is_err());
    }

    #[test]
    fn percentage_parses_with_and_without_sign() {
        assert_eq!(Percentage::parse("72%").unwrap(), Percentage(72.0));
        assert_eq!(Percentage::parse("99.8").unwrap(), Percentage(99.8));
    }

    #[test]
    fn percentage_rejects_garbage_and_negative() {
        assert!(Percentage::parse("high").is_err());
        assert!(Percentage::parse("-3%").is_err());
        assert!(Percentage::parse("NaN").is_err());
    }
}
