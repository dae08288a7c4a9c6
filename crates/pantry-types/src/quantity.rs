//! Free-text quantity input.
//!
//! Quantities are typed into a text field, sanitized on every keystroke,
//! validated on save, and stored rounded to two decimal places. Internally a
//! [`Quantity`] is a whole number of hundredths so that formatting and
//! re-parsing a stored value is exact. Stored text is read back with the
//! strict [`FromStr`] impl, which has no length cap and rejects anything
//! [`format`] would not produce.
//!
//! ```
//! use pantry_types::quantity::{format, parse_and_validate, sanitize};
//!
//! assert_eq!(sanitize("12.345"), "12.34");
//! assert_eq!(sanitize("1.2.3"), "1.2");
//! let q = parse_and_validate("1.50").unwrap();
//! assert_eq!(format(q), "1.5");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Maximum number of characters a sanitized quantity may hold.
pub const MAX_QUANTITY_LEN: usize = 8;

const MAX_FRACTION_DIGITS: usize = 2;

/// A strictly positive amount with two decimal places.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Quantity {
    hundredths: u64,
}

impl Quantity {
    /// The form default for new items.
    pub const ONE: Quantity = Quantity { hundredths: 100 };

    /// Build from whole hundredths. Zero is rejected.
    pub fn from_hundredths(hundredths: u64) -> Result<Self, TypeError> {
        if hundredths == 0 {
            return Err(invalid(&hundredths.to_string(), "must be greater than zero"));
        }
        Ok(Self { hundredths })
    }

    /// Round a decimal value to two places: `round(100 * x) / 100`.
    ///
    /// Non-finite and non-positive values are rejected, as are values that
    /// round down to zero.
    pub fn from_f64(value: f64) -> Result<Self, TypeError> {
        if !value.is_finite() {
            return Err(invalid(&value.to_string(), "not a finite number"));
        }
        if value <= 0.0 {
            return Err(invalid(&value.to_string(), "must be greater than zero"));
        }
        let scaled = (value * 100.0).round();
        if scaled < 1.0 {
            return Err(invalid(&value.to_string(), "rounds to zero"));
        }
        if scaled >= u64::MAX as f64 {
            return Err(invalid(&value.to_string(), "too large"));
        }
        Ok(Self {
            hundredths: scaled as u64,
        })
    }

    pub fn hundredths(&self) -> u64 {
        self.hundredths
    }

    pub fn as_f64(&self) -> f64 {
        self.hundredths as f64 / 100.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(*self))
    }
}

impl fmt::Debug for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity({})", format(*self))
    }
}

/// Strict parse of a stored quantity.
///
/// Accepts only `digits` or `digits.d` / `digits.dd`, greater than zero.
/// Unlike [`parse_and_validate`] nothing is dropped or truncated, so any
/// value [`format`] produces reads back unchanged.
impl FromStr for Quantity {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, fraction) = match s.split_once('.') {
            Some((w, f)) => (w, Some(f)),
            None => (s, None),
        };
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) {
            return Err(invalid(s, "expected digits before the decimal point"));
        }
        let cents = match fraction {
            None => 0,
            Some(f) if all_digits(f) && f.len() <= MAX_FRACTION_DIGITS => {
                let digits: u64 = f.parse().map_err(|_| invalid(s, "bad fraction"))?;
                if f.len() == 1 {
                    digits * 10
                } else {
                    digits
                }
            }
            Some(_) => return Err(invalid(s, "expected one or two fraction digits")),
        };
        let hundredths = whole
            .parse::<u64>()
            .ok()
            .and_then(|w| w.checked_mul(100))
            .and_then(|w| w.checked_add(cents))
            .ok_or_else(|| invalid(s, "too large"))?;
        Self::from_hundredths(hundredths).map_err(|_| invalid(s, "must be greater than zero"))
    }
}

impl TryFrom<String> for Quantity {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Quantity> for String {
    fn from(q: Quantity) -> Self {
        format(q)
    }
}

/// Strip everything but digits and a single decimal point.
///
/// Applied as the user types, so invalid characters are dropped rather than
/// rejected. Anything from a second `.` onward is discarded, at most two
/// digits are kept after the point, and the result never exceeds
/// [`MAX_QUANTITY_LEN`] characters.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(MAX_QUANTITY_LEN);
    let mut seen_point = false;
    let mut fraction_digits = 0;

    for ch in text.chars() {
        if out.len() >= MAX_QUANTITY_LEN {
            break;
        }
        match ch {
            '0'..='9' if seen_point => {
                if fraction_digits < MAX_FRACTION_DIGITS {
                    out.push(ch);
                    fraction_digits += 1;
                }
            }
            '0'..='9' => out.push(ch),
            '.' if !seen_point => {
                seen_point = true;
                out.push(ch);
            }
            '.' => break,
            _ => {}
        }
    }
    out
}

/// Sanitize, parse, and round a quantity for saving.
pub fn parse_and_validate(text: &str) -> Result<Quantity, TypeError> {
    let clean = sanitize(text);
    let value: f64 = clean
        .parse()
        .map_err(|_| invalid(text, "not a decimal number"))?;
    Quantity::from_f64(value).map_err(|e| match e {
        TypeError::InvalidQuantity { reason, .. } => invalid(text, &reason),
        other => other,
    })
}

/// Render with two decimals, then drop trailing zeros and a bare point.
pub fn format(quantity: Quantity) -> String {
    let whole = quantity.hundredths / 100;
    let fraction = quantity.hundredths % 100;
    let fixed = format!("{whole}.{fraction:02}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn invalid(input: &str, reason: &str) -> TypeError {
    TypeError::InvalidQuantity {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sanitize_truncates_fraction() {
        assert_eq!(sanitize("12.345"), "12.34");
    }

    #[test]
    fn sanitize_drops_letters() {
        assert_eq!(sanitize("abc"), "");
        assert_eq!(sanitize("1a2b"), "12");
        assert_eq!(sanitize("-3"), "3");
    }

    #[test]
    fn sanitize_stops_at_second_point() {
        assert_eq!(sanitize("1.2.3"), "1.2");
        assert_eq!(sanitize("..5"), ".");
    }

    #[test]
    fn sanitize_caps_length() {
        assert_eq!(sanitize("1234567890"), "12345678");
        assert_eq!(sanitize("12345.678"), "12345.67");
    }

    #[test]
    fn sanitize_keeps_partial_input() {
        assert_eq!(sanitize("3."), "3.");
        assert_eq!(sanitize(".5"), ".5");
    }

    #[test]
    fn parse_accepts_integers_and_decimals() {
        assert_eq!(parse_and_validate("1").unwrap().hundredths(), 100);
        assert_eq!(parse_and_validate("1.5").unwrap().hundredths(), 150);
        assert_eq!(parse_and_validate(".25").unwrap().hundredths(), 25);
        assert_eq!(parse_and_validate("2.").unwrap().hundredths(), 200);
    }

    #[test]
    fn parse_sanitizes_first() {
        assert_eq!(parse_and_validate("1.239 kg").unwrap().hundredths(), 123);
    }

    #[test]
    fn parse_rejects_zero_and_empty() {
        assert!(parse_and_validate("0").is_err());
        assert!(parse_and_validate("0.00").is_err());
        assert!(parse_and_validate("").is_err());
        assert!(parse_and_validate(".").is_err());
        assert!(parse_and_validate("abc").is_err());
    }

    #[test]
    fn parse_error_reports_original_input() {
        let err = parse_and_validate("zero").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidQuantity {
                input: "zero".into(),
                reason: "not a decimal number".into(),
            }
        );
    }

    #[test]
    fn from_f64_rounds_to_two_places() {
        assert_eq!(Quantity::from_f64(0.125).unwrap().hundredths(), 13);
        assert_eq!(Quantity::from_f64(1.234).unwrap().hundredths(), 123);
        assert_eq!(Quantity::from_f64(0.126).unwrap().hundredths(), 13);
        assert_eq!(Quantity::from_f64(3.0).unwrap().hundredths(), 300);
    }

    #[test]
    fn from_f64_rejects_tiny_and_invalid() {
        assert!(Quantity::from_f64(0.004).is_err());
        assert!(Quantity::from_f64(-1.0).is_err());
        assert!(Quantity::from_f64(f64::NAN).is_err());
        assert!(Quantity::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn format_strips_trailing_zeros() {
        let q = |h| Quantity::from_hundredths(h).unwrap();
        assert_eq!(format(q(100)), "1");
        assert_eq!(format(q(150)), "1.5");
        assert_eq!(format(q(125)), "1.25");
        assert_eq!(format(q(1000)), "10");
        assert_eq!(format(q(5)), "0.05");
        assert_eq!(format(q(50)), "0.5");
    }

    #[test]
    fn serde_uses_display_form() {
        let q = Quantity::from_hundredths(250).unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, "\"2.5\"");
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn serde_rejects_zero() {
        assert!(serde_json::from_str::<Quantity>("\"0\"").is_err());
    }

    #[test]
    fn serde_keeps_values_longer_than_input_cap() {
        for hundredths in [12_345_678, 99_999_999, 100_000_000, 100_000_001] {
            let q = Quantity::from_hundredths(hundredths).unwrap();
            let json = serde_json::to_string(&q).unwrap();
            let back: Quantity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, q, "{json}");
        }
        assert_eq!(format(Quantity::from_hundredths(99_999_999).unwrap()), "999999.99");
        let q = Quantity::from_f64(123456.78).unwrap();
        let back: Quantity = serde_json::from_str(&serde_json::to_string(&q).unwrap()).unwrap();
        assert_eq!(back.hundredths(), 12_345_678);
    }

    #[test]
    fn strict_parse_rejects_non_canonical_text() {
        for text in ["1.239", "1.2.3", " 1", "1 kg", ".5", "5.", "", "abc", "-1", "0", "0.00"] {
            assert!(text.parse::<Quantity>().is_err(), "{text:?} should be rejected");
        }
        assert!(serde_json::from_str::<Quantity>("\"1.239\"").is_err());
    }

    #[test]
    fn strict_parse_reads_canonical_text() {
        assert_eq!("3".parse::<Quantity>().unwrap().hundredths(), 300);
        assert_eq!("0.5".parse::<Quantity>().unwrap().hundredths(), 50);
        assert_eq!("2.05".parse::<Quantity>().unwrap().hundredths(), 205);
        assert_eq!("2.50".parse::<Quantity>().unwrap().hundredths(), 250);
    }

    #[test]
    fn default_is_one() {
        assert_eq!(Quantity::default(), Quantity::ONE);
        assert_eq!(Quantity::ONE.to_string(), "1");
    }

    proptest! {
        #[test]
        fn stored_form_round_trips(hundredths in 1u64..=u64::MAX / 2) {
            let q = Quantity::from_hundredths(hundredths).unwrap();
            prop_assert_eq!(format(q).parse::<Quantity>().unwrap(), q);
        }

        #[test]
        fn format_then_parse_recovers_value(hundredths in 1u64..=9_999_999) {
            let q = Quantity::from_hundredths(hundredths).unwrap();
            let parsed = parse_and_validate(&format(q)).unwrap();
            prop_assert_eq!(parsed, q);
        }

        #[test]
        fn sanitize_output_is_well_formed(input in ".{0,24}") {
            let out = sanitize(&input);
            prop_assert!(out.len() <= MAX_QUANTITY_LEN);
            prop_assert!(out.chars().all(|c| c.is_ascii_digit() || c == '.'));
            prop_assert!(out.matches('.').count() <= 1);
            if let Some((_, fraction)) = out.split_once('.') {
                prop_assert!(fraction.len() <= 2);
            }
        }

        #[test]
        fn sanitize_is_idempotent(input in ".{0,24}") {
            let once = sanitize(&input);
            prop_assert_eq!(sanitize(&once), once.clone());
        }
    }
}
