//! Numeric catalog values that are either a finite number or explicitly missing.

use serde::{Deserialize, Serialize};

/// A numeric catalog value.
///
/// `Missing` is never zero. Anything that does not resolve to a finite number
/// (absent, null, empty string, non-numeric text, NaN, infinity) is `Missing`.
/// Serializes as a plain number or `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Measurement {
    /// A finite value.
    Present(f64),
    /// No usable value.
    #[default]
    Missing,
}

impl Measurement {
    /// Wrap a number, rejecting NaN and infinities.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Self::Present(value)
        } else {
            Self::Missing
        }
    }

    /// Parse catalog text permissively.
    ///
    /// Leading whitespace is skipped and the longest decimal-float prefix is
    /// taken, so `"12.5 K"` reads as 12.5. Text with no numeric prefix is
    /// `Missing`.
    pub fn parse_str(text: &str) -> Self {
        let trimmed = text.trim_start();
        let end = float_prefix_len(trimmed);
        if end == 0 {
            return Self::Missing;
        }
        trimmed[..end]
            .parse::<f64>()
            .map_or(Self::Missing, Self::from_f64)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The value, if present.
    pub fn value(&self) -> Option<f64> {
        match *self {
            Self::Present(v) => Some(v),
            Self::Missing => None,
        }
    }

    /// The value, or `fallback` when missing.
    pub fn value_or(&self, fallback: f64) -> f64 {
        self.value().unwrap_or(fallback)
    }

    /// Apply `f` to a present value. A non-finite result becomes `Missing`.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Self::Present(v) => Self::from_f64(f(v)),
            Self::Missing => Self::Missing,
        }
    }
}

impl From<f64> for Measurement {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<Option<f64>> for Measurement {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::from_f64)
    }
}

impl From<Measurement> for Option<f64> {
    fn from(value: Measurement) -> Self {
        value.value()
    }
}

/// Length in bytes of the leading `[+-]digits[.digits][(e|E)[+-]digits]` run.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_numbers_are_present() {
        assert_eq!(Measurement::from_f64(0.0), Measurement::Present(0.0));
        assert_eq!(Measurement::from_f64(-3.5), Measurement::Present(-3.5));
    }

    #[test]
    fn test_non_finite_numbers_are_missing() {
        assert!(Measurement::from_f64(f64::NAN).is_missing());
        assert!(Measurement::from_f64(f64::INFINITY).is_missing());
        assert!(Measurement::from_f64(f64::NEG_INFINITY).is_missing());
    }

    #[test]
    fn test_zero_is_not_missing() {
        let zero = Measurement::parse_str("0");
        assert!(zero.is_present());
        assert_eq!(zero.value(), Some(0.0));
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(Measurement::parse_str("278"), Measurement::Present(278.0));
        assert_eq!(Measurement::parse_str("5.51"), Measurement::Present(5.51));
        assert_eq!(Measurement::parse_str("-62.68"), Measurement::Present(-62.68));
        assert_eq!(Measurement::parse_str("+1.5"), Measurement::Present(1.5));
        assert_eq!(Measurement::parse_str(".5"), Measurement::Present(0.5));
        assert_eq!(Measurement::parse_str("5."), Measurement::Present(5.0));
        assert_eq!(Measurement::parse_str("1.2e3"), Measurement::Present(1200.0));
    }

    #[test]
    fn test_parse_takes_numeric_prefix() {
        assert_eq!(Measurement::parse_str("  12.5 K"), Measurement::Present(12.5));
        assert_eq!(Measurement::parse_str("3e"), Measurement::Present(3.0));
        assert_eq!(Measurement::parse_str("2e+x"), Measurement::Present(2.0));
        assert_eq!(Measurement::parse_str("7.25.1"), Measurement::Present(7.25));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for text in ["", "   ", "abc", ".", "-", "+.", "e5", "NaN", "null", "K12"] {
            assert!(
                Measurement::parse_str(text).is_missing(),
                "{text:?} should be missing"
            );
        }
    }

    #[test]
    fn test_parse_overflow_is_missing() {
        assert!(Measurement::parse_str("1e999").is_missing());
    }

    #[test]
    fn test_map_and_value_or() {
        let m = Measurement::Present(2.0).map(|v| v * 3.0);
        assert_eq!(m, Measurement::Present(6.0));
        assert_eq!(Measurement::Missing.map(|v| v * 3.0), Measurement::Missing);
        assert_eq!(Measurement::Present(1.0).map(|v| v / 0.0), Measurement::Missing);
        assert_eq!(Measurement::Missing.value_or(100.0), 100.0);
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Measurement::from(Some(4.0)), Measurement::Present(4.0));
        assert_eq!(Measurement::from(None), Measurement::Missing);
        assert_eq!(Option::<f64>::from(Measurement::Missing), None);
    }

    #[test]
    fn test_default_is_missing() {
        assert!(Measurement::default().is_missing());
    }
}
