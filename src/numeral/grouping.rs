// SPDX-License-Identifier: PMPL-1.0-or-later

//! South-Asian digit grouping and lakh/crore unit scaling.
//!
//! The grouping convention keeps the final three digits together and then
//! groups every remaining digit in pairs, right to left: 123456789 renders
//! as `12,34,56,789` rather than the Western `123,456,789`.

use serde::{Deserialize, Serialize};

use super::digits::to_native_digits;
use crate::script::ScriptRegistry;

/// Quotients this close to ±1 take the singular unit label.
const SINGULAR_EPSILON: f64 = 1e-9;

/// Scale units of the South-Asian numbering system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleUnit {
    /// 1,00,000.
    Lakh,
    /// 1,00,00,000.
    Crore,
}

impl ScaleUnit {
    /// The unit's value in plain digits.
    pub fn divisor(&self) -> u64 {
        match self {
            ScaleUnit::Lakh => 100_000,
            ScaleUnit::Crore => 10_000_000,
        }
    }

    /// Label for a quotient of exactly one unit.
    pub fn singular(&self) -> &'static str {
        match self {
            ScaleUnit::Lakh => "lakh",
            ScaleUnit::Crore => "crore",
        }
    }

    /// Label for any other quotient.
    pub fn plural(&self) -> &'static str {
        match self {
            ScaleUnit::Lakh => "lakhs",
            ScaleUnit::Crore => "crores",
        }
    }
}

/// Per-call number formatting options.
#[derive(Debug, Clone, Copy)]
pub struct NumberOptions<'a> {
    /// Language whose script supplies digit glyphs when
    /// `use_native_digits` is set.
    pub language: &'a str,
    /// Substitute native digit glyphs into the finished string.
    pub use_native_digits: bool,
    /// Fixed decimal digits for scaled (lakh/crore) output.
    pub decimal_places: usize,
}

impl Default for NumberOptions<'_> {
    fn default() -> Self {
        NumberOptions {
            language: "",
            use_native_digits: false,
            decimal_places: 2,
        }
    }
}

/// Groups an integer in the lakh/crore convention.
///
/// # Examples
/// ```
/// use indic_locale::numeral::group_digits;
/// assert_eq!(group_digits(123456789), "12,34,56,789");
/// assert_eq!(group_digits(-1000), "-1,000");
/// ```
pub fn group_digits(value: i64) -> String {
    group_digit_str(&value.to_string())
}

/// Groups a decimal digit string (optional leading `-`) of any magnitude.
///
/// The final three digits form one group; the remaining digits are chunked
/// in pairs from the right, so an odd leftover digit stays leftmost. Three
/// or fewer digits come back unchanged. Strings containing anything other
/// than ASCII digits after the sign are returned unchanged — validating
/// numeric input is the caller's contract.
pub fn group_digit_str(digits: &str) -> String {
    let (sign, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    if !magnitude.bytes().all(|b| b.is_ascii_digit()) || magnitude.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = magnitude.split_at(magnitude.len() - 3);
    let mut out = String::with_capacity(digits.len() + head.len() / 2 + 1);
    out.push_str(sign);

    // Pair boundaries fall on the same parity as the head's left edge, so
    // walking left-to-right with a possible odd first chunk is equivalent
    // to chunking right-to-left.
    let mut start = 0;
    if head.len() % 2 == 1 {
        out.push_str(&head[..1]);
        out.push(',');
        start = 1;
    }
    while start < head.len() {
        out.push_str(&head[start..start + 2]);
        out.push(',');
        start += 2;
    }
    out.push_str(tail);
    out
}

/// Scales a number by a unit divisor and labels the result.
///
/// The quotient is rendered with `decimal_places` fixed decimals, keeping
/// the sign of `value`; the label is `singular` when the quotient's
/// magnitude is within epsilon of exactly one, `plural` otherwise (so
/// -1,00,000 still reads "-1.00 lakh").
pub fn scale_to_unit(
    value: i64,
    divisor: u64,
    decimal_places: usize,
    singular: &str,
    plural: &str,
) -> String {
    let quotient = value as f64 / divisor as f64;
    let label = if (quotient.abs() - 1.0).abs() < SINGULAR_EPSILON {
        singular
    } else {
        plural
    };
    format!("{quotient:.decimal_places$} {label}")
}

/// Formats with the unit chosen by magnitude: crore from 1,00,00,000,
/// lakh from 1,00,000, plain grouping below that.
///
/// # Examples
/// ```
/// use indic_locale::numeral::auto_scale;
/// assert_eq!(auto_scale(99_999, 2), "99,999");
/// assert_eq!(auto_scale(100_000, 2), "1.00 lakh");
/// assert_eq!(auto_scale(25_000_000, 1), "2.5 crores");
/// ```
pub fn auto_scale(value: i64, decimal_places: usize) -> String {
    let magnitude = value.unsigned_abs();
    let unit = if magnitude >= ScaleUnit::Crore.divisor() {
        ScaleUnit::Crore
    } else if magnitude >= ScaleUnit::Lakh.divisor() {
        ScaleUnit::Lakh
    } else {
        return group_digits(value);
    };
    scale_to_unit(
        value,
        unit.divisor(),
        decimal_places,
        unit.singular(),
        unit.plural(),
    )
}

/// Grouped rendering with optional native-digit substitution.
pub fn format_number(registry: &ScriptRegistry, value: i64, opts: &NumberOptions<'_>) -> String {
    finish(registry, group_digits(value), opts)
}

/// Unit-scaled rendering with optional native-digit substitution.
pub fn format_number_scaled(
    registry: &ScriptRegistry,
    value: i64,
    unit: ScaleUnit,
    opts: &NumberOptions<'_>,
) -> String {
    let text = scale_to_unit(
        value,
        unit.divisor(),
        opts.decimal_places,
        unit.singular(),
        unit.plural(),
    );
    finish(registry, text, opts)
}

/// Magnitude-dispatched rendering with optional native-digit substitution.
pub fn format_number_auto(
    registry: &ScriptRegistry,
    value: i64,
    opts: &NumberOptions<'_>,
) -> String {
    finish(registry, auto_scale(value, opts.decimal_places), opts)
}

// Substitution is the last step, applied to the finished ASCII string.
fn finish(registry: &ScriptRegistry, text: String, opts: &NumberOptions<'_>) -> String {
    if opts.use_native_digits {
        to_native_digits(registry, &text, opts.language)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_table() {
        let cases = [
            (1, "1"),
            (999, "999"),
            (1000, "1,000"),
            (100_000, "1,00,000"),
            (250_000, "2,50,000"),
            (10_000_000, "1,00,00,000"),
            (123_456_789, "12,34,56,789"),
            (1_000_000_000, "1,00,00,00,000"),
        ];
        for (value, expected) in cases {
            assert_eq!(group_digits(value), expected, "for {value}");
        }
    }

    #[test]
    fn grouping_preserves_sign() {
        assert_eq!(group_digits(-1000), "-1,000");
        assert_eq!(group_digits(-100_000), "-1,00,000");
        assert_eq!(group_digits(-999), "-999");
    }

    #[test]
    fn grouping_handles_big_digit_strings() {
        // Beyond i64: magnitude decides group count, not machine width.
        assert_eq!(
            group_digit_str("12345678901234567890123"),
            "12,34,56,78,90,12,34,56,78,90,123"
        );
        assert_eq!(group_digit_str("1234"), "1,234");
    }

    #[test]
    fn malformed_digit_strings_unchanged() {
        assert_eq!(group_digit_str("12a4567"), "12a4567");
        assert_eq!(group_digit_str(""), "");
        assert_eq!(group_digit_str("-"), "-");
    }

    #[test]
    fn singular_and_plural_labels() {
        assert_eq!(scale_to_unit(100_000, 100_000, 2, "lakh", "lakhs"), "1.00 lakh");
        assert_eq!(scale_to_unit(200_000, 100_000, 2, "lakh", "lakhs"), "2.00 lakhs");
        assert_eq!(
            scale_to_unit(10_000_000, 10_000_000, 2, "crore", "crores"),
            "1.00 crore"
        );
        assert_eq!(
            scale_to_unit(20_000_000, 10_000_000, 2, "crore", "crores"),
            "2.00 crores"
        );
    }

    #[test]
    fn negative_one_unit_stays_singular() {
        assert_eq!(
            scale_to_unit(-100_000, 100_000, 2, "lakh", "lakhs"),
            "-1.00 lakh"
        );
    }

    #[test]
    fn auto_scale_boundaries() {
        assert_eq!(auto_scale(99_999, 2), "99,999");
        assert_eq!(auto_scale(100_000, 2), "1.00 lakh");
        assert_eq!(auto_scale(9_999_999, 2), "100.00 lakhs");
        assert_eq!(auto_scale(10_000_000, 2), "1.00 crore");
    }

    #[test]
    fn native_digit_output_is_a_final_pass() {
        let reg = ScriptRegistry::builtin();
        let opts = NumberOptions {
            language: "hi",
            use_native_digits: true,
            ..Default::default()
        };
        assert_eq!(format_number(reg, 123_456_789, &opts), "१२,३४,५६,७८९");
        assert_eq!(
            format_number_scaled(reg, 250_000, ScaleUnit::Lakh, &opts),
            "२.५० lakhs"
        );
        assert_eq!(format_number_auto(reg, 10_000_000, &opts), "१.०० crore");
    }

    #[test]
    fn non_member_language_formats_ascii() {
        let reg = ScriptRegistry::builtin();
        let opts = NumberOptions {
            language: "en",
            use_native_digits: true,
            ..Default::default()
        };
        assert_eq!(format_number(reg, 1000, &opts), "1,000");
    }
}
