// SPDX-License-Identifier: PMPL-1.0-or-later

//! Date assembly in South-Asian conventions.
//!
//! Assembles a calendar date as zero-padded day and month plus the year,
//! joined by a separator in one of three layout orders. Day-month-year is
//! the default, matching common usage across the subcontinent. The
//! finished string can optionally be passed through native-digit
//! substitution, same as number output.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::numeral::to_native_digits;
use crate::script::ScriptRegistry;

/// Component order for an assembled date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateLayout {
    /// 10-10-2025 (default).
    DayMonthYear,
    /// 2025-10-10.
    YearMonthDay,
    /// 10-10-2025 with month leading.
    MonthDayYear,
}

impl Default for DateLayout {
    fn default() -> Self {
        DateLayout::DayMonthYear
    }
}

/// Per-call date formatting options.
#[derive(Debug, Clone, Copy)]
pub struct DateOptions<'a> {
    /// Component order.
    pub layout: DateLayout,
    /// Separator between components. Conventionally punctuation; a digit
    /// separator would itself be glyph-substituted along with the rest of
    /// the string, which is accepted rather than guarded.
    pub separator: char,
    /// Substitute native digit glyphs into the finished string.
    pub use_native_digits: bool,
    /// Language whose script supplies the glyphs.
    pub language: &'a str,
}

impl Default for DateOptions<'_> {
    fn default() -> Self {
        DateOptions {
            layout: DateLayout::default(),
            separator: '-',
            use_native_digits: false,
            language: "",
        }
    }
}

/// Renders a date per layout and separator, day and month zero-padded to
/// two digits, year unpadded.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use indic_locale::datefmt::{format_date, DateOptions};
/// use indic_locale::script::ScriptRegistry;
///
/// let reg = ScriptRegistry::builtin();
/// let date = NaiveDate::from_ymd_opt(2025, 10, 10).unwrap();
/// assert_eq!(format_date(reg, date, &DateOptions::default()), "10-10-2025");
/// ```
pub fn format_date(registry: &ScriptRegistry, date: NaiveDate, opts: &DateOptions<'_>) -> String {
    let (day, month, year) = (date.day(), date.month(), date.year());
    let sep = opts.separator;
    let assembled = match opts.layout {
        DateLayout::DayMonthYear => format!("{day:02}{sep}{month:02}{sep}{year}"),
        DateLayout::YearMonthDay => format!("{year}{sep}{month:02}{sep}{day:02}"),
        DateLayout::MonthDayYear => format!("{month:02}{sep}{day:02}{sep}{year}"),
    };
    if opts.use_native_digits {
        to_native_digits(registry, &assembled, opts.language)
    } else {
        assembled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_layout_is_day_month_year() {
        let reg = ScriptRegistry::builtin();
        assert_eq!(
            format_date(reg, date(2025, 10, 10), &DateOptions::default()),
            "10-10-2025"
        );
    }

    #[test]
    fn layouts_reorder_components() {
        let reg = ScriptRegistry::builtin();
        let d = date(2025, 10, 10);
        let ymd = DateOptions {
            layout: DateLayout::YearMonthDay,
            ..Default::default()
        };
        let mdy = DateOptions {
            layout: DateLayout::MonthDayYear,
            ..Default::default()
        };
        assert_eq!(format_date(reg, d, &ymd), "2025-10-10");
        assert_eq!(format_date(reg, date(2025, 1, 31), &mdy), "01-31-2025");
    }

    #[test]
    fn single_digit_components_zero_pad() {
        let reg = ScriptRegistry::builtin();
        assert_eq!(
            format_date(reg, date(2025, 1, 5), &DateOptions::default()),
            "05-01-2025"
        );
    }

    #[test]
    fn custom_separator() {
        let reg = ScriptRegistry::builtin();
        let opts = DateOptions {
            separator: '/',
            ..Default::default()
        };
        assert_eq!(format_date(reg, date(2025, 10, 10), &opts), "10/10/2025");
    }

    #[test]
    fn native_digits_convert_whole_string() {
        let reg = ScriptRegistry::builtin();
        let opts = DateOptions {
            use_native_digits: true,
            language: "bn",
            ..Default::default()
        };
        assert_eq!(format_date(reg, date(2025, 10, 10), &opts), "১০-১০-২০২৫");
    }
}
