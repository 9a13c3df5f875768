// SPDX-License-Identifier: PMPL-1.0-or-later

//! Numeral transliteration and South-Asian number formatting.
//!
//! Two layers, both pure functions over a [`ScriptRegistry`] reference:
//!
//! - digit substitution: character-level mapping between ASCII digits and a
//!   script's native glyph set, best-effort (unknown or digit-less scripts
//!   return the input unchanged).
//! - grouping: the lakh/crore grouping algorithm (`12,34,56,789`), unit
//!   scaling, and threshold-based auto-scaling, with native-digit output as
//!   an optional final pass.
//!
//! Grouping and scaling always run on ASCII digits internally; script
//! substitution is applied to the finished string, never interleaved with
//! the arithmetic.
//!
//! [`ScriptRegistry`]: crate::script::ScriptRegistry

mod digits;
mod grouping;

pub use digits::{from_native_digits, to_native_digits};
pub use grouping::{
    auto_scale, format_number, format_number_auto, format_number_scaled, group_digit_str,
    group_digits, scale_to_unit, NumberOptions, ScaleUnit,
};
