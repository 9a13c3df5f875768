// SPDX-License-Identifier: PMPL-1.0-or-later

//! Digit substitution between ASCII and native script glyphs.
//!
//! Substitution works char-by-char against the glyph table rather than via
//! pattern replacement, so glyphs that happen to be metacharacters in some
//! syntax cannot corrupt the result. Non-digit characters (signs,
//! separators, letters) pass through untouched.

use crate::script::ScriptRegistry;

/// Replaces ASCII digits in `text` with the native glyphs of `language`'s
/// primary script.
///
/// Best-effort: if the language is not a member of the family, or its
/// primary script has no native digit set, the text comes back unchanged.
///
/// # Examples
/// ```
/// use indic_locale::numeral::to_native_digits;
/// use indic_locale::script::ScriptRegistry;
///
/// let reg = ScriptRegistry::builtin();
/// assert_eq!(to_native_digits(reg, "-42", "hi"), "-४२");
/// assert_eq!(to_native_digits(reg, "42", "en"), "42");
/// ```
pub fn to_native_digits(registry: &ScriptRegistry, text: &str, language: &str) -> String {
    let glyphs = registry
        .script_for(language)
        .and_then(|script| registry.digit_glyphs(script));
    let Some(glyphs) = glyphs else {
        return text.to_string();
    };
    text.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                glyphs[(c as u8 - b'0') as usize]
            } else {
                c
            }
        })
        .collect()
}

/// Replaces native digit glyphs of `language`'s primary script with their
/// ASCII equivalents. Inverse of [`to_native_digits`].
///
/// # Examples
/// ```
/// use indic_locale::numeral::from_native_digits;
/// use indic_locale::script::ScriptRegistry;
///
/// let reg = ScriptRegistry::builtin();
/// assert_eq!(from_native_digits(reg, "৫০", "bn"), "50");
/// ```
pub fn from_native_digits(registry: &ScriptRegistry, text: &str, language: &str) -> String {
    let glyphs = registry
        .script_for(language)
        .and_then(|script| registry.digit_glyphs(script));
    let Some(glyphs) = glyphs else {
        return text.to_string();
    };
    text.chars()
        .map(|c| match glyphs.iter().position(|&g| g == c) {
            Some(value) => (b'0' + value as u8) as char,
            None => c,
        })
        .collect()
}
