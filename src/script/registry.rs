// SPDX-License-Identifier: PMPL-1.0-or-later

//! Script registry types and query operations.
//!
//! Lookup is O(n) over the static tables — two dozen entries scanned once
//! per formatting call, not in a hot loop, so no map structure is needed.

use serde::{Deserialize, Serialize};

use super::data;

/// Writing direction of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Ltr => write!(f, "ltr"),
            Direction::Rtl => write!(f, "rtl"),
        }
    }
}

/// One writing system known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRecord {
    /// ISO 15924-style code, unique within the registry.
    pub code: &'static str,
    /// Human-readable script name.
    pub display_name: &'static str,
    /// Writing direction.
    pub direction: Direction,
    /// The script's own digit glyphs, index = digit value, or `None` when
    /// the script conventionally uses Western digits.
    pub digit_glyphs: Option<&'static [char; 10]>,
    /// Language codes conventionally written in this script. Informational;
    /// lookups go through the language relation, not this field.
    pub languages: &'static [&'static str],
}

/// Immutable language→script registry.
///
/// Constructed once over static tables and shared freely — there is no
/// writer, so no locking. Formatting functions take a `&ScriptRegistry`
/// parameter rather than reaching for a global, which keeps them testable
/// against substitute registries.
///
/// # Examples
/// ```
/// use indic_locale::script::ScriptRegistry;
/// let reg = ScriptRegistry::builtin();
/// assert_eq!(reg.script_for("hi"), Some("Deva"));
/// assert_eq!(reg.script_for("en"), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScriptRegistry {
    scripts: &'static [ScriptRecord],
    languages: &'static [(&'static str, &'static [&'static str])],
}

static BUILTIN: ScriptRegistry = ScriptRegistry::new(data::SCRIPTS, data::LANGUAGES);

impl ScriptRegistry {
    /// Builds a registry over caller-supplied tables.
    ///
    /// The tables must uphold the registry invariants: script codes unique,
    /// every script code named in `languages` present in `scripts`, every
    /// list non-empty. The builtin tables are checked by tests; substitute
    /// registries are on their own.
    pub const fn new(
        scripts: &'static [ScriptRecord],
        languages: &'static [(&'static str, &'static [&'static str])],
    ) -> Self {
        ScriptRegistry { scripts, languages }
    }

    /// The builtin registry covering the Indic language family.
    pub fn builtin() -> &'static ScriptRegistry {
        &BUILTIN
    }

    /// Primary (first-listed) script for a language code.
    ///
    /// `None` for any code outside the relation — including codes of
    /// unrelated language families. Never inferred from the code string.
    pub fn script_for(&self, language: &str) -> Option<&'static str> {
        self.all_scripts_for(language).first().copied()
    }

    /// Every script the language may be written in, preference order.
    ///
    /// Empty slice exactly when [`script_for`](Self::script_for) is `None`.
    pub fn all_scripts_for(&self, language: &str) -> &'static [&'static str] {
        self.languages
            .iter()
            .find(|&&(code, _)| code == language)
            .map(|&(_, scripts)| scripts)
            .unwrap_or(&[])
    }

    /// Whether the language code belongs to the family covered here.
    pub fn is_member(&self, language: &str) -> bool {
        !self.all_scripts_for(language).is_empty()
    }

    /// Writing direction of a script code.
    ///
    /// Unknown codes default to left-to-right: direction is advisory
    /// metadata for rendering callers, and a permissive default avoids
    /// cascading failures there.
    pub fn direction_of(&self, script: &str) -> Direction {
        self.record(script)
            .map(|r| r.direction)
            .unwrap_or(Direction::Ltr)
    }

    /// Whether a script has its own digit glyph set.
    ///
    /// Unknown codes answer `false` — the registry never claims digit
    /// support for a script it does not know.
    pub fn has_native_digits(&self, script: &str) -> bool {
        self.record(script)
            .is_some_and(|r| r.digit_glyphs.is_some())
    }

    /// The script's digit glyphs, index = digit value.
    pub fn digit_glyphs(&self, script: &str) -> Option<&'static [char; 10]> {
        self.record(script).and_then(|r| r.digit_glyphs)
    }

    /// Human-readable name of a script code.
    ///
    /// Unknown codes echo back verbatim, so the result is always usable as
    /// a label.
    pub fn display_name_of<'a>(&self, script: &'a str) -> &'a str {
        match self.record(script) {
            Some(r) => r.display_name,
            None => script,
        }
    }

    /// Full record lookup by script code.
    pub fn script(&self, code: &str) -> Option<&'static ScriptRecord> {
        self.record(code)
    }

    /// All script records, table order.
    pub fn scripts(&self) -> &'static [ScriptRecord] {
        self.scripts
    }

    /// All member language codes, table order.
    pub fn languages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.languages.iter().map(|&(code, _)| code)
    }

    fn record(&self, code: &str) -> Option<&'static ScriptRecord> {
        self.scripts.iter().find(|r| r.code == code)
    }
}
