// SPDX-License-Identifier: PMPL-1.0-or-later

//! Builtin script and language tables.
//!
//! Embedded at compile time as static data. Script codes follow the ISO
//! 15924 four-letter convention (Deva, Beng, Arab, ...); language codes are
//! ISO 639 two/three-letter codes as handed over by the caller.
//!
//! ## Adding a new script
//!
//! 1. Add a `const XX_DIGITS` array below if the script has its own digit
//!    glyphs (exactly 10 chars, index = digit value)
//! 2. Add a `ScriptRecord` entry to `SCRIPTS`
//! 3. List the languages written in it on the record
//!
//! ## Adding a new language
//!
//! 1. Add a `("code", &["Scr", ...])` entry to `LANGUAGES`, preference
//!    order, primary script first
//! 2. Every script code named there must already exist in `SCRIPTS`
//!    (the integrity tests in `registry.rs` enforce this)

use super::{Direction, ScriptRecord};

// ─── Native digit glyph sets (index = digit value 0–9) ──────────────

const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];
const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];
const GURMUKHI_DIGITS: [char; 10] = ['੦', '੧', '੨', '੩', '੪', '੫', '੬', '੭', '੮', '੯'];
const GUJARATI_DIGITS: [char; 10] = ['૦', '૧', '૨', '૩', '૪', '૫', '૬', '૭', '૮', '૯'];
const ODIA_DIGITS: [char; 10] = ['୦', '୧', '୨', '୩', '୪', '୫', '୬', '୭', '୮', '୯'];
const TAMIL_DIGITS: [char; 10] = ['௦', '௧', '௨', '௩', '௪', '௫', '௬', '௭', '௮', '௯'];
const TELUGU_DIGITS: [char; 10] = ['౦', '౧', '౨', '౩', '౪', '౫', '౬', '౭', '౮', '౯'];
const KANNADA_DIGITS: [char; 10] = ['೦', '೧', '೨', '೩', '೪', '೫', '೬', '೭', '೮', '೯'];
const MALAYALAM_DIGITS: [char; 10] = ['൦', '൧', '൨', '൩', '൪', '൫', '൬', '൭', '൮', '൯'];
// Extended Arabic-Indic set (U+06F0..U+06F9), the Urdu/Sindhi convention.
const ARABIC_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
const OL_CHIKI_DIGITS: [char; 10] = ['᱐', '᱑', '᱒', '᱓', '᱔', '᱕', '᱖', '᱗', '᱘', '᱙'];
const MEETEI_DIGITS: [char; 10] = ['꯰', '꯱', '꯲', '꯳', '꯴', '꯵', '꯶', '꯷', '꯸', '꯹'];

// ─── Script table ───────────────────────────────────────────────────

pub(super) const SCRIPTS: &[ScriptRecord] = &[
    ScriptRecord {
        code: "Deva",
        display_name: "Devanagari",
        direction: Direction::Ltr,
        digit_glyphs: Some(&DEVANAGARI_DIGITS),
        languages: &["hi", "mr", "ne", "sa", "kok", "mai", "brx", "doi", "ks", "sd"],
    },
    ScriptRecord {
        code: "Beng",
        display_name: "Bengali",
        direction: Direction::Ltr,
        digit_glyphs: Some(&BENGALI_DIGITS),
        languages: &["bn", "as", "mni"],
    },
    ScriptRecord {
        code: "Guru",
        display_name: "Gurmukhi",
        direction: Direction::Ltr,
        digit_glyphs: Some(&GURMUKHI_DIGITS),
        languages: &["pa"],
    },
    ScriptRecord {
        code: "Gujr",
        display_name: "Gujarati",
        direction: Direction::Ltr,
        digit_glyphs: Some(&GUJARATI_DIGITS),
        languages: &["gu"],
    },
    ScriptRecord {
        code: "Orya",
        display_name: "Odia",
        direction: Direction::Ltr,
        digit_glyphs: Some(&ODIA_DIGITS),
        languages: &["or"],
    },
    ScriptRecord {
        code: "Taml",
        display_name: "Tamil",
        direction: Direction::Ltr,
        digit_glyphs: Some(&TAMIL_DIGITS),
        languages: &["ta"],
    },
    ScriptRecord {
        code: "Telu",
        display_name: "Telugu",
        direction: Direction::Ltr,
        digit_glyphs: Some(&TELUGU_DIGITS),
        languages: &["te"],
    },
    ScriptRecord {
        code: "Knda",
        display_name: "Kannada",
        direction: Direction::Ltr,
        digit_glyphs: Some(&KANNADA_DIGITS),
        languages: &["kn"],
    },
    ScriptRecord {
        code: "Mlym",
        display_name: "Malayalam",
        direction: Direction::Ltr,
        digit_glyphs: Some(&MALAYALAM_DIGITS),
        languages: &["ml"],
    },
    // Sinhala has archaic "lith" digits but modern usage is Western digits
    // throughout, so the registry carries no glyph set for it.
    ScriptRecord {
        code: "Sinh",
        display_name: "Sinhala",
        direction: Direction::Ltr,
        digit_glyphs: None,
        languages: &["si"],
    },
    ScriptRecord {
        code: "Arab",
        display_name: "Perso-Arabic",
        direction: Direction::Rtl,
        digit_glyphs: Some(&ARABIC_DIGITS),
        languages: &["ur", "sd", "ks", "pa"],
    },
    ScriptRecord {
        code: "Olck",
        display_name: "Ol Chiki",
        direction: Direction::Ltr,
        digit_glyphs: Some(&OL_CHIKI_DIGITS),
        languages: &["sat"],
    },
    ScriptRecord {
        code: "Mtei",
        display_name: "Meetei Mayek",
        direction: Direction::Ltr,
        digit_glyphs: Some(&MEETEI_DIGITS),
        languages: &["mni"],
    },
];

// ─── Language → script relation ─────────────────────────────────────

// Ordered lists, primary script first. Multi-script languages (Sindhi,
// Kashmiri, Punjabi, Manipuri) carry both conventional scripts; every
// other entry is a one-element list.
pub(super) const LANGUAGES: &[(&str, &[&str])] = &[
    ("as", &["Beng"]),
    ("bn", &["Beng"]),
    ("brx", &["Deva"]),
    ("doi", &["Deva"]),
    ("gu", &["Gujr"]),
    ("hi", &["Deva"]),
    ("kn", &["Knda"]),
    ("kok", &["Deva"]),
    ("ks", &["Arab", "Deva"]),
    ("mai", &["Deva"]),
    ("ml", &["Mlym"]),
    ("mni", &["Beng", "Mtei"]),
    ("mr", &["Deva"]),
    ("ne", &["Deva"]),
    ("or", &["Orya"]),
    ("pa", &["Guru", "Arab"]),
    ("sa", &["Deva"]),
    ("sat", &["Olck"]),
    ("sd", &["Arab", "Deva"]),
    ("si", &["Sinh"]),
    ("ta", &["Taml"]),
    ("te", &["Telu"]),
    ("ur", &["Arab"]),
];
