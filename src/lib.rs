// SPDX-License-Identifier: PMPL-1.0-or-later

//! Indic-Locale — script lookup and South-Asian number/date formatting.
//!
//! This crate answers three questions for languages of the Indic family:
//!
//! 1. **Which script?** A static registry maps ISO 639-style language codes
//!    to the script(s) each language is conventionally written in
//!    ([`script::ScriptRegistry`]).
//! 2. **Which digits?** Digit sequences are transliterated between Western
//!    Arabic digits and a script's native glyph set ([`numeral`]).
//! 3. **Which grouping?** Numbers are grouped in the lakh/crore convention
//!    (last three digits, then pairs: `12,34,56,789`) with optional unit
//!    scaling, and dates assemble in day-month-year order ([`datefmt`]).
//!
//! All registry data is embedded at compile time as static tables — no file
//! I/O, no allocation at lookup time, safe to share across threads. Every
//! public function is total: unknown codes produce sentinel results
//! (`None`, empty slice, identity copy), never a panic or an error value.

pub mod datefmt;
pub mod numeral;
pub mod script;
