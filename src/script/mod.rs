// SPDX-License-Identifier: PMPL-1.0-or-later

//! Script registry for the Indic language family.
//!
//! Static relational data describing each supported script (code, display
//! name, direction, digit glyphs) and the script(s) each language code is
//! conventionally written in, with read-only query functions over it.
//!
//! ## Supported scripts
//!
//! | Code | Script       | Direction | Native digits |
//! |------|--------------|-----------|---------------|
//! | Deva | Devanagari   | ltr       | yes           |
//! | Beng | Bengali      | ltr       | yes           |
//! | Guru | Gurmukhi     | ltr       | yes           |
//! | Gujr | Gujarati     | ltr       | yes           |
//! | Orya | Odia         | ltr       | yes           |
//! | Taml | Tamil        | ltr       | yes           |
//! | Telu | Telugu       | ltr       | yes           |
//! | Knda | Kannada      | ltr       | yes           |
//! | Mlym | Malayalam    | ltr       | yes           |
//! | Sinh | Sinhala      | ltr       | no            |
//! | Arab | Perso-Arabic | rtl       | yes           |
//! | Olck | Ol Chiki     | ltr       | yes           |
//! | Mtei | Meetei Mayek | ltr       | yes           |
//!
//! ## Design
//!
//! Unknown language codes resolve to "not found" sentinels, never a panic
//! and never a silent Latin fallback — callers decide fallback. For unknown
//! *script* codes the defaults split: direction answers left-to-right and
//! display names echo the code (permissive, the answers are advisory),
//! while native-digit support answers `false` (fail-closed, the answer
//! gates substitution).

mod data;
mod registry;

pub use registry::{Direction, ScriptRecord, ScriptRegistry};
