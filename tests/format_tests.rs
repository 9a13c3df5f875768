// SPDX-License-Identifier: PMPL-1.0-or-later

//! Number formatting contract tests: grouping, scaling, auto-scale
//! dispatch, and native-digit post-processing.

use indic_locale::numeral::{
    auto_scale, format_number, format_number_auto, format_number_scaled, from_native_digits,
    group_digit_str, group_digits, scale_to_unit, to_native_digits, NumberOptions, ScaleUnit,
};
use indic_locale::script::ScriptRegistry;

#[test]
fn grouping_reference_table() {
    let cases: &[(i64, &str)] = &[
        (1, "1"),
        (999, "999"),
        (1000, "1,000"),
        (100_000, "1,00,000"),
        (250_000, "2,50,000"),
        (10_000_000, "1,00,00,000"),
        (123_456_789, "12,34,56,789"),
        (1_000_000_000, "1,00,00,00,000"),
    ];
    for &(value, expected) in cases {
        assert_eq!(group_digits(value), expected, "grouping {value}");
    }
}

#[test]
fn grouping_preserves_negative_sign() {
    assert_eq!(group_digits(-1000), "-1,000");
    assert_eq!(group_digits(-100_000), "-1,00,000");
}

#[test]
fn grouping_works_beyond_machine_integers() {
    assert_eq!(group_digit_str("100000000000000000000"), "10,00,00,00,00,00,00,00,00,000");
}

#[test]
fn scale_labels_switch_on_exactly_one_unit() {
    assert_eq!(
        scale_to_unit(100_000, ScaleUnit::Lakh.divisor(), 2, "lakh", "lakhs"),
        "1.00 lakh"
    );
    assert_eq!(
        scale_to_unit(200_000, ScaleUnit::Lakh.divisor(), 2, "lakh", "lakhs"),
        "2.00 lakhs"
    );
    assert_eq!(
        scale_to_unit(10_000_000, ScaleUnit::Crore.divisor(), 2, "crore", "crores"),
        "1.00 crore"
    );
    assert_eq!(
        scale_to_unit(20_000_000, ScaleUnit::Crore.divisor(), 2, "crore", "crores"),
        "2.00 crores"
    );
}

#[test]
fn negative_unit_values_keep_singular_label() {
    assert_eq!(
        scale_to_unit(-100_000, ScaleUnit::Lakh.divisor(), 2, "lakh", "lakhs"),
        "-1.00 lakh"
    );
    assert_eq!(
        scale_to_unit(-10_000_000, ScaleUnit::Crore.divisor(), 2, "crore", "crores"),
        "-1.00 crore"
    );
}

#[test]
fn auto_scale_dispatches_at_documented_boundaries() {
    assert_eq!(auto_scale(99_999, 2), "99,999");
    assert_eq!(auto_scale(100_000, 2), "1.00 lakh");
    assert_eq!(auto_scale(9_999_999, 2), "100.00 lakhs");
    assert_eq!(auto_scale(10_000_000, 2), "1.00 crore");
    assert_eq!(auto_scale(-10_000_000, 2), "-1.00 crore");
}

#[test]
fn decimal_places_are_configurable() {
    assert_eq!(auto_scale(250_000, 0), "2 lakhs");
    assert_eq!(auto_scale(250_000, 1), "2.5 lakhs");
    assert_eq!(auto_scale(250_000, 3), "2.500 lakhs");
}

#[test]
fn formatted_output_substitutes_native_digits_last() {
    let reg = ScriptRegistry::builtin();
    let hindi = NumberOptions {
        language: "hi",
        use_native_digits: true,
        ..Default::default()
    };
    assert_eq!(format_number(reg, 123_456_789, &hindi), "१२,३४,५६,७८९");
    assert_eq!(
        format_number_scaled(reg, 300_000, ScaleUnit::Lakh, &hindi),
        "३.०० lakhs"
    );
    assert_eq!(format_number_auto(reg, 99_999, &hindi), "९९,९९९");

    let bengali = NumberOptions {
        language: "bn",
        use_native_digits: true,
        ..Default::default()
    };
    assert_eq!(format_number(reg, 100_000, &bengali), "১,০০,০০০");
}

#[test]
fn substitution_is_identity_for_non_members() {
    let reg = ScriptRegistry::builtin();
    assert_eq!(to_native_digits(reg, "123", "en"), "123");
    assert_eq!(to_native_digits(reg, "123", "xx"), "123");
    assert_eq!(from_native_digits(reg, "१२३", "en"), "१२३");
}

#[test]
fn substitution_is_identity_for_digit_less_scripts() {
    let reg = ScriptRegistry::builtin();
    // Sinhala is a member but has no native digit set.
    assert_eq!(to_native_digits(reg, "2,50,000", "si"), "2,50,000");
}

#[test]
fn round_trip_for_every_native_digit_language() {
    let reg = ScriptRegistry::builtin();
    for lang in reg.languages().collect::<Vec<_>>() {
        for n in [0i64, 7, 42, 99_999, 100_000, 123_456_789] {
            let s = n.to_string();
            let native = to_native_digits(reg, &s, lang);
            assert_eq!(
                from_native_digits(reg, &native, lang),
                s,
                "round trip of {n} for {lang}"
            );
        }
    }
}

#[test]
fn multi_script_languages_substitute_via_primary_script() {
    let reg = ScriptRegistry::builtin();
    // Sindhi's primary script is Perso-Arabic, not Devanagari.
    assert_eq!(to_native_digits(reg, "123", "sd"), "۱۲۳");
    // Manipuri's primary script is Bengali.
    assert_eq!(to_native_digits(reg, "123", "mni"), "১২৩");
}
