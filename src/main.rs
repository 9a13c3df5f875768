// SPDX-License-Identifier: PMPL-1.0-or-later

//! indic-locale: script lookup and South-Asian number/date formatting
//!
//! Demo CLI over the library: query the script registry, group and scale
//! numbers in the lakh/crore convention, transliterate digit strings, and
//! assemble dates, with optional native-digit output for any member
//! language.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use regex::Regex;
use serde_json::json;

use indic_locale::datefmt::{self, DateLayout, DateOptions};
use indic_locale::numeral::{self, NumberOptions, ScaleUnit};
use indic_locale::script::ScriptRegistry;

#[derive(Parser)]
#[command(name = "indic-locale")]
#[command(version = "1.0.0")]
#[command(about = "Script lookup and lakh/crore number formatting for Indic languages")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the script(s) a language is written in
    Script {
        /// ISO 639 language code (e.g. hi, bn, sd)
        #[arg(value_name = "LANG")]
        lang: String,

        /// Emit JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// List every language the registry knows
    List {
        /// Emit JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// Format an integer with lakh/crore grouping or unit scaling
    Number {
        /// Integer value (digit string of any length for plain grouping)
        #[arg(value_name = "VALUE")]
        value: String,

        /// Language supplying native digit glyphs
        #[arg(short, long, default_value = "")]
        lang: String,

        /// Substitute native digit glyphs into the output
        #[arg(short, long)]
        native: bool,

        /// Pick lakh/crore automatically by magnitude
        #[arg(short, long)]
        auto: bool,

        /// Scale by a fixed unit instead
        #[arg(short, long, value_enum)]
        unit: Option<UnitArg>,

        /// Decimal places for scaled output
        #[arg(short, long, default_value = "2")]
        places: usize,
    },

    /// Transliterate digits between ASCII and a language's script
    Convert {
        /// Text containing digits
        #[arg(value_name = "TEXT")]
        text: String,

        /// Language whose script supplies the glyphs
        #[arg(short, long)]
        lang: String,

        /// Convert native glyphs back to ASCII
        #[arg(short, long)]
        reverse: bool,
    },

    /// Format a calendar date
    Date {
        /// Date in ISO form, YYYY-MM-DD
        #[arg(value_name = "DATE")]
        date: String,

        /// Component order
        #[arg(long, value_enum, default_value = "dmy")]
        layout: LayoutArg,

        /// Separator character
        #[arg(long, default_value = "-")]
        sep: char,

        /// Language supplying native digit glyphs
        #[arg(short, long, default_value = "")]
        lang: String,

        /// Substitute native digit glyphs into the output
        #[arg(short, long)]
        native: bool,
    },
}

// CLI argument types

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum UnitArg {
    Lakh,
    Crore,
}

impl From<UnitArg> for ScaleUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Lakh => ScaleUnit::Lakh,
            UnitArg::Crore => ScaleUnit::Crore,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LayoutArg {
    Dmy,
    Ymd,
    Mdy,
}

impl From<LayoutArg> for DateLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Dmy => DateLayout::DayMonthYear,
            LayoutArg::Ymd => DateLayout::YearMonthDay,
            LayoutArg::Mdy => DateLayout::MonthDayYear,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = ScriptRegistry::builtin();

    match cli.command {
        Commands::Script { lang, json } => {
            let scripts = registry.all_scripts_for(&lang);
            if json {
                let entries: Vec<_> = scripts
                    .iter()
                    .map(|&code| {
                        json!({
                            "code": code,
                            "name": registry.display_name_of(code),
                            "direction": registry.direction_of(code),
                            "native_digits": registry.has_native_digits(code),
                        })
                    })
                    .collect();
                let out = json!({
                    "language": lang,
                    "member": registry.is_member(&lang),
                    "scripts": entries,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else if scripts.is_empty() {
                println!(
                    "{} is not a member of the Indic language family",
                    lang.bold()
                );
            } else {
                println!("{}", lang.bold().cyan());
                for (i, &code) in scripts.iter().enumerate() {
                    let marker = if i == 0 { "primary" } else { "also" };
                    println!(
                        "  {} {} ({}, {}, native digits: {})",
                        marker.green(),
                        registry.display_name_of(code).bold(),
                        code,
                        registry.direction_of(code),
                        registry.has_native_digits(code)
                    );
                }
            }
        }

        Commands::List { json } => {
            if json {
                let entries: Vec<_> = registry
                    .languages()
                    .map(|lang| {
                        json!({
                            "language": lang,
                            "scripts": registry.all_scripts_for(lang),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("{}", "REGISTERED LANGUAGES".bold().yellow());
                for lang in registry.languages() {
                    let scripts = registry.all_scripts_for(lang);
                    let names: Vec<_> = scripts
                        .iter()
                        .map(|&code| registry.display_name_of(code))
                        .collect();
                    println!("  {:4} {}", lang.bold(), names.join(", "));
                }
            }
        }

        Commands::Number {
            value,
            lang,
            native,
            auto,
            unit,
            places,
        } => {
            let integer_re = Regex::new(r"^-?[0-9]+$").unwrap();
            if !integer_re.is_match(&value) {
                bail!("'{value}' is not a decimal integer");
            }
            let opts = NumberOptions {
                language: &lang,
                use_native_digits: native,
                decimal_places: places,
            };
            let formatted = if let Some(unit) = unit {
                let n: i64 = value
                    .parse()
                    .with_context(|| format!("'{value}' exceeds the scalable range"))?;
                numeral::format_number_scaled(registry, n, unit.into(), &opts)
            } else if auto {
                let n: i64 = value
                    .parse()
                    .with_context(|| format!("'{value}' exceeds the scalable range"))?;
                numeral::format_number_auto(registry, n, &opts)
            } else {
                // Plain grouping works on the digit string itself, so any
                // magnitude is fine here.
                let grouped = numeral::group_digit_str(&value);
                if native {
                    numeral::to_native_digits(registry, &grouped, &lang)
                } else {
                    grouped
                }
            };
            println!("{formatted}");
        }

        Commands::Convert {
            text,
            lang,
            reverse,
        } => {
            if !registry.is_member(&lang) {
                println!(
                    "{}",
                    format!("note: '{lang}' is not a registered language, output unchanged")
                        .yellow()
                );
            }
            let converted = if reverse {
                numeral::from_native_digits(registry, &text, &lang)
            } else {
                numeral::to_native_digits(registry, &text, &lang)
            };
            println!("{converted}");
        }

        Commands::Date {
            date,
            layout,
            sep,
            lang,
            native,
        } => {
            let parsed = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .with_context(|| format!("'{date}' is not a YYYY-MM-DD date"))?;
            let opts = DateOptions {
                layout: layout.into(),
                separator: sep,
                use_native_digits: native,
                language: &lang,
            };
            println!("{}", datefmt::format_date(registry, parsed, &opts));
        }
    }

    Ok(())
}
