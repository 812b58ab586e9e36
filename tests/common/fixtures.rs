//! Test fixtures: sample texts, option presets and numbering plans.

#![allow(dead_code)]

use phonefinder::{Leniency, Metadata, NumberingPlan, SearchOptions};
use std::ops::RangeInclusive;

pub const TWO_NUMBERS: &str =
    "The number is +7 (800) 555-35-35 and not (213) 373-4253 as written in the document.";

pub const ONE_NUMBER: &str = "The number is +7 (800) 555-35-35 as written in the document.";

pub const DATE_AND_EXTENSION: &str =
    "Date 02/17/2018 is not a number, but +7 (800) 555-35-35 ext. 123 is.";

pub const ARABIC: &str = "العَرَبِيَّة\u{200E} +٤٤٣٣٣٣٣٣٣٣٣٣عَرَبِيّ\u{200E}";

pub const UUID: &str = "The UUID is CA801c26f98cd16e231354125ad046e40b.";

/// Texts used for invariant checks.
pub fn corpus() -> Vec<String> {
    vec![
        String::new(),
        TWO_NUMBERS.to_string(),
        ONE_NUMBER.to_string(),
        DATE_AND_EXTENSION.to_string(),
        ARABIC.to_string(),
        UUID.to_string(),
        "2133734253".to_string(),
        "The phone number is 231354125.".to_string(),
        "Digits 12 are not a number, but +7 (800) 555-35-35 is.".to_string(),
        "+7 701 123 45 67, +44 20 7946 0958; +33 1 42 68 53 00".to_string(),
        "(213) 373-4253 (213) 373-4254 (213) 373-4255".to_string(),
        "2133734253x12 2133734253#7 2133734253 ext 99".to_string(),
        "+800 1234 5678 or +999 123 4567".to_string(),
        "id=abc2133734253def and 2133734253".to_string(),
        "1".repeat(64),
        "+".repeat(40),
        "(((((2133734253)))))".to_string(),
        "🔢📱☎️ +7 (800) 555-35-35 ☎️".to_string(),
        "\n\r\t 213-373-4253\n".to_string(),
        "۰۹۱۲ ۳۴۵ ۶۷۸۹ and +۹۱ ۹۸۷۶۵ ४३२१०".to_string(),
    ]
}

/// Option presets covering every leniency with and without a default country.
pub fn option_presets() -> Vec<SearchOptions> {
    let mut presets = Vec::new();
    for leniency in [Leniency::Possible, Leniency::Valid] {
        for country in [None, Some("US"), Some("FR"), Some("RU")] {
            for extended in [false, true] {
                let mut options = SearchOptions::new()
                    .with_leniency(leniency)
                    .with_extended(extended);
                if let Some(country) = country {
                    options = options.with_default_country(country);
                }
                presets.push(options);
            }
        }
    }
    presets
}

pub fn us() -> SearchOptions {
    SearchOptions::new().with_default_country("US")
}

pub fn builtin() -> &'static Metadata {
    Metadata::builtin()
}

/// Numbering plan for a fictional country `XA` (+999) where every
/// 6-digit number starting with 5 is valid.
#[derive(Debug, Default)]
pub struct FictionalPlan {
    xa: Vec<String>,
}

impl FictionalPlan {
    pub fn new() -> Self {
        Self {
            xa: vec!["XA".to_string()],
        }
    }
}

impl NumberingPlan for FictionalPlan {
    fn has_region(&self, region: &str) -> bool {
        region == "XA"
    }

    fn length_bounds(&self, region: &str) -> Option<RangeInclusive<usize>> {
        (region == "XA").then_some(6..=6)
    }

    fn matches_national_pattern(&self, region: &str, national: &str) -> bool {
        region == "XA" && national.starts_with('5')
    }

    fn regions_for_calling_code(&self, calling_code: &str) -> &[String] {
        if calling_code == "999" {
            self.xa.as_slice()
        } else {
            &[]
        }
    }
}

/// A small valid numbering plan in the JSON metadata format.
pub const SMALL_PLAN_JSON: &str = r#"{
  "regions": [
    {
      "code": "AA",
      "calling_code": "99",
      "main_country_for_code": true,
      "lengths": { "min": 5, "max": 5 },
      "patterns": { "fixed_line": "1\\d{4}" }
    },
    {
      "code": "AB",
      "calling_code": "99",
      "lengths": { "min": 5, "max": 5 },
      "patterns": { "mobile": "2\\d{4}" }
    }
  ]
}"#;
