//! Candidate validation and country inference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use super::digits::normalize_digits;
use super::metadata::{NumberingPlan, NON_GEO_REGION};

/// Longest country calling code, in digits.
pub const MAX_CALLING_CODE_LENGTH: usize = 3;

/// Strictness used to accept a candidate as a phone number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Leniency {
    /// Digit count within the region's length bounds.
    Possible,
    /// Possible, and matching one of the region's number patterns.
    #[default]
    Valid,
}

impl Leniency {
    /// Returns whether `national` is acceptable for `region` at this leniency.
    pub fn accepts(self, plan: &dyn NumberingPlan, region: &str, national: &str) -> bool {
        let Some(bounds) = plan.length_bounds(region) else {
            return false;
        };
        if !bounds.contains(&national.len()) {
            return false;
        }
        match self {
            Leniency::Possible => true,
            Leniency::Valid => plan.matches_national_pattern(region, national),
        }
    }
}

impl fmt::Display for Leniency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leniency::Possible => write!(f, "POSSIBLE"),
            Leniency::Valid => write!(f, "VALID"),
        }
    }
}

impl FromStr for Leniency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "possible" => Ok(Leniency::Possible),
            "valid" => Ok(Leniency::Valid),
            other => Err(format!(
                "unknown leniency '{}', expected 'possible' or 'valid'",
                other
            )),
        }
    }
}

/// A candidate that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNumber {
    /// National significant number, ASCII digits only.
    pub national: String,
    /// Owning region; `None` for non-geographic calling codes.
    pub country: Option<String>,
}

/// Why a candidate was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No `+` prefix and no default country.
    NoCountry,
    /// No known calling code after the `+`.
    UnknownCallingCode,
    /// No candidate region accepted the digits.
    NotANumber,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NoCountry => write!(f, "no country could be determined"),
            Rejection::UnknownCallingCode => write!(f, "unknown calling code"),
            Rejection::NotANumber => write!(f, "not a number in any candidate region"),
        }
    }
}

/// Splits `digits` into a known calling code and the remaining digits.
pub fn split_calling_code<'a>(
    digits: &'a str,
    plan: &dyn NumberingPlan,
) -> Option<(&'a str, &'a str)> {
    (1..=MAX_CALLING_CODE_LENGTH.min(digits.len()))
        .map(|len| digits.split_at(len))
        .find(|(code, _)| !plan.regions_for_calling_code(code).is_empty())
}

/// Resolves the country of `candidate` and checks it at `leniency`.
pub fn validate(
    candidate: &Candidate<'_>,
    default_country: Option<&str>,
    leniency: Leniency,
    plan: &dyn NumberingPlan,
) -> Result<ValidNumber, Rejection> {
    let digits = normalize_digits(candidate.as_str());

    if candidate.is_international() {
        let (calling_code, national) =
            split_calling_code(&digits, plan).ok_or(Rejection::UnknownCallingCode)?;
        return plan
            .regions_for_calling_code(calling_code)
            .iter()
            .find(|region| leniency.accepts(plan, region, national))
            .map(|region| ValidNumber {
                national: national.to_string(),
                country: (region != NON_GEO_REGION).then(|| region.clone()),
            })
            .ok_or(Rejection::NotANumber);
    }

    let region = default_country.ok_or(Rejection::NoCountry)?;
    if leniency.accepts(plan, region, &digits) {
        Ok(ValidNumber {
            national: digits,
            country: Some(region.to_string()),
        })
    } else {
        Err(Rejection::NotANumber)
    }
}
