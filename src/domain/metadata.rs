//! Numbering-plan lookup.
//!
//! The search engine only ever talks to [`NumberingPlan`]. [`Metadata`] is the
//! bundled implementation, loaded from JSON either from the embedded asset or
//! from a user-supplied file.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::{FinderError, FinderResult};

/// Region code of non-geographic entities such as +800 freephone.
pub const NON_GEO_REGION: &str = "001";

const BUILTIN_METADATA: &str = include_str!("../../resources/metadata.json");

/// Read-only access to per-region and per-calling-code numbering rules.
///
/// Implementations must be safe to share between threads; searches never
/// mutate them.
pub trait NumberingPlan: Send + Sync {
    /// Returns whether `region` is described by this plan.
    fn has_region(&self, region: &str) -> bool;

    /// Digit-count bounds of national significant numbers in `region`.
    fn length_bounds(&self, region: &str) -> Option<RangeInclusive<usize>>;

    /// Returns whether `national` fully matches one of the region's
    /// registered number patterns.
    fn matches_national_pattern(&self, region: &str, national: &str) -> bool;

    /// Regions sharing `calling_code`, main region first. Empty when the
    /// calling code is unknown.
    fn regions_for_calling_code(&self, calling_code: &str) -> &[String];
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    regions: Vec<RawRegion>,
}

#[derive(Debug, Deserialize)]
struct RawRegion {
    code: String,
    calling_code: String,
    #[serde(default)]
    main_country_for_code: bool,
    lengths: RawLengths,
    #[serde(default)]
    patterns: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RawLengths {
    min: usize,
    max: usize,
}

/// Compiled numbering rules of a single region.
#[derive(Debug, Clone)]
pub struct RegionPlan {
    code: String,
    calling_code: String,
    lengths: RangeInclusive<usize>,
    patterns: Vec<(String, Regex)>,
}

impl RegionPlan {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn calling_code(&self) -> &str {
        &self.calling_code
    }

    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.lengths.clone()
    }

    /// Name of the first number type whose pattern accepts `national`.
    pub fn number_type(&self, national: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(_, pattern)| pattern.is_match(national))
            .map(|(name, _)| name.as_str())
    }
}

/// JSON-backed numbering plan.
#[derive(Debug, Clone)]
pub struct Metadata {
    regions: HashMap<String, RegionPlan>,
    calling_codes: HashMap<String, Vec<String>>,
}

impl Metadata {
    /// The numbering plan shipped with the crate.
    pub fn builtin() -> &'static Metadata {
        static BUILTIN: Lazy<Metadata> = Lazy::new(|| {
            Metadata::from_json(BUILTIN_METADATA).expect("Valid embedded metadata")
        });
        &BUILTIN
    }

    /// Parses and validates a numbering plan from its JSON form.
    pub fn from_json(json: &str) -> FinderResult<Self> {
        let raw: RawMetadata = serde_json::from_str(json)?;
        let metadata = Self::compile(raw)?;
        log::debug!(
            "loaded numbering plan: {} regions, {} calling codes",
            metadata.regions.len(),
            metadata.calling_codes.len()
        );
        Ok(metadata)
    }

    /// Reads a numbering plan from a JSON file.
    pub fn from_path(path: &Path) -> FinderResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| FinderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn region(&self, code: &str) -> Option<&RegionPlan> {
        self.regions.get(code)
    }

    /// Known region codes in lexical order.
    pub fn region_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.regions.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    fn compile(raw: RawMetadata) -> FinderResult<Self> {
        let mut regions = HashMap::new();
        let mut calling_codes: HashMap<String, Vec<String>> = HashMap::new();
        let mut mains = HashSet::new();

        for region in raw.regions {
            if region.calling_code.is_empty()
                || region.calling_code.len() > 3
                || !region.calling_code.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(FinderError::MetadataFormat {
                    reason: format!(
                        "region {} has invalid calling code '{}'",
                        region.code, region.calling_code
                    ),
                });
            }
            if region.lengths.min == 0 || region.lengths.min > region.lengths.max {
                return Err(FinderError::MetadataFormat {
                    reason: format!(
                        "region {} has invalid length bounds {}..={}",
                        region.code, region.lengths.min, region.lengths.max
                    ),
                });
            }
            if regions.contains_key(&region.code) {
                return Err(FinderError::MetadataFormat {
                    reason: format!("duplicate region {}", region.code),
                });
            }

            let patterns = region
                .patterns
                .into_iter()
                .map(|(name, pattern)| {
                    let compiled = Regex::new(&format!("^(?:{})$", pattern)).map_err(|err| {
                        FinderError::PatternError {
                            pattern: pattern.clone(),
                            reason: err.to_string(),
                        }
                    })?;
                    Ok((name, compiled))
                })
                .collect::<FinderResult<Vec<_>>>()?;

            let sharing = calling_codes.entry(region.calling_code.clone()).or_default();
            if region.main_country_for_code {
                if !mains.insert(region.calling_code.clone()) {
                    return Err(FinderError::MetadataFormat {
                        reason: format!(
                            "calling code {} has more than one main region",
                            region.calling_code
                        ),
                    });
                }
                sharing.insert(0, region.code.clone());
            } else {
                sharing.push(region.code.clone());
            }

            regions.insert(
                region.code.clone(),
                RegionPlan {
                    code: region.code,
                    calling_code: region.calling_code,
                    lengths: region.lengths.min..=region.lengths.max,
                    patterns,
                },
            );
        }

        Ok(Self {
            regions,
            calling_codes,
        })
    }
}

impl NumberingPlan for Metadata {
    fn has_region(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    fn length_bounds(&self, region: &str) -> Option<RangeInclusive<usize>> {
        self.regions.get(region).map(RegionPlan::lengths)
    }

    fn matches_national_pattern(&self, region: &str, national: &str) -> bool {
        self.regions
            .get(region)
            .is_some_and(|plan| plan.number_type(national).is_some())
    }

    fn regions_for_calling_code(&self, calling_code: &str) -> &[String] {
        self.calling_codes
            .get(calling_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
