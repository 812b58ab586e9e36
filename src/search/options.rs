//! Search configuration.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::Leniency;
use crate::error::{FinderError, FinderResult};

/// Options controlling a phone number search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Region assumed for numbers written without a `+` prefix.
    pub default_country: Option<String>,
    /// Strictness of validation.
    pub leniency: Leniency,
    /// Accept a wider set of separators between digits.
    pub extended: bool,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the region assumed for numbers without a `+` prefix.
    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = Some(country.into());
        self
    }

    pub fn with_leniency(mut self, leniency: Leniency) -> Self {
        self.leniency = leniency;
        self
    }

    pub fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    /// Resolves loosely-shaped positional arguments into options.
    ///
    /// A two-letter string is the default country and an object is an options
    /// map (`defaultCountry`, `leniency`, `extended`). `null` is skipped. A
    /// positional country wins over a `defaultCountry` key.
    pub fn from_loose_args(args: &[Value]) -> FinderResult<Self> {
        let mut options = Self::default();
        let mut country = None;

        for (index, arg) in args.iter().enumerate() {
            match arg {
                Value::Null => {}
                Value::String(code) if code.chars().count() == 2 => {
                    country = Some(code.clone());
                }
                Value::Object(_) => {
                    options = serde_json::from_value(arg.clone()).map_err(|err| {
                        FinderError::InvalidInput {
                            parameter: "options".to_string(),
                            reason: err.to_string(),
                        }
                    })?;
                }
                other => {
                    return Err(FinderError::InvalidInput {
                        parameter: format!("argument {}", index + 2),
                        reason: format!(
                            "expected a two-letter country code or an options object, got {}",
                            other
                        ),
                    });
                }
            }
        }

        if country.is_some() {
            options.default_country = country;
        }
        Ok(options)
    }
}
