//! Model token codec.
//!
//! A model token packs a display name, provider kind and model name into a
//! single string so a picker can use it as an opaque value:
//!
//! ```text
//! GPT-4o__openai__gpt-4o
//! ```
//!
//! Fields are joined with [`DELIMITER`] and not escaped. The format is stored
//! in persisted UI selections and must not change.
//!
//! [`encode`] and [`decode`] are lenient: `encode` accepts any field and
//! `decode` pads or truncates to three fields. [`ModelToken::try_new`] and
//! [`ModelToken::parse`] reject input that would not round-trip.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Separator between token fields.
pub const DELIMITER: &str = "__";

/// An encoded (display name, provider kind, model name) triple.
///
/// # Examples
///
/// ```
/// use switchboard_models::token::{decode, encode};
///
/// let token = encode("GPT-4o", "openai", "gpt-4o");
/// assert_eq!(token.as_str(), "GPT-4o__openai__gpt-4o");
///
/// let fields = decode(token.as_str());
/// assert_eq!(fields.provider_kind, "openai");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelToken(String);

/// The fields recovered from a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedToken {
    pub display_name: String,
    pub provider_kind: String,
    pub model_name: String,
}

impl ModelToken {
    /// Encode three fields, rejecting any that would not decode back.
    ///
    /// Besides the delimiter itself, an underscore touching a field boundary
    /// (`GPT_` + `__` + `openai`) would shift into the neighbouring field.
    pub fn try_new(display_name: &str, provider_kind: &str, model_name: &str) -> Result<Self> {
        let fields = [
            ("display name", display_name),
            ("provider kind", provider_kind),
            ("model name", model_name),
        ];
        let last = fields.len() - 1;

        for (i, (field, value)) in fields.into_iter().enumerate() {
            if value.contains(DELIMITER) {
                return Err(Error::DelimiterInField {
                    field,
                    value: value.to_string(),
                });
            }
            if (i > 0 && value.starts_with('_')) || (i < last && value.ends_with('_')) {
                return Err(Error::UnderscoreAtBoundary {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(encode(display_name, provider_kind, model_name))
    }

    /// Decode a token that must have exactly three fields.
    pub fn parse(token: &str) -> Result<DecodedToken> {
        let segments: Vec<&str> = token.split(DELIMITER).collect();
        match segments.as_slice() {
            [display_name, provider_kind, model_name] => Ok(DecodedToken {
                display_name: display_name.to_string(),
                provider_kind: provider_kind.to_string(),
                model_name: model_name.to_string(),
            }),
            _ => Err(Error::TokenSegments {
                token: token.to_string(),
                found: segments.len(),
            }),
        }
    }

    /// Decode this token leniently.
    pub fn decode(&self) -> DecodedToken {
        decode(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ModelToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ModelToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)?;
        Ok(Self(s.to_string()))
    }
}

/// Join three fields into a token without validation.
pub fn encode(display_name: &str, provider_kind: &str, model_name: &str) -> ModelToken {
    ModelToken(format!(
        "{display_name}{DELIMITER}{provider_kind}{DELIMITER}{model_name}"
    ))
}

/// Split a token into its three fields.
///
/// Segments past the third are dropped and missing fields are empty.
pub fn decode(token: &str) -> DecodedToken {
    let mut segments = token.split(DELIMITER);
    let mut next = || segments.next().unwrap_or_default().to_string();
    DecodedToken {
        display_name: next(),
        provider_kind: next(),
        model_name: next(),
    }
}
