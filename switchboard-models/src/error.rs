//! Error types for catalog validation and token parsing.
//!
//! Resolution itself never fails; these errors only surface at the
//! integration boundary, where backend data is turned into a [`Catalog`]
//! or a token is parsed strictly.
//!
//! [`Catalog`]: crate::Catalog

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building catalogs or parsing tokens.
#[derive(Debug, Error)]
pub enum Error {
    /// More than one provider is flagged as the default.
    #[error("multiple default providers: '{first}' and '{second}'")]
    DuplicateDefault { first: String, second: String },

    /// Two catalog entries share a provider name.
    #[error("duplicate provider name: {0}")]
    DuplicateProvider(String),

    /// A provider lists the same model twice.
    #[error("provider '{provider}' lists model '{model}' more than once")]
    DuplicateModel { provider: String, model: String },

    /// A token did not split into exactly three segments.
    #[error("model token must have 3 segments, found {found}: {token}")]
    TokenSegments { token: String, found: usize },

    /// A token field contains the segment delimiter.
    #[error("{field} contains the token delimiter: {value}")]
    DelimiterInField { field: &'static str, value: String },

    /// A token field starts or ends with an underscore where it meets the
    /// delimiter.
    #[error("{field} has an underscore next to the token delimiter: {value}")]
    UnderscoreAtBoundary { field: &'static str, value: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
