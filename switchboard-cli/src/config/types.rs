use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawSwitchboardConfig {
    #[serde(default)]
    pub catalog: RawCatalogConfig,

    #[serde(default)]
    pub persona: PersonaConfig,

    #[serde(default)]
    pub tokens: RawTokensConfig,
}

/// Catalog config as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCatalogConfig {
    /// Path to a JSON array of provider descriptors
    pub path: Option<PathBuf>,
}

/// Token config as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawTokensConfig {
    /// Reject malformed tokens instead of padding/truncating them
    pub strict: Option<bool>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SwitchboardConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub persona: PersonaConfig,

    #[serde(default)]
    pub tokens: TokensConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON array of provider descriptors
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}

/// Persona pin applied when resolving without explicit flags
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PersonaConfig {
    /// Catalog entry name to pin
    pub provider_override: Option<String>,

    /// Model name to pin
    pub model_override: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TokensConfig {
    /// Reject malformed tokens instead of padding/truncating them
    pub strict: bool,
}

/// Default catalog location, relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "llm-providers.json";
