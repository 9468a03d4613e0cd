use super::types::{
    CatalogConfig, DEFAULT_CATALOG_PATH, PersonaConfig, RawCatalogConfig, RawSwitchboardConfig,
    RawTokensConfig, SwitchboardConfig, TokensConfig,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

/// A config file location and whether it contributes to the merged config
#[derive(Debug)]
pub struct ConfigLayer {
    pub scope: &'static str,
    pub path: PathBuf,
    pub present: bool,
}

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<SwitchboardConfig> {
        Self::load_layers(&Self::user_config_path(), &Self::project_config_path())
    }

    /// Get user config path (`$XDG_CONFIG_HOME/switchboard/config.toml`)
    pub fn user_config_path() -> PathBuf {
        switchboard_paths::user_config_file()
    }

    /// Get project config path
    /// Can be overridden with SWITCHBOARD_PROJECT_CONFIG_DIR env var
    /// (useful for isolated e2e tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("SWITCHBOARD_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".switchboard/config.toml")
        }
    }

    /// Config layers in load order, each with whether its file exists
    pub fn layers() -> Vec<ConfigLayer> {
        Self::layers_at(Self::user_config_path(), Self::project_config_path())
    }

    fn layers_at(user_path: PathBuf, project_path: PathBuf) -> Vec<ConfigLayer> {
        [("user", user_path), ("project", project_path)]
            .into_iter()
            .map(|(scope, path)| ConfigLayer {
                scope,
                present: path.exists(),
                path,
            })
            .collect()
    }

    /// Load and merge the two layers, project over user
    fn load_layers(user_path: &Path, project_path: &Path) -> Result<SwitchboardConfig> {
        let mut raw = RawSwitchboardConfig::default();

        // Layer 1: User config
        if let Some(user_config) = Self::read_raw(user_path)? {
            raw = Self::merge_raw(raw, user_config);
        }

        // Layer 2: Project config
        if let Some(project_config) = Self::read_raw(project_path)? {
            raw = Self::merge_raw(raw, project_config);
        }

        // Convert to final config with defaults applied
        Ok(Self::finalize(raw))
    }

    fn read_raw(path: &Path) -> Result<Option<RawSwitchboardConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let raw = toml::from_str(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        debug!("Loaded config layer from {}", path.display());
        Ok(Some(raw))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(
        base: RawSwitchboardConfig,
        overlay: RawSwitchboardConfig,
    ) -> RawSwitchboardConfig {
        RawSwitchboardConfig {
            catalog: RawCatalogConfig {
                path: overlay.catalog.path.or(base.catalog.path),
            },
            persona: PersonaConfig {
                provider_override: overlay
                    .persona
                    .provider_override
                    .or(base.persona.provider_override),
                model_override: overlay.persona.model_override.or(base.persona.model_override),
            },
            tokens: RawTokensConfig {
                strict: overlay.tokens.strict.or(base.tokens.strict),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawSwitchboardConfig) -> SwitchboardConfig {
        SwitchboardConfig {
            catalog: CatalogConfig {
                path: raw
                    .catalog
                    .path
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH)),
            },
            persona: raw.persona,
            tokens: TokensConfig {
                strict: raw.tokens.strict.unwrap_or(false),
            },
        }
    }
}
