//! Core value types for provider and model selection.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::token::ModelToken;

/// Returns the value of an optional field if it is present and non-empty.
///
/// Selection UIs store "no choice" as an empty string, so both `None` and
/// `Some("")` count as unset.
pub(crate) fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A model offered by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Model identifier (e.g., "gpt-4o").
    pub name: String,
    /// Whether the model accepts image input.
    #[serde(default)]
    pub supports_image_input: bool,
}

impl ModelEntry {
    /// Create a text-only model entry.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            supports_image_input: false,
        }
    }

    /// Create a model entry that accepts image input.
    pub fn with_vision(name: &str) -> Self {
        Self {
            name: name.to_string(),
            supports_image_input: true,
        }
    }
}

/// A configured LLM provider and the models it offers.
///
/// Deserializes from the backend's provider descriptor, which names the
/// provider kind `provider` and the model list `model_configurations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEntry {
    /// Unique name of this provider within a catalog.
    pub name: String,
    /// Provider kind (e.g., "openai", "anthropic").
    #[serde(alias = "provider")]
    pub provider_kind: String,
    /// Whether this is the catalog's default provider.
    #[serde(default)]
    pub is_default_provider: bool,
    /// Model used when nothing overrides it.
    #[serde(default)]
    pub default_model_name: String,
    /// Models offered, in presentation order.
    #[serde(default, alias = "model_configurations")]
    pub models: Vec<ModelEntry>,
}

impl ProviderEntry {
    /// Create a provider builder.
    pub fn builder(name: &str, provider_kind: &str) -> ProviderEntryBuilder {
        ProviderEntryBuilder::new(name, provider_kind)
    }

    /// Find a model offered by this provider.
    pub fn model(&self, name: &str) -> Option<&ModelEntry> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Whether this provider offers the named model.
    pub fn offers(&self, name: &str) -> bool {
        self.model(name).is_some()
    }
}

/// Builder for constructing `ProviderEntry`.
#[derive(Debug)]
pub struct ProviderEntryBuilder {
    name: String,
    provider_kind: String,
    is_default_provider: bool,
    default_model_name: Option<String>,
    models: Vec<ModelEntry>,
}

impl ProviderEntryBuilder {
    fn new(name: &str, provider_kind: &str) -> Self {
        Self {
            name: name.to_string(),
            provider_kind: provider_kind.to_string(),
            is_default_provider: false,
            default_model_name: None,
            models: Vec::new(),
        }
    }

    /// Mark as the default provider.
    pub fn default_provider(mut self) -> Self {
        self.is_default_provider = true;
        self
    }

    /// Set the default model name.
    pub fn default_model(mut self, name: &str) -> Self {
        self.default_model_name = Some(name.to_string());
        self
    }

    /// Add a model.
    pub fn model(mut self, model: ModelEntry) -> Self {
        self.models.push(model);
        self
    }

    /// Build the `ProviderEntry`.
    ///
    /// Without an explicit default model, the first listed model is used.
    pub fn build(self) -> ProviderEntry {
        let default_model_name = self
            .default_model_name
            .or_else(|| self.models.first().map(|m| m.name.clone()))
            .unwrap_or_default();
        ProviderEntry {
            name: self.name,
            provider_kind: self.provider_kind,
            is_default_provider: self.is_default_provider,
            default_model_name,
            models: self.models,
        }
    }
}

/// Assistant-level pin of provider and/or model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaOverride {
    /// Catalog entry name to pin.
    #[serde(default, rename = "llm_model_provider_override")]
    pub provider_name_override: Option<String>,
    /// Model name to pin.
    #[serde(default, rename = "llm_model_version_override")]
    pub model_name_override: Option<String>,
}

impl PersonaOverride {
    /// Create an override from optional provider name and model name.
    pub fn new(provider: Option<&str>, model: Option<&str>) -> Self {
        Self {
            provider_name_override: provider.map(str::to_string),
            model_name_override: model.map(str::to_string),
        }
    }
}

/// Explicit in-session user choice, applied after everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSelection {
    /// Provider kind chosen by the user.
    #[serde(default)]
    pub provider_kind: Option<String>,
    /// Model chosen by the user.
    #[serde(default)]
    pub model_name: Option<String>,
}

impl SessionSelection {
    /// Create a selection from optional provider kind and model name.
    pub fn new(provider_kind: Option<&str>, model_name: Option<&str>) -> Self {
        Self {
            provider_kind: provider_kind.map(str::to_string),
            model_name: model_name.map(str::to_string),
        }
    }
}

/// The live (provider kind, model name) pair after resolution.
///
/// Either field may be empty when the catalog has no default provider and
/// nothing overrides it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectiveModel {
    pub provider_kind: String,
    pub model_name: String,
}

impl EffectiveModel {
    pub fn new(provider_kind: &str, model_name: &str) -> Self {
        Self {
            provider_kind: provider_kind.to_string(),
            model_name: model_name.to_string(),
        }
    }
}

impl fmt::Display for EffectiveModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.provider_kind, self.model_name)
    }
}

/// A persona pin that exists in the current catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideDescriptor {
    /// Name of the matching catalog entry.
    pub name: String,
    pub provider_kind: String,
    pub model_name: String,
}

/// One entry of a model picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    /// Human-readable label, unique within an option list.
    pub display_label: String,
    /// Token carrying label, provider kind and model name.
    pub token: ModelToken,
    pub supports_image_input: bool,
}
