//! Provider and model resolution.
//!
//! Resolution layers three sources, lowest precedence first:
//!
//! 1. the catalog's default provider and its default model,
//! 2. the persona's pinned provider and/or model,
//! 3. the user's in-session selection.
//!
//! References that do not exist in the catalog are skipped and the lower
//! layer's value is kept. Nothing here returns an error.

use std::collections::HashSet;

use tracing::debug;

use crate::display::display_name_for_model;
use crate::token::encode;
use crate::types::set;
use crate::{
    Catalog, EffectiveModel, ModelEntry, ModelOption, OverrideDescriptor, PersonaOverride,
    SessionSelection,
};

/// Compute the live (provider kind, model name) pair.
///
/// # Examples
///
/// ```
/// use switchboard_models::{Catalog, ModelEntry, ProviderEntry, SessionSelection, resolve_effective};
///
/// let catalog = Catalog::new(vec![
///     ProviderEntry::builder("openai", "openai")
///         .default_provider()
///         .model(ModelEntry::with_vision("gpt-4o"))
///         .build(),
/// ])
/// .unwrap();
///
/// let session = SessionSelection::new(None, Some("o1"));
/// let live = resolve_effective(&catalog, None, Some(&session));
/// assert_eq!(live.provider_kind, "openai");
/// assert_eq!(live.model_name, "o1");
/// ```
pub fn resolve_effective(
    catalog: &Catalog,
    persona: Option<&PersonaOverride>,
    session: Option<&SessionSelection>,
) -> EffectiveModel {
    let mut effective = catalog
        .default_provider()
        .map(|p| EffectiveModel::new(&p.provider_kind, &p.default_model_name))
        .unwrap_or_default();

    if let Some(persona) = persona {
        if let Some(name) = set(&persona.provider_name_override) {
            match catalog.provider(name) {
                Some(provider) => effective.provider_kind = provider.provider_kind.clone(),
                None => debug!(provider = name, "Persona provider not in catalog, keeping default"),
            }
        }
        if let Some(model) = set(&persona.model_name_override) {
            effective.model_name = model.to_string();
        }
    }

    if let Some(session) = session {
        if let Some(kind) = set(&session.provider_kind) {
            effective.provider_kind = kind.to_string();
        }
        if let Some(model) = set(&session.model_name) {
            effective.model_name = model.to_string();
        }
    }

    effective
}

/// Resolve a persona pin against the catalog.
///
/// Returns `None` when the persona pins no model, or when no provider
/// (restricted to the pinned provider name, if any) offers the pinned model.
/// A stale pin is an expected outcome, not an error.
pub fn resolve_persona_override_descriptor(
    catalog: &Catalog,
    persona: &PersonaOverride,
) -> Option<OverrideDescriptor> {
    let model = set(&persona.model_name_override)?;
    let provider_name = set(&persona.provider_name_override);

    let found = catalog
        .iter()
        .filter(|p| provider_name.is_none_or(|name| p.name == name))
        .find(|p| p.offers(model));

    if found.is_none() {
        debug!(
            provider = provider_name.unwrap_or_default(),
            model, "Persona override does not match any catalog entry"
        );
    }

    found.map(|p| OverrideDescriptor {
        name: p.name.clone(),
        provider_kind: p.provider_kind.clone(),
        model_name: model.to_string(),
    })
}

/// Provider kind of the first provider offering `model_name`, or `""`.
pub fn find_provider_for_model(catalog: &Catalog, model_name: &str) -> String {
    catalog
        .iter()
        .find(|p| p.offers(model_name))
        .map(|p| p.provider_kind.clone())
        .unwrap_or_default()
}

/// Find a model's configuration, optionally restricted to a provider kind.
///
/// The first match in catalog order wins.
pub fn find_model_configuration<'a>(
    catalog: &'a Catalog,
    model_name: &str,
    provider_kind: Option<&str>,
) -> Option<&'a ModelEntry> {
    catalog
        .iter()
        .filter(|p| provider_kind.is_none_or(|kind| p.provider_kind == kind))
        .find_map(|p| p.model(model_name))
}

/// Whether a model accepts image input. Unknown models report `false`.
pub fn model_supports_image_input(
    catalog: &Catalog,
    model_name: &str,
    provider_kind: Option<&str>,
) -> bool {
    find_model_configuration(catalog, model_name, provider_kind)
        .is_some_and(|m| m.supports_image_input)
}

/// Flatten the catalog into picker options with unique labels.
///
/// Options are ordered provider-major then model-minor; when two models share
/// a label only the first is kept.
pub fn list_distinct_model_options(catalog: &Catalog) -> Vec<ModelOption> {
    let mut seen = HashSet::new();
    catalog
        .models()
        .filter_map(|(provider, model)| {
            let display_label = display_name_for_model(&model.name);
            if !seen.insert(display_label.clone()) {
                return None;
            }
            Some(ModelOption {
                token: encode(&display_label, &provider.provider_kind, &model.name),
                display_label,
                supports_image_input: model.supports_image_input,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProviderEntry;

    fn openai_catalog() -> Catalog {
        Catalog::new(vec![
            ProviderEntry::builder("openai", "openai")
                .default_provider()
                .default_model("gpt-4o")
                .model(ModelEntry::with_vision("gpt-4o"))
                .model(ModelEntry::new("o1"))
                .build(),
            ProviderEntry::builder("claude", "anthropic")
                .default_model("claude-3-opus-20240229")
                .model(ModelEntry::with_vision("claude-3-opus-20240229"))
                .build(),
        ])
        .unwrap()
    }

    #[test]
    fn persona_provider_replaces_kind_only() {
        let catalog = openai_catalog();
        let persona = PersonaOverride::new(Some("claude"), None);

        let live = resolve_effective(&catalog, Some(&persona), None);
        // Model stays the default provider's default.
        assert_eq!(live, EffectiveModel::new("anthropic", "gpt-4o"));
    }

    #[test]
    fn unknown_persona_provider_keeps_baseline_but_applies_model() {
        let catalog = openai_catalog();
        let persona = PersonaOverride::new(Some("removed"), Some("legacy-model"));

        let live = resolve_effective(&catalog, Some(&persona), None);
        assert_eq!(live, EffectiveModel::new("openai", "legacy-model"));
    }

    #[test]
    fn session_fields_override_independently() {
        let catalog = openai_catalog();
        let persona = PersonaOverride::new(Some("claude"), Some("claude-3-opus-20240229"));
        let session = SessionSelection::new(Some("openai"), None);

        let live = resolve_effective(&catalog, Some(&persona), Some(&session));
        assert_eq!(live, EffectiveModel::new("openai", "claude-3-opus-20240229"));
    }

    #[test]
    fn empty_session_fields_are_ignored() {
        let catalog = openai_catalog();
        let session = SessionSelection::new(Some(""), Some(""));

        let live = resolve_effective(&catalog, None, Some(&session));
        assert_eq!(live, EffectiveModel::new("openai", "gpt-4o"));
    }

    #[test]
    fn descriptor_without_provider_pin_takes_first_offering() {
        let catalog = openai_catalog();
        let persona = PersonaOverride::new(None, Some("claude-3-opus-20240229"));

        let descriptor = resolve_persona_override_descriptor(&catalog, &persona).unwrap();
        assert_eq!(descriptor.name, "claude");
        assert_eq!(descriptor.provider_kind, "anthropic");
    }

    #[test]
    fn descriptor_requires_pinned_provider_to_offer_model() {
        let catalog = openai_catalog();
        let persona = PersonaOverride::new(Some("openai"), Some("claude-3-opus-20240229"));

        assert!(resolve_persona_override_descriptor(&catalog, &persona).is_none());
    }

    #[test]
    fn model_configuration_respects_provider_kind() {
        let catalog = openai_catalog();

        assert!(find_model_configuration(&catalog, "o1", None).is_some());
        assert!(find_model_configuration(&catalog, "o1", Some("openai")).is_some());
        assert!(find_model_configuration(&catalog, "o1", Some("anthropic")).is_none());
    }

    #[test]
    fn image_support_follows_model_flag() {
        let catalog = openai_catalog();

        assert!(model_supports_image_input(&catalog, "gpt-4o", None));
        assert!(!model_supports_image_input(&catalog, "o1", None));
        assert!(!model_supports_image_input(&catalog, "missing", None));
        assert!(!model_supports_image_input(&catalog, "gpt-4o", Some("anthropic")));
    }

    #[test]
    fn options_use_display_labels_in_tokens() {
        let catalog = openai_catalog();
        let options = list_distinct_model_options(&catalog);

        let labels: Vec<_> = options.iter().map(|o| o.display_label.as_str()).collect();
        assert_eq!(labels, vec!["GPT-4o", "o1", "Claude 3 Opus"]);
        assert_eq!(options[0].token.as_str(), "GPT-4o__openai__gpt-4o");
        assert!(options[0].supports_image_input);
    }
}
