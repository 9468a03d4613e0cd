//! Human-readable model labels.

/// Labels for well-known model identifiers.
///
/// Every label is distinct, so option lists keyed by label never merge two
/// different known models.
const KNOWN_MODELS: &[(&str, &str)] = &[
    // OpenAI
    ("gpt-4", "GPT-4"),
    ("gpt-4-turbo", "GPT-4 Turbo"),
    ("gpt-4o", "GPT-4o"),
    ("gpt-4o-mini", "GPT-4o Mini"),
    ("gpt-4.1", "GPT-4.1"),
    ("gpt-5", "GPT-5"),
    ("gpt-3.5-turbo", "GPT-3.5 Turbo"),
    ("o1", "o1"),
    ("o1-mini", "o1 Mini"),
    ("o3-mini", "o3 Mini"),
    // Anthropic
    ("claude-3-opus-20240229", "Claude 3 Opus"),
    ("claude-3-sonnet-20240229", "Claude 3 Sonnet"),
    ("claude-3-haiku-20240307", "Claude 3 Haiku"),
    ("claude-3-5-sonnet-20240620", "Claude 3.5 Sonnet"),
    ("claude-3-5-sonnet-20241022", "Claude 3.5 Sonnet (Oct 2024)"),
    ("claude-3-7-sonnet-20250219", "Claude 3.7 Sonnet"),
    // Google
    ("gemini-1.5-pro", "Gemini 1.5 Pro"),
    ("gemini-1.5-flash", "Gemini 1.5 Flash"),
    ("gemini-2.0-flash", "Gemini 2.0 Flash"),
];

/// Label shown to users for a model identifier.
///
/// Unknown identifiers are returned unchanged, so the mapping is only
/// one-to-one over the known table: an unknown identifier spelled like a known
/// label (an Azure deployment named `GPT-4o`) shares that label, and
/// [`list_distinct_model_options`] keeps only the first of the two.
///
/// [`list_distinct_model_options`]: crate::list_distinct_model_options
///
/// # Examples
///
/// ```
/// use switchboard_models::display_name_for_model;
///
/// assert_eq!(display_name_for_model("gpt-4o"), "GPT-4o");
/// assert_eq!(display_name_for_model("my-finetune"), "my-finetune");
/// ```
pub fn display_name_for_model(model_name: &str) -> String {
    KNOWN_MODELS
        .iter()
        .find(|(name, _)| *name == model_name)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| model_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn known_labels_are_unique() {
        let labels: HashSet<_> = KNOWN_MODELS.iter().map(|(_, l)| *l).collect();
        assert_eq!(labels.len(), KNOWN_MODELS.len());

        let names: HashSet<_> = KNOWN_MODELS.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), KNOWN_MODELS.len());
    }

    #[test]
    fn unknown_model_keeps_its_name() {
        assert_eq!(display_name_for_model("llama3:70b"), "llama3:70b");
    }

    #[test]
    fn known_model_gets_label() {
        assert_eq!(
            display_name_for_model("claude-3-5-sonnet-20241022"),
            "Claude 3.5 Sonnet (Oct 2024)"
        );
    }
}
