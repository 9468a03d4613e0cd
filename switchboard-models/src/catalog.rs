//! Provider catalog.
//!
//! The catalog is the ordered list of providers the backend reports as
//! configured. Order matters: every lookup that can match more than one
//! provider returns the first match.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, ModelEntry, ProviderEntry, Result};

/// Ordered, validated list of providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProviderEntry>", into = "Vec<ProviderEntry>")]
pub struct Catalog {
    entries: Vec<ProviderEntry>,
}

impl Catalog {
    /// Build a catalog, validating its invariants.
    ///
    /// Rejects catalogs with more than one default provider, duplicate
    /// provider names, or a provider that lists the same model twice.
    pub fn new(entries: Vec<ProviderEntry>) -> Result<Self> {
        let mut names = HashSet::new();
        let mut default: Option<&str> = None;

        for entry in &entries {
            if !names.insert(entry.name.as_str()) {
                return Err(Error::DuplicateProvider(entry.name.clone()));
            }

            if entry.is_default_provider {
                if let Some(first) = default {
                    return Err(Error::DuplicateDefault {
                        first: first.to_string(),
                        second: entry.name.clone(),
                    });
                }
                default = Some(entry.name.as_str());
            }

            let mut models = HashSet::new();
            for model in &entry.models {
                if !models.insert(model.name.as_str()) {
                    return Err(Error::DuplicateModel {
                        provider: entry.name.clone(),
                        model: model.name.clone(),
                    });
                }
            }
        }

        debug!(providers = entries.len(), "Catalog validated");
        Ok(Self { entries })
    }

    /// Build a catalog without validation.
    ///
    /// Lookups stay well-defined on invalid data: the first default provider
    /// and the first matching model win.
    pub fn unchecked(entries: Vec<ProviderEntry>) -> Self {
        Self { entries }
    }

    /// Parse and validate a JSON array of provider descriptors.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<ProviderEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Providers in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProviderEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The provider flagged as default, if any.
    pub fn default_provider(&self) -> Option<&ProviderEntry> {
        self.entries.iter().find(|e| e.is_default_provider)
    }

    /// Look up a provider by its catalog name.
    pub fn provider(&self, name: &str) -> Option<&ProviderEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Iterate over every (provider, model) pair, provider-major.
    pub fn models(&self) -> impl Iterator<Item = (&ProviderEntry, &ModelEntry)> {
        self.entries
            .iter()
            .flat_map(|p| p.models.iter().map(move |m| (p, m)))
    }
}

impl TryFrom<Vec<ProviderEntry>> for Catalog {
    type Error = Error;

    fn try_from(entries: Vec<ProviderEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<Catalog> for Vec<ProviderEntry> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProviderEntry;
    type IntoIter = std::slice::Iter<'a, ProviderEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
