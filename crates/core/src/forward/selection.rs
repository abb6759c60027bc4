//! Caller-supplied provider selection.

use serde::Deserialize;
use tracing::debug;

use super::provider::Provider;

/// One record of the `selectedStorages` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectionEntry {
    /// Provider name, e.g. `"Pinata"`.
    pub value: String,
}

/// The providers a caller asked to forward an upload to.
///
/// Unknown names are dropped and duplicates collapse, so the selection holds
/// each recognized provider at most once, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSelection {
    providers: Vec<Provider>,
}

impl ProviderSelection {
    /// Parses a JSON list of `{"value": "..."}` records.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a list of such records.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<SelectionEntry> = serde_json::from_str(json)?;
        Ok(Self::from_names(entries.iter().map(|e| e.value.as_str())))
    }

    /// Builds a selection from provider names.
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut providers = Vec::new();
        for name in names {
            match Provider::from_name(name) {
                Some(provider) if !providers.contains(&provider) => providers.push(provider),
                Some(_) => {}
                None => debug!(name, "Ignoring unknown provider in selection"),
            }
        }
        providers.sort_unstable();
        Self { providers }
    }

    /// Selection holding a single provider.
    #[must_use]
    pub fn single(provider: Provider) -> Self {
        Self {
            providers: vec![provider],
        }
    }

    /// Selected providers, in registry order.
    #[must_use]
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Whether nothing recognizable was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
