use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::inline_model::InlineModel;

/// Maps a scanned token to the model it stands for.
///
/// Supplied by the host application and called once per token while a
/// document is loaded. Returning `None` leaves the token as literal text.
pub trait ModelResolver {
    fn resolve(&self, token: &str) -> Option<InlineModel>;
}

impl<F> ModelResolver for F
where
    F: Fn(&str) -> Option<InlineModel>,
{
    fn resolve(&self, token: &str) -> Option<InlineModel> {
        self(token)
    }
}

/// Resolver backed by a fixed set of models keyed by canonical token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RegistryFile", into = "RegistryFile")]
pub struct ModelRegistry {
    by_token: HashMap<String, InlineModel>,
}

/// On-disk shape: a list of `[[models]]` tables.
#[derive(Serialize, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    models: Vec<InlineModel>,
}

impl From<RegistryFile> for ModelRegistry {
    fn from(file: RegistryFile) -> Self {
        Self::from_models(file.models)
    }
}

impl From<ModelRegistry> for RegistryFile {
    fn from(registry: ModelRegistry) -> Self {
        let mut models: Vec<_> = registry.by_token.into_values().collect();
        models.sort_by(|a, b| a.canonical_token.cmp(&b.canonical_token));
        Self { models }
    }
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_models(models: impl IntoIterator<Item = InlineModel>) -> Self {
        let mut registry = Self::new();
        for model in models {
            registry.insert(model);
        }
        registry
    }

    /// Adds a model, replacing any earlier one with the same token.
    pub fn insert(&mut self, model: InlineModel) -> Option<InlineModel> {
        self.by_token.insert(model.canonical_token.clone(), model)
    }

    pub fn get(&self, token: &str) -> Option<&InlineModel> {
        self.by_token.get(token)
    }

    pub fn len(&self) -> usize {
        self.by_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }
}

impl ModelResolver for ModelRegistry {
    fn resolve(&self, token: &str) -> Option<InlineModel> {
        self.get(token).cloned()
    }
}
