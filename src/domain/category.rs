//! The category registry persisted in `categories.json`.

use serde::{Deserialize, Serialize};

/// Categories written on first run when no registry file exists.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Alimentation",
    "Transport",
    "Logement",
    "Santé",
    "Loisirs",
    "Vêtements",
    "Éducation",
    "Autres",
];

/// Category that receives expenses orphaned by a deletion.
pub const FALLBACK_CATEGORY: &str = "Autres";

const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Ordered list of category names with set semantics (exact, case-sensitive).
///
/// Stored as a plain JSON array; duplicates in a loaded file are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl From<Vec<String>> for CategoryRegistry {
    fn from(names: Vec<String>) -> Self {
        Self::from_names(names)
    }
}

impl From<CategoryRegistry> for Vec<String> {
    fn from(registry: CategoryRegistry) -> Self {
        registry.names
    }
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.insert(name.into());
        }
        registry
    }

    pub fn defaults() -> Self {
        Self::from_names(DEFAULT_CATEGORIES)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|existing| existing == name)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Appends `name` unless present. Returns `true` when the registry grew.
    pub fn insert(&mut self, name: String) -> bool {
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Replaces `old` with `new` at the same position.
    pub fn replace(&mut self, old: &str, new: String) -> bool {
        match self.position(old) {
            Some(index) => {
                self.names[index] = new;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|existing| existing != name);
        self.names.len() != before
    }

    /// Closest registered name, for "did you mean" hints.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        let needle = name.trim().to_lowercase();
        self.names
            .iter()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
                (candidate, score)
            })
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(candidate, _)| candidate.as_str())
    }
}

impl<'a> IntoIterator for &'a CategoryRegistry {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
