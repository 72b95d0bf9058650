//! Filing category catalog
//!
//! The catalog maps human-readable (Chinese) category names to the internal
//! category codes understood by the query endpoint. It is embedded in the
//! binary and parsed into an explicitly owned [`CategoryCatalog`] value; user
//! input is validated against it to build a [`CategorySelection`].

use serde::Deserialize;
use tracing::warn;

/// Embedded catalog data
const CATALOG_JSON: &str = include_str!("categories.json");

/// Catalog of the filing categories the query endpoint supports
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    #[allow(dead_code)]
    schema_version: String,
    entries: Vec<CategoryEntry>,
}

impl CategoryCatalog {
    /// Load the embedded catalog
    pub fn load_embedded() -> Result<Self, RegistryError> {
        Self::from_json(CATALOG_JSON)
    }

    /// Parse catalog from JSON string
    fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawCatalog = serde_json::from_str(json)
            .map_err(|e| RegistryError::ParseError(format!("Failed to parse catalog: {e}")))?;

        if raw.categories.is_empty() {
            return Err(RegistryError::ParseError(
                "Catalog contains no categories".to_string(),
            ));
        }

        Ok(Self {
            schema_version: raw.schema_version,
            entries: raw.categories,
        })
    }

    /// All catalog entries in catalog order
    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    /// Look up an entry by its exact name
    pub fn get(&self, name: &str) -> Option<&CategoryEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Selection used when the user names no categories
    pub fn default_selection(&self) -> CategorySelection {
        let mut selection = CategorySelection::default();
        for entry in self.entries.iter().filter(|e| e.default) {
            selection.insert(&entry.name, &entry.code);
        }
        selection
    }

    /// Resolve a comma-separated list of category names
    ///
    /// Each name is trimmed and matched exactly against the catalog. Unknown
    /// names are logged and reported in [`SelectionOutcome::unknown`], never
    /// fatal here; the caller decides what to do with an empty selection.
    /// `None` or an input with no names at all yields the default selection.
    pub fn select(&self, input: Option<&str>) -> SelectionOutcome {
        let names: Vec<&str> = input
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        if names.is_empty() {
            return SelectionOutcome {
                selection: self.default_selection(),
                unknown: Vec::new(),
            };
        }

        let mut selection = CategorySelection::default();
        let mut unknown = Vec::new();

        for name in names {
            match self.get(name) {
                Some(entry) => selection.insert(&entry.name, &entry.code),
                None => {
                    warn!("Unknown category name '{}', skipped", name);
                    unknown.push(name.to_string());
                }
            }
        }

        SelectionOutcome { selection, unknown }
    }
}

/// A single category in the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    name: String,
    code: String,
    description: String,
    #[serde(default)]
    default: bool,
}

impl CategoryEntry {
    /// Human-readable name, also used as the output subdirectory
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category code sent to the query endpoint
    pub fn code(&self) -> &str {
        &self.code
    }

    /// English description
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Categories chosen for one run, in the order the user named them
///
/// Names are unique; repeating a name keeps its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    entries: Vec<(String, String)>,
}

impl CategorySelection {
    fn insert(&mut self, name: &str, code: &str) {
        if !self.contains(name) {
            self.entries.push((name.to_string(), code.to_string()));
        }
    }

    /// Whether a category name is selected
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Category code for a selected name
    pub fn code(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_str())
    }

    /// Selected names in order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Iterate over (name, code) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c.as_str()))
    }

    /// Number of selected categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was selected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of resolving user input against the catalog
#[derive(Debug, Clone)]
pub struct SelectionOutcome {
    /// Resolved categories
    pub selection: CategorySelection,
    /// Names that did not match any catalog entry
    pub unknown: Vec<String>,
}

/// Raw catalog structure for deserialization
#[derive(Debug, Deserialize)]
struct RawCatalog {
    schema_version: String,
    #[allow(dead_code)]
    last_updated: String,
    categories: Vec<CategoryEntry>,
}

/// Errors that can occur when working with the catalog
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Failed to parse catalog JSON
    #[error("catalog parse error: {0}")]
    ParseError(String),
}
