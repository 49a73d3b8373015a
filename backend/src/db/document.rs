//! Document representation shared by all repository backends.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored document: a flat JSON object.
pub type Document = serde_json::Map<String, Value>;

/// Store-native identifier key.
pub const STORE_ID_FIELD: &str = "_id";

/// Identifier key exposed to API clients.
pub const ID_FIELD: &str = "id";

/// Identifier assigned by the store, in string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DocumentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

/// Replace the store-native `_id` key with a string `id`.
///
/// Non-string identifiers are rendered with their JSON representation.
pub fn expose_id(mut document: Document) -> Document {
    if let Some(raw) = document.remove(STORE_ID_FIELD) {
        let id = match raw {
            Value::String(s) => s,
            other => other.to_string(),
        };
        document.insert(ID_FIELD.to_string(), Value::String(id));
    }
    document
}

/// Exact-match filter: every clause must equal the document's field.
///
/// An empty filter matches every document.
///
/// ```
/// use tarot_blog::db::DocumentFilter;
///
/// let filter = DocumentFilter::new().eq("sign", "aries").eq("period", "daily");
/// assert_eq!(filter.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter {
    clauses: Vec<(String, Value)>,
}

impl DocumentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `field == value` clause. A repeated field replaces the earlier clause.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        let field = field.into();
        let value = value.into();
        match self.clauses.iter_mut().find(|(f, _)| *f == field) {
            Some(clause) => clause.1 = value,
            None => self.clauses.push((field, value)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Evaluate the filter against a document held in memory.
    pub fn matches(&self, document: &Document) -> bool {
        self.clauses
            .iter()
            .all(|(field, value)| document.get(field) == Some(value))
    }

    /// The filter as a query document (`{field: value, ...}`).
    pub fn to_document(&self) -> Document {
        self.clauses.iter().cloned().collect()
    }
}
