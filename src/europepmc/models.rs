use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder used when a result carries no abstract
pub const NO_ABSTRACT: &str = "No abstract available.";

/// Placeholder used when a result carries no PMCID
pub const NO_PMCID: &str = "N/A";

/// One entry of a Europe PMC search result list
///
/// The service returns many fields per record; they are all kept as-is.
/// Only `title`, `abstractText` and `pmcid` have typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResult {
    fields: Map<String, Value>,
}

impl SearchResult {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn abstract_text(&self) -> Option<&str> {
        self.str_field("abstractText")
    }

    pub fn pmcid(&self) -> Option<&str> {
        self.str_field("pmcid")
    }

    /// Raw `title` value, `Null` when absent
    pub fn title_value(&self) -> Value {
        self.fields.get("title").cloned().unwrap_or(Value::Null)
    }

    /// Abstract text, or [`NO_ABSTRACT`] when the key is absent
    ///
    /// A present non-string value is passed on as its JSON text.
    pub fn abstract_or_default(&self) -> Cow<'_, str> {
        match self.fields.get("abstractText") {
            None => Cow::Borrowed(NO_ABSTRACT),
            Some(Value::String(text)) => Cow::Borrowed(text),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    /// Raw `pmcid` value, or [`NO_PMCID`] when the key is absent
    ///
    /// A present `null` stays `null`.
    pub fn pmcid_or_default(&self) -> Value {
        self.fields
            .get("pmcid")
            .cloned()
            .unwrap_or_else(|| Value::String(NO_PMCID.to_string()))
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}
