//! Wire model of the `words` lookup response.
//!
//! Every field is optional: the remote schema is not ours, and a missing
//! key must surface as a typed resolution error rather than a decode failure.

use serde::Deserialize;

/// Proper-noun typology, skipped by the permissive policy.
pub const PROPER_NOUN: &str = "n.prop.";

/// `{ total, data: [...] }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordsResponse {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub data: Option<Vec<DictionaryEntry>>,
}

/// One candidate match for the queried word.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub typology: Option<String>,
    #[serde(default)]
    pub meanings: Option<Vec<Meaning>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meaning {
    #[serde(default, rename = "wordSigns")]
    pub word_signs: Option<Vec<WordSign>>,
}

/// A single sign video, `uri` relative to the video base URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordSign {
    #[serde(default)]
    pub uri: Option<String>,
}

impl WordsResponse {
    /// True when the API reports no match (or sends no entries at all).
    pub fn is_empty(&self) -> bool {
        self.total == Some(0) || self.entries().is_empty()
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        self.data.as_deref().unwrap_or_default()
    }
}

impl DictionaryEntry {
    pub fn meanings(&self) -> &[Meaning] {
        self.meanings.as_deref().unwrap_or_default()
    }

    pub fn is_proper_noun(&self) -> bool {
        self.typology.as_deref() == Some(PROPER_NOUN)
    }

    /// First sign URI of the first meaning that has one.
    pub fn first_sign_uri(&self) -> Option<&str> {
        self.meanings().iter().find_map(Meaning::first_sign_uri)
    }
}

impl Meaning {
    pub fn signs(&self) -> &[WordSign] {
        self.word_signs.as_deref().unwrap_or_default()
    }

    /// URI of the first sign, if it has a non-empty one.
    pub fn first_sign_uri(&self) -> Option<&str> {
        self.signs()
            .first()
            .and_then(|s| s.uri.as_deref())
            .filter(|u| !u.is_empty())
    }
}
