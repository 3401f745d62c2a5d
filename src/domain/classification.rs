use super::document_type::DocumentType;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Raw score per scored document type, kept in rule-declaration order.
///
/// Serializes as a JSON object keyed by the type name, e.g.
/// `{"RFQ":0,"PO":13,"INVOICE":0,"QUOTATION":0}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signals {
    entries: Vec<(DocumentType, u32)>,
}

impl Signals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the score for `doc_type`, replacing any previous value.
    pub fn insert(&mut self, doc_type: DocumentType, score: u32) {
        match self.entries.iter_mut().find(|(t, _)| *t == doc_type) {
            Some(entry) => entry.1 = score,
            None => self.entries.push((doc_type, score)),
        }
    }

    pub fn get(&self, doc_type: DocumentType) -> Option<u32> {
        self.entries
            .iter()
            .find(|(t, _)| *t == doc_type)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocumentType, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scores sorted descending. The sort is stable, so equal scores keep
    /// their insertion order.
    pub fn ranked(&self) -> Vec<(DocumentType, u32)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl FromIterator<(DocumentType, u32)> for Signals {
    fn from_iter<I: IntoIterator<Item = (DocumentType, u32)>>(iter: I) -> Self {
        let mut signals = Signals::new();
        for (doc_type, score) in iter {
            signals.insert(doc_type, score);
        }
        signals
    }
}

impl Serialize for Signals {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (doc_type, score) in &self.entries {
            map.serialize_entry(doc_type.as_str(), score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Signals {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, u32>::deserialize(deserializer)?;
        let mut parsed = HashMap::with_capacity(raw.len());
        for (key, score) in raw {
            let doc_type = key.parse::<DocumentType>().map_err(D::Error::custom)?;
            parsed.insert(doc_type, score);
        }

        // Restore declaration order; a JSON object carries none.
        let mut signals: Signals = DocumentType::SCORED
            .iter()
            .filter_map(|t| parsed.get(t).map(|score| (*t, *score)))
            .collect();
        if let Some(score) = parsed.get(&DocumentType::General) {
            signals.insert(DocumentType::General, *score);
        }
        Ok(signals)
    }
}

/// Outcome of classifying one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub document_type: DocumentType,
    /// Whitespace-collapsed content, at most 200 characters by default.
    pub summary: String,
    /// Deduplicated, first-seen order. Always starts with the document type.
    pub suggested_tags: Vec<String>,
    /// Relative dominance of the top type, in `[0, 1]`.
    pub confidence: f64,
    pub signals: Signals,
}
