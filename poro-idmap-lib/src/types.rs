//! Core data model: marketplace ID entries, the card ID map, and its statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Marketplace identifiers known for a single card.
///
/// Serialized as `{"mcmId":"...","tcgId":"..."}`; a `None` field is omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdEntry {
    /// Cardmarket (MCM) product ID
    #[serde(rename = "mcmId", default, skip_serializing_if = "Option::is_none")]
    pub mcm_id: Option<String>,

    /// TCGplayer product ID
    #[serde(rename = "tcgId", default, skip_serializing_if = "Option::is_none")]
    pub tcg_id: Option<String>,
}

impl IdEntry {
    /// Build an entry from raw field values.
    ///
    /// Values are trimmed; blank values are dropped. Returns `None` when
    /// neither identifier survives, since an empty entry is never stored.
    pub fn from_fields(mcm_id: &str, tcg_id: &str) -> Option<Self> {
        let entry = Self {
            mcm_id: non_blank(mcm_id),
            tcg_id: non_blank(tcg_id),
        };
        if entry.is_empty() { None } else { Some(entry) }
    }

    pub fn is_empty(&self) -> bool {
        self.mcm_id.is_none() && self.tcg_id.is_none()
    }

    pub fn has_both(&self) -> bool {
        self.mcm_id.is_some() && self.tcg_id.is_some()
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Map from card ID to its marketplace identifiers.
///
/// Iteration and serialization follow insertion order. Re-inserting an
/// existing card ID replaces its entry in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdMap {
    entries: IndexMap<String, IdEntry>,
}

impl IdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the entry it replaced, if any.
    pub fn insert(&mut self, card_id: impl Into<String>, entry: IdEntry) -> Option<IdEntry> {
        self.entries.insert(card_id.into(), entry)
    }

    pub fn get(&self, card_id: &str) -> Option<&IdEntry> {
        self.entries.get(card_id)
    }

    pub fn get_key_value(&self, card_id: &str) -> Option<(&str, &IdEntry)> {
        self.entries
            .get_key_value(card_id)
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IdEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize to compact JSON (no whitespace, no trailing newline).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn stats(&self) -> MapStats {
        MapStats::from_map(self)
    }
}

/// Aggregate counts over an [`IdMap`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapStats {
    pub total_cards: usize,
    pub cards_with_mcm: usize,
    pub cards_with_tcg: usize,
    pub cards_with_both: usize,
}

impl MapStats {
    pub fn from_map(map: &IdMap) -> Self {
        let mut stats = Self {
            total_cards: map.len(),
            ..Self::default()
        };
        for (_, entry) in map.iter() {
            if entry.mcm_id.is_some() {
                stats.cards_with_mcm += 1;
            }
            if entry.tcg_id.is_some() {
                stats.cards_with_tcg += 1;
            }
            if entry.has_both() {
                stats.cards_with_both += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_fields_trims() {
        let entry = IdEntry::from_fields("  100 ", "\t200").unwrap();
        assert_eq!(entry.mcm_id.as_deref(), Some("100"));
        assert_eq!(entry.tcg_id.as_deref(), Some("200"));
        assert!(entry.has_both());
    }

    #[test]
    fn test_entry_from_fields_blank() {
        assert_eq!(IdEntry::from_fields("", "   "), None);
    }

    #[test]
    fn test_entry_serializes_only_present_fields() {
        let entry = IdEntry::from_fields("", "300").unwrap();
        assert_eq!(serde_json::to_string(&entry).unwrap(), r#"{"tcgId":"300"}"#);
    }

    #[test]
    fn test_map_json_is_compact_and_ordered() {
        let mut map = IdMap::new();
        map.insert("B2", IdEntry::from_fields("1", "").unwrap());
        map.insert("A1", IdEntry::from_fields("100", "200").unwrap());
        assert_eq!(
            map.to_json().unwrap(),
            r#"{"B2":{"mcmId":"1"},"A1":{"mcmId":"100","tcgId":"200"}}"#
        );
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map = IdMap::new();
        map.insert("A1", IdEntry::from_fields("1", "").unwrap());
        map.insert("A2", IdEntry::from_fields("2", "").unwrap());
        let old = map.insert("A1", IdEntry::from_fields("", "9").unwrap());
        assert_eq!(old.and_then(|e| e.mcm_id).as_deref(), Some("1"));
        assert_eq!(map.to_json().unwrap(), r#"{"A1":{"tcgId":"9"},"A2":{"mcmId":"2"}}"#);
    }

    #[test]
    fn test_stats() {
        let mut map = IdMap::new();
        map.insert("A", IdEntry::from_fields("1", "2").unwrap());
        map.insert("B", IdEntry::from_fields("3", "").unwrap());
        map.insert("C", IdEntry::from_fields("", "4").unwrap());
        let stats = map.stats();
        assert_eq!(
            stats,
            MapStats {
                total_cards: 3,
                cards_with_mcm: 2,
                cards_with_tcg: 2,
                cards_with_both: 1,
            }
        );
    }

    #[test]
    fn test_stats_empty_map() {
        assert_eq!(IdMap::new().stats(), MapStats::default());
    }
}
