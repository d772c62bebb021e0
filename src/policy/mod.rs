pub mod defs;
pub mod loader;
pub mod mapping;

use std::collections::BTreeSet;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::model::{LabelCounts, Verdict};
use defs::{CategoryDef, builtin_taxonomy, taxonomy_labels};
use mapping::{canonical_name, find_category, find_label};

pub use loader::{PolicyError, load_policy};

/// Label names whose presence above threshold rejects a video.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisallowPolicy {
    labels: BTreeSet<String>,
}

impl DisallowPolicy {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every taxonomy label and every category name.
    pub fn builtin() -> Self {
        let mut policy = Self::empty();
        for cat in builtin_taxonomy() {
            policy.insert_category_def(cat);
        }
        policy
    }

    /// Exact label set; category names are kept as single labels.
    pub fn from_labels<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut policy = Self::empty();
        for name in names {
            policy.insert_label(name.as_ref());
        }
        policy
    }

    pub fn insert_label(&mut self, name: &str) {
        let name = canonical_name(name);
        if !name.is_empty() {
            self.labels.insert(name);
        }
    }

    /// Adds the category name itself and all of its labels.
    pub fn insert_category(&mut self, name: &str) -> Result<(), PolicyError> {
        let cat = find_category(name)
            .ok_or_else(|| PolicyError::UnknownCategory(name.to_string()))?;
        self.insert_category_def(cat);
        Ok(())
    }

    fn insert_category_def(&mut self, cat: &CategoryDef) {
        self.labels.insert(cat.name.to_string());
        for l in cat.labels {
            self.labels.insert(l.name.to_string());
        }
    }

    pub fn merge(&mut self, other: DisallowPolicy) {
        self.labels.extend(other.labels);
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// Flat id -> count row over the builtin taxonomy, with the verdict under
/// `label`. Label ids come first, then the ids of categories reported as
/// labels themselves. Serialized as a single object in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyRow {
    pub entries: Vec<(&'static str, u32)>,
    pub label: Verdict,
}

impl TaxonomyRow {
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, n)| n).sum()
    }
}

impl Serialize for TaxonomyRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        for (id, n) in &self.entries {
            map.serialize_entry(id, n)?;
        }
        map.serialize_entry("label", &self.label)?;
        map.end()
    }
}

pub fn taxonomy_row(counts: &LabelCounts, verdict: Verdict) -> TaxonomyRow {
    let count = |name: &str| counts.get(name).copied().unwrap_or(0);
    let mut entries: Vec<(&'static str, u32)> =
        taxonomy_labels().map(|(_, l)| (l.id, count(l.name))).collect();
    // "Gambling" is both; its label column already holds the count.
    for cat in builtin_taxonomy() {
        if find_label(cat.name).is_none() {
            entries.push((cat.id, count(cat.name)));
        }
    }
    TaxonomyRow {
        entries,
        label: verdict,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/policy/tests.rs"]
mod tests;
