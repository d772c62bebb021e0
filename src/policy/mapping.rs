use crate::policy::defs::{CategoryDef, LabelDef, builtin_taxonomy, taxonomy_labels};

/// Case-folds and collapses inner whitespace so "  weapon  violence" matches
/// "Weapon Violence".
pub fn normalize_name(s: &str) -> String {
    s.split_whitespace()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn find_category(name: &str) -> Option<&'static CategoryDef> {
    let key = normalize_name(name);
    builtin_taxonomy()
        .iter()
        .find(|cat| normalize_name(cat.name) == key || cat.id == key)
}

pub fn find_label(name: &str) -> Option<(&'static CategoryDef, &'static LabelDef)> {
    let key = normalize_name(name);
    taxonomy_labels().find(|(_, l)| normalize_name(l.name) == key || l.id == key)
}

/// Taxonomy spelling for a known label or category, trimmed input otherwise.
pub fn canonical_name(name: &str) -> String {
    if let Some((_, l)) = find_label(name) {
        return l.name.to_string();
    }
    if let Some(cat) = find_category(name) {
        return cat.name.to_string();
    }
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}
