//! Collision-free variable naming for semantic types.
//!
//! Given values in arrival order, each semantic type that occurs once is named
//! `<prefix>-<type>`; a type that occurs `k > 1` times gets `<prefix>-<type>-1`
//! .. `<prefix>-<type>-k` in arrival order. Numbering is computed per call and
//! never shared between calls or between types.

use std::collections::{HashMap, HashSet};

use crate::brand::{ColorEntry, FontEntry};

/// Position of one value among the values sharing its semantic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// 1-based index in arrival order.
    pub index: usize,
    /// Number of values with this type in the whole sequence.
    pub total: usize,
}

impl Occurrence {
    pub fn is_unique(&self) -> bool {
        self.total == 1
    }
}

/// Numbers each element of `types` within its own type. Output is aligned with input.
pub fn number_occurrences<'a, I>(types: I) -> Vec<Occurrence>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let iter = types.into_iter();
    let mut totals: HashMap<&str, usize> = HashMap::new();
    for t in iter.clone() {
        *totals.entry(t).or_insert(0) += 1;
    }

    let mut running: HashMap<&str, usize> = HashMap::new();
    iter.map(|t| {
        let index = running.entry(t).or_insert(0);
        *index += 1;
        Occurrence {
            index: *index,
            total: totals[t],
        }
    })
    .collect()
}

/// `prefix-type` for a unique type, `prefix-type-N` otherwise.
pub fn variable_name(prefix: &str, semantic_type: &str, occ: Occurrence) -> String {
    if occ.is_unique() {
        format!("{}-{}", prefix, semantic_type)
    } else {
        format!("{}-{}-{}", prefix, semantic_type, occ.index)
    }
}

/// Names every color; duplicates by type are numbered, never dropped.
pub fn allocate_colors<'a>(prefix: &str, colors: &'a [ColorEntry]) -> Vec<(String, &'a ColorEntry)> {
    let occs = number_occurrences(colors.iter().map(|c| c.semantic_type.as_str()));
    colors
        .iter()
        .zip(occs)
        .map(|(c, occ)| (variable_name(prefix, &c.semantic_type, occ), c))
        .collect()
}

/// Drops later repeats of the same `(name, type)` pair, keeping first occurrences in order.
pub fn unique_fonts(fonts: &[FontEntry]) -> Vec<&FontEntry> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    fonts
        .iter()
        .filter(|f| seen.insert((f.name.as_str(), f.semantic_type.as_str())))
        .collect()
}

/// De-duplicates fonts, then numbers the remainder by type.
pub fn allocate_fonts<'a>(prefix: &str, fonts: &'a [FontEntry]) -> Vec<(String, &'a FontEntry)> {
    let unique = unique_fonts(fonts);
    let occs = number_occurrences(unique.iter().map(|f| f.semantic_type.as_str()));
    unique
        .into_iter()
        .zip(occs)
        .map(|(f, occ)| (variable_name(prefix, &f.semantic_type, occ), f))
        .collect()
}
