//! Shape-tolerant decoding of analytics response envelopes.
//!
//! The API is loose about envelopes: the same endpoint may answer with a
//! bare record list, an object whose values are record lists, or an object
//! whose values are single records. [`PmxPayload`] decodes all three and
//! normalizes them for the fetch methods.

use std::collections::HashMap;

use serde::Deserialize;

/// Every envelope shape the analytics endpoints are known to produce.
///
/// Deserialization tries the variants in order; an object of record lists
/// fails the flat arm, matches `Grouped`, and never reaches `Keyed`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PmxPayload<T> {
    /// A bare list of records
    Flat(Vec<T>),
    /// An object keyed by entity name whose values are record lists
    Grouped(HashMap<String, Vec<T>>),
    /// An object keyed by row id whose values are single records
    Keyed(HashMap<String, T>),
}

impl<T> PmxPayload<T> {
    /// Flatten into a single record list, discarding envelope keys.
    pub fn into_records(self) -> Vec<T> {
        match self {
            Self::Flat(records) => records,
            Self::Grouped(groups) => groups.into_values().flatten().collect(),
            Self::Keyed(rows) => rows.into_values().collect(),
        }
    }

    /// Normalize into a map keyed by `key_of`, regrouping the flat and
    /// keyed shapes so grouped endpoints always yield a map.
    pub fn into_groups(self, key_of: impl Fn(&T) -> String) -> HashMap<String, Vec<T>> {
        match self {
            Self::Grouped(groups) => groups,
            Self::Flat(records) => group_by(records, key_of),
            Self::Keyed(rows) => group_by(rows.into_values().collect(), key_of),
        }
    }
}

fn group_by<T>(records: Vec<T>, key_of: impl Fn(&T) -> String) -> HashMap<String, Vec<T>> {
    let mut groups: HashMap<String, Vec<T>> = HashMap::new();
    for record in records {
        groups.entry(key_of(&record)).or_default().push(record);
    }
    groups
}
