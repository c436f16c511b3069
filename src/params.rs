//! Parameter holder contract
//!
//! The caller supplies runtime-bound parameter values per placeholder
//! ordinal. A single SQL text with N sets of bound values describes N logical
//! executions, so each ordinal maps to an ordered list whose length is the
//! batch cardinality. The holder is read-only for the duration of one
//! recognition call.

use std::collections::{BTreeMap, HashMap};

use crate::types::Value;

/// Caller-supplied mapping from 1-based placeholder ordinal (textual
/// left-to-right order of occurrence) to the ordered list of values bound to
/// it, one per batch entry. Absence of a referenced ordinal is a caller
/// error.
pub trait ParametersHolder {
    fn get(&self, ordinal: usize) -> Option<&[Value]>;
}

impl ParametersHolder for BTreeMap<usize, Vec<Value>> {
    fn get(&self, ordinal: usize) -> Option<&[Value]> {
        BTreeMap::get(self, &ordinal).map(Vec::as_slice)
    }
}

impl ParametersHolder for HashMap<usize, Vec<Value>> {
    fn get(&self, ordinal: usize) -> Option<&[Value]> {
        HashMap::get(self, &ordinal).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_holders_resolve_by_ordinal() {
        let mut map = BTreeMap::new();
        map.insert(1, vec![Value::from("id1")]);
        assert_eq!(
            ParametersHolder::get(&map, 1),
            Some(&[Value::Str("id1".into())][..])
        );
        assert_eq!(ParametersHolder::get(&map, 2), None);
    }
}
