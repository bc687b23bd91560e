//! Distinct organization names, sorted ascending, for the organization picker.

use crate::store::RecordStore;
use std::collections::BTreeSet;

pub fn run<S: RecordStore + ?Sized>(store: &S) -> Vec<String> {
    store
        .all()
        .into_iter()
        .map(|user| user.org_name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
