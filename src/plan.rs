//! Diffing of desired records against the records a zone currently holds.

use crate::core::record::{Record, RecordKey};
use crate::error::Error;
use std::collections::HashSet;

/// The operations needed to move a zone from its current records to the
/// desired ones.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Existing records that already match, in existing-list order.
    pub unchanged: Vec<Record>,
    /// Existing records to remove before anything is created, in desired order.
    pub deletions: Vec<Record>,
    /// Records to create, in desired order. Ids are cleared.
    pub creations: Vec<Record>,
}

impl Plan {
    pub fn is_noop(&self) -> bool {
        self.deletions.is_empty() && self.creations.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Keep(usize),
    Replace(usize),
    Create,
}

/// Classifies every desired record as unchanged, changed or new.
///
/// Records are matched by id first, then by exact `(name, type, value)` and
/// finally by `(name, type)` alone. Each existing record is claimed at most
/// once and the first unclaimed candidate in existing-list order wins.
/// Records carrying an id are always kept. Id-less records repeating the key
/// of an id-bearing record or of an earlier id-less record are dropped.
pub fn plan(zone: &str, existing: &[Record], desired: &[Record]) -> Result<Plan, Error> {
    let existing_keys: Vec<RecordKey> = existing.iter().map(|r| r.key(zone)).collect();
    let mut claimed = vec![false; existing.len()];

    let mut seen: HashSet<RecordKey> = desired
        .iter()
        .filter(|r| r.has_id())
        .map(|r| r.key(zone))
        .collect();
    let wanted: Vec<(&Record, RecordKey)> = desired
        .iter()
        .map(|r| (r, r.key(zone)))
        .filter(|(record, key)| record.has_id() || seen.insert(key.clone()))
        .collect();
    let mut actions: Vec<Option<Action>> = vec![None; wanted.len()];

    for (slot, (record, key)) in wanted.iter().enumerate() {
        if !record.has_id() {
            continue;
        }
        let idx = existing
            .iter()
            .position(|e| e.id == record.id)
            .ok_or_else(|| Error::UnknownRecord {
                zone: zone.to_string(),
                id: record.id.clone(),
            })?;
        if claimed[idx] {
            return Err(Error::InvalidInput(format!(
                "record id {} given more than once",
                record.id
            )));
        }
        claimed[idx] = true;
        actions[slot] = Some(if existing_keys[idx] == *key {
            Action::Keep(idx)
        } else {
            Action::Replace(idx)
        });
    }

    for (slot, (_, key)) in wanted.iter().enumerate() {
        if actions[slot].is_some() {
            continue;
        }
        if let Some(idx) = first_unclaimed(&existing_keys, &claimed, |k| k == key) {
            claimed[idx] = true;
            actions[slot] = Some(Action::Keep(idx));
        }
    }

    for (slot, (_, key)) in wanted.iter().enumerate() {
        if actions[slot].is_some() {
            continue;
        }
        actions[slot] = Some(
            match first_unclaimed(&existing_keys, &claimed, |k| k.same_slot(key)) {
                Some(idx) => {
                    claimed[idx] = true;
                    Action::Replace(idx)
                }
                None => Action::Create,
            },
        );
    }

    let mut plan = Plan::default();
    let mut kept = Vec::new();
    for ((record, _), action) in wanted.iter().zip(actions) {
        match action.unwrap_or(Action::Create) {
            Action::Keep(idx) => kept.push(idx),
            Action::Replace(idx) => {
                plan.deletions.push(existing[idx].clone());
                plan.creations.push(without_id(record));
            }
            Action::Create => plan.creations.push(without_id(record)),
        }
    }
    kept.sort_unstable();
    plan.unchanged = kept.into_iter().map(|idx| existing[idx].clone()).collect();

    Ok(plan)
}

fn first_unclaimed(
    keys: &[RecordKey],
    claimed: &[bool],
    matches: impl Fn(&RecordKey) -> bool,
) -> Option<usize> {
    keys.iter()
        .enumerate()
        .find(|(idx, key)| !claimed[*idx] && matches(*key))
        .map(|(idx, _)| idx)
}

fn without_id(record: &Record) -> Record {
    Record {
        id: String::new(),
        ..record.clone()
    }
}
