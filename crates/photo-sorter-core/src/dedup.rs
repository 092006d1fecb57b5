use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::types::{Partition, PhotoRecord};

/// Sort records ascending by the identity key `(name, date_taken)`.
///
/// The sort is stable, so equal keys keep their relative (traversal) order.
/// Dateless records sort before every concrete date: `None < Some(_)` under
/// the derived ordering of `Option<NaiveDateTime>`. This sort is the sole
/// source of determinism in the pipeline; traversal order is never trusted.
pub fn sort_records(records: &mut [PhotoRecord]) {
    records.sort_by(|a, b| a.identity().cmp(&b.identity()));
}

/// Partition records into first occurrences and duplicates.
///
/// A single linear pass with a seen-key set: the first record carrying a
/// given `(name, date_taken)` key goes to `to_move`, every later one to
/// `duplicates`. The partition is stable and does not require sorted input;
/// sorting merely makes the report deterministic and readable.
pub fn partition_duplicates(records: Vec<PhotoRecord>) -> Partition {
    let mut seen: HashSet<(String, Option<NaiveDateTime>)> = HashSet::new();
    let mut partition = Partition::default();

    for record in records {
        let key = (record.name.clone(), record.date_taken);
        if seen.contains(&key) {
            partition.duplicates.push(record);
        } else {
            seen.insert(key);
            partition.to_move.push(record);
        }
    }

    partition
}

// -- Tests --
