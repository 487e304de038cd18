use crate::fields::field_position;
use crate::Record;

/// Reinsert record keys so that recognized fields appear in canonical schema
/// order, followed by unknown keys in their original order. Downstream
/// serialization relies on this ordering, so it is a contract rather than a
/// cosmetic choice.
pub fn order_record(record: &Record) -> Record {
    let mut keys: Vec<String> = record.keys().cloned().collect();
    // Stable sort: unknown keys all share the same rank, so they keep their
    // original relative order behind the recognized fields.
    keys.sort_by_key(|key| field_position(key).unwrap_or(usize::MAX));

    keys.into_iter()
        .filter_map(|key| {
            let value = record.get(&key)?.clone();
            Some((key, value))
        })
        .collect()
}
