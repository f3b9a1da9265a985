use std::fmt;

use tracing::trace;

use crate::error::Result;
use crate::hash::hash;
use crate::linked_list::LinkedList;
use crate::value::Value;

/// A key/value pair stored in a bucket.
#[derive(Debug, Clone)]
struct Entry<V> {
    key: Value,
    value: V,
}

impl<V> Entry<V> {
    /// Stored keys are always hashable, so only a foreign `key` can fail here.
    fn matches(&self, key: &Value) -> bool {
        matches!(self.key.key_eq(key), Ok(true))
    }
}

/// Chained hash table keyed by hashable [`Value`]s.
///
/// The table size is fixed at construction; there is no rehashing, so the
/// caller picks a size that suits the expected number of items (see
/// [`Dict::with_expected_items`]). At most one entry exists per distinct key.
#[derive(Debug, Clone)]
pub struct Dict<V = Value> {
    table: Vec<LinkedList<Entry<V>>>,
    num_of_items: usize,
}

impl<V> Dict<V> {
    /// Create a dict with exactly `table_size` buckets.
    ///
    /// A zero-sized table is allowed; lookups on it report "not found" and
    /// inserts fail with [`crate::CollectionError::EmptyTable`].
    pub fn with_table_size(table_size: usize) -> Self {
        let mut table = Vec::with_capacity(table_size);
        table.resize_with(table_size, LinkedList::new);
        Self {
            table,
            num_of_items: 0,
        }
    }

    /// Create a dict sized for roughly `expected` items (`expected / 10 + 5` buckets).
    pub fn with_expected_items(expected: usize) -> Self {
        Self::with_table_size(expected / 10 + 5)
    }

    pub fn len(&self) -> usize {
        self.num_of_items
    }

    pub fn is_empty(&self) -> bool {
        self.num_of_items == 0
    }

    pub fn table_size(&self) -> usize {
        self.table.len()
    }

    /// Insert `key -> value`, or replace the value if `key` is already present.
    ///
    /// Returns the previous value when one was replaced.
    pub fn assign(&mut self, key: Value, value: V) -> Result<Option<V>> {
        let slot = hash(&key, self.table.len())?;
        let bucket = &mut self.table[slot];

        if let Some(entry) = bucket.find_mut(|entry| entry.matches(&key)) {
            trace!(slot, key = %key, "dict: replace value");
            return Ok(Some(std::mem::replace(&mut entry.value, value)));
        }

        // Bucket order carries no meaning; prepend to skip a second walk.
        trace!(slot, key = %key, "dict: insert entry");
        bucket.push_front(Entry { key, value });
        self.num_of_items += 1;
        Ok(None)
    }

    pub fn get(&self, key: &Value) -> Result<Option<&V>> {
        let Some(slot) = self.locate(key)? else {
            return Ok(None);
        };
        Ok(self.table[slot]
            .find(|entry| entry.matches(key))
            .map(|entry| &entry.value))
    }

    pub fn get_mut(&mut self, key: &Value) -> Result<Option<&mut V>> {
        let Some(slot) = self.locate(key)? else {
            return Ok(None);
        };
        Ok(self.table[slot]
            .find_mut(|entry| entry.matches(key))
            .map(|entry| &mut entry.value))
    }

    pub fn contains_key(&self, key: &Value) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Remove the entry for `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &Value) -> Result<Option<V>> {
        let Some(slot) = self.locate(key)? else {
            return Ok(None);
        };
        let removed = self.table[slot].remove_first(|entry| entry.matches(key));
        if removed.is_some() {
            trace!(slot, key = %key, "dict: delete entry");
            self.num_of_items -= 1;
        }
        Ok(removed.map(|entry| entry.value))
    }

    /// Remove the entry for `key`; `true` if anything was removed.
    pub fn delete(&mut self, key: &Value) -> Result<bool> {
        Ok(self.remove(key)?.is_some())
    }

    /// Iterate over all entries, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &V)> + '_ {
        self.table
            .iter()
            .flat_map(|bucket| bucket.iter())
            .map(|entry| (&entry.key, &entry.value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Owned copies of every key, in bucket order.
    pub fn to_array(&self) -> Vec<Value> {
        self.keys().cloned().collect()
    }

    /// Number of entries chained in each bucket.
    pub fn bucket_lengths(&self) -> Vec<usize> {
        self.table.iter().map(LinkedList::len).collect()
    }

    /// Bucket for `key`, or `None` when the table has no buckets at all.
    fn locate(&self, key: &Value) -> Result<Option<usize>> {
        key.ensure_hashable()?;
        if self.table.is_empty() {
            return Ok(None);
        }
        hash(key, self.table.len()).map(Some)
    }
}

/// Two dicts are equal when they hold the same keys mapped to equal values,
/// regardless of table size or bucket order.
impl<V: PartialEq> PartialEq for Dict<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| matches!(other.get(key), Ok(Some(v)) if v == value))
    }
}

impl<V: fmt::Display> fmt::Display for Dict<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}
