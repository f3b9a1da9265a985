//! Multiset of values with positional provenance.
//!
//! For each distinct value of a source sequence the counter keeps the stack
//! of positions it occurred at. Indices are consumed one at a time; once a
//! value's last index is taken its entry disappears, so an empty counter
//! means every occurrence was consumed.
//!
//! Among duplicates, [`CounterDict::pop_next_index`] always returns the
//! smallest index not yet consumed.

use tracing::trace;

use crate::dict::Dict;
use crate::error::{CollectionError, Result};
use crate::value::Value;

/// Remaining occurrences of one distinct value.
///
/// `indices` is a stack whose top is the smallest remaining position; the
/// occurrence count is its length.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterEntry {
    indices: Vec<usize>,
}

impl CounterEntry {
    pub fn count(&self) -> usize {
        self.indices.len()
    }

    /// Remaining positions, next-to-pop last.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

#[derive(Debug, Clone)]
pub struct CounterDict {
    dict: Dict<CounterEntry>,
    total: usize,
}

impl CounterDict {
    /// Count the occurrences of every value in `sequence`.
    ///
    /// The sequence is walked from last to first so the smallest position of
    /// each value ends up on top of its stack.
    pub fn count_elements(sequence: &[Value]) -> Result<Self> {
        let mut dict: Dict<CounterEntry> = Dict::with_expected_items(sequence.len());

        for (index, value) in sequence.iter().enumerate().rev() {
            match dict.get_mut(value)? {
                Some(entry) => entry.indices.push(index),
                None => {
                    dict.assign(
                        value.clone(),
                        CounterEntry {
                            indices: vec![index],
                        },
                    )?;
                }
            }
        }

        trace!(
            total = sequence.len(),
            distinct = dict.len(),
            "counter: built from sequence"
        );
        Ok(Self {
            dict,
            total: sequence.len(),
        })
    }

    /// Take the next original index of `value`.
    ///
    /// Fails with [`CollectionError::MissingKey`] when no occurrence remains.
    pub fn pop_next_index(&mut self, value: &Value) -> Result<usize> {
        self.try_pop_next_index(value)?
            .ok_or_else(|| CollectionError::MissingKey {
                key: value.to_string(),
            })
    }

    /// Like [`CounterDict::pop_next_index`], but absence is `Ok(None)`.
    pub fn try_pop_next_index(&mut self, value: &Value) -> Result<Option<usize>> {
        let (index, exhausted) = match self.dict.get_mut(value)? {
            Some(entry) => match entry.indices.pop() {
                Some(index) => (index, entry.indices.is_empty()),
                None => return Ok(None),
            },
            None => return Ok(None),
        };

        if exhausted {
            self.dict.delete(value)?;
        }
        self.total -= 1;
        trace!(value = %value, index, exhausted, "counter: pop index");
        Ok(Some(index))
    }

    /// Remaining occurrences of `value` (zero when absent).
    pub fn count(&self, value: &Value) -> Result<usize> {
        Ok(self.dict.get(value)?.map_or(0, CounterEntry::count))
    }

    pub fn entry(&self, value: &Value) -> Result<Option<&CounterEntry>> {
        self.dict.get(value)
    }

    /// Number of distinct values with occurrences left.
    pub fn distinct_len(&self) -> usize {
        self.dict.len()
    }

    /// Total occurrences left across all values.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_drained(&self) -> bool {
        self.dict.is_empty()
    }

    /// Every index not yet consumed, ascending.
    pub fn remaining_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .dict
            .values()
            .flat_map(|entry| entry.indices.iter().copied())
            .collect();
        indices.sort_unstable();
        indices
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &CounterEntry)> + '_ {
        self.dict.iter()
    }
}
