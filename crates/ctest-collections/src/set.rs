use crate::dict::Dict;
use crate::error::Result;
use crate::value::Value;

/// A set of hashable values: a [`Dict`] whose values are all [`Value::Null`].
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    dict: Dict<Value>,
}

impl Set {
    pub fn with_expected_items(expected: usize) -> Self {
        Self {
            dict: Dict::with_expected_items(expected),
        }
    }

    pub fn from_values(values: &[Value]) -> Result<Self> {
        let mut set = Self::with_expected_items(values.len());
        for value in values {
            set.insert(value.clone())?;
        }
        Ok(set)
    }

    /// Add `value`; `true` if it was not already a member.
    pub fn insert(&mut self, value: Value) -> Result<bool> {
        Ok(self.dict.assign(value, Value::Null)?.is_none())
    }

    pub fn contains(&self, value: &Value) -> Result<bool> {
        self.dict.contains_key(value)
    }

    pub fn remove(&mut self, value: &Value) -> Result<bool> {
        self.dict.delete(value)
    }

    pub fn len(&self) -> usize {
        self.dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> + '_ {
        self.dict.keys()
    }

    /// Members in unspecified order.
    pub fn to_array(&self) -> Vec<Value> {
        self.dict.to_array()
    }

    /// Every member of `self` is a member of `other`.
    pub fn is_subset(&self, other: &Set) -> Result<bool> {
        for value in self.dict.keys() {
            if !other.contains(value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn is_superset(&self, other: &Set) -> Result<bool> {
        other.is_subset(self)
    }

    /// Mutual subset.
    pub fn set_eq(&self, other: &Set) -> Result<bool> {
        Ok(self.is_subset(other)? && other.is_subset(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(items: &[&str]) -> Set {
        let values: Vec<Value> = items.iter().copied().map(Value::from).collect();
        Set::from_values(&values).unwrap()
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = Set::with_expected_items(4);
        assert!(set.insert(Value::from('a')).unwrap());
        assert!(!set.insert(Value::from('a')).unwrap());
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Value::from('a')).unwrap());
        assert!(!set.contains(&Value::from("a")).unwrap());
    }

    #[test]
    fn test_subset_and_equality() {
        let small = set_of(&["x", "y"]);
        let large = set_of(&["y", "z", "x"]);
        assert!(small.is_subset(&large).unwrap());
        assert!(large.is_superset(&small).unwrap());
        assert!(!large.is_subset(&small).unwrap());
        assert!(!small.set_eq(&large).unwrap());
        assert!(set_of(&["x", "y", "x"]).set_eq(&small).unwrap());
    }

    #[test]
    fn test_empty_set_is_subset_of_everything() {
        let empty = set_of(&[]);
        assert!(empty.is_subset(&set_of(&["q"])).unwrap());
        assert!(empty.set_eq(&set_of(&[])).unwrap());
    }

    #[test]
    fn test_remove() {
        let mut set = set_of(&["x", "y"]);
        assert!(set.remove(&Value::from("x")).unwrap());
        assert!(!set.remove(&Value::from("x")).unwrap());
        assert_eq!(set.to_array(), vec![Value::from("y")]);
    }
}
