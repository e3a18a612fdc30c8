use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{IntoValue, Value};

/// An insertion-ordered mapping of attribute names to values.
///
/// Rendering walks the entries in the order they were first inserted, so the output of
/// [`attrs`](crate::attrs) is stable byte-for-byte. Replacing the value of an existing key
/// keeps its original position.
#[derive(Debug, Clone)]
pub struct Attributes<'bump> {
    bump: &'bump Bump,
    entries: BumpVec<'bump, (BumpString<'bump>, Value<'bump>)>,
}
impl PartialEq for Attributes<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<'bump> Attributes<'bump> {
    /// Create an empty mapping in the given bump allocator.
    pub fn new_in(bump: &'bump Bump) -> Self {
        Attributes {
            bump,
            entries: BumpVec::new_in(bump),
        }
    }

    /// Create a mapping from key/value pairs, in order.
    ///
    /// ```rust
    /// use jade_runtime::{bumpalo::Bump, Attributes};
    ///
    /// let bump = Bump::new();
    /// let attributes = Attributes::from_pairs(&bump, [("id", "main"), ("role", "nav")]);
    /// assert_eq!(attributes.keys().collect::<Vec<_>>(), ["id", "role"]);
    /// ```
    pub fn from_pairs<K: AsRef<str>, V: IntoValue<'bump>>(
        bump: &'bump Bump,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        let mut result = Self::new_in(bump);
        for (key, value) in pairs {
            let value = value.into_value(bump);
            result.insert(key.as_ref(), value);
        }
        result
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.as_str() == key)
    }

    /// Set `key` to `value`, returning the previous value if the key was present.
    pub fn insert(&mut self, key: &str, value: Value<'bump>) -> Option<Value<'bump>> {
        match self.position(key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                let key = BumpString::from_str_in(key, self.bump);
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value<'bump>> {
        self.position(key).map(|idx| self.entries.remove(idx).1)
    }

    /// Get the value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value<'bump>> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    /// Whether `key` is present, even if its value is [`Value::Null`].
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value<'bump>)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let bump = Bump::new();
        let mut attributes = Attributes::from_pairs(&bump, [("a", 1), ("b", 2)]);
        let previous = attributes.insert("a", Value::Int(3));

        assert_eq!(previous, Some(Value::Int(1)));
        assert_eq!(attributes.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(attributes.get("a"), Some(&Value::Int(3)));
    }

    #[test]
    fn test_remove_and_contains() {
        let bump = Bump::new();
        let mut attributes = Attributes::from_pairs(&bump, [("id", Value::Null)]);
        assert!(attributes.contains_key("id"));
        assert_eq!(attributes.remove("id"), Some(Value::Null));
        assert!(attributes.is_empty());
        assert_eq!(attributes.remove("id"), None);
    }
}
