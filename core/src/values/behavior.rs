//! Behavior maps and decoration.

use super::Value;
use hashbrown::HashMap;
use std::fmt;

/// Interned member name.
pub type Name = ecow::EcoString;

/// Whether decoration replaces members the target already has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Existing members win; only missing keys are written.
    #[default]
    Preserve,
    /// Every key of the source map is written.
    Replace,
}

impl Overwrite {
    pub fn replaces(self) -> bool {
        matches!(self, Overwrite::Replace)
    }
}

impl From<bool> for Overwrite {
    fn from(overwrite: bool) -> Self {
        if overwrite {
            Overwrite::Replace
        } else {
            Overwrite::Preserve
        }
    }
}

/// A mapping from member name to value.
///
/// Used for a type's instance and static behavior as well as for the fields
/// of an [`Object`](super::Object). Values are cloned shallowly: nested objects,
/// arrays and methods stay shared between copies.
#[derive(Clone, Default, PartialEq)]
pub struct Behavior {
    entries: HashMap<Name, Value>,
}

impl Behavior {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style.
    ///
    /// # Example
    ///
    /// ```
    /// use lighter_core::values::{Behavior, Value};
    ///
    /// let map = Behavior::new().with("a", 1).with("b", "two");
    /// assert_eq!(map.get("a"), Some(&Value::Int(1)));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn with(mut self, key: impl Into<Name>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<Name>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.entries.iter()
    }

    /// Member names, sorted.
    pub fn keys(&self) -> Vec<Name> {
        let mut keys: Vec<Name> = self.entries.keys().cloned().collect();
        keys.sort_unstable_by(|a, b| a.as_str().cmp(b.as_str()));
        keys
    }

    /// Write every entry of `other` over this map.
    pub fn overlay(&mut self, other: &Behavior) {
        for (key, value) in other.iter() {
            self.entries.insert(key.clone(), value.clone());
        }
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(&Name, &Value)> = self.entries.iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));
        f.debug_map()
            .entries(entries.into_iter().map(|(key, value)| (key.as_str(), value)))
            .finish()
    }
}

impl<K: Into<Name>, V: Into<Value>> FromIterator<(K, V)> for Behavior {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut behavior = Behavior::new();
        behavior.extend(iter);
        behavior
    }
}

impl<K: Into<Name>, V: Into<Value>> Extend<(K, V)> for Behavior {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Behavior {
    type Item = (Name, Value);
    type IntoIter = hashbrown::hash_map::IntoIter<Name, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Something that can receive members from a behavior map.
///
/// Implemented by [`Object`](super::Object), whose existing members include
/// those of its prototype, and by [`Behavior`] itself, which is how mixins are
/// merged into a type.
pub trait Decoratable {
    /// Whether a member with this name is already visible on the target.
    fn has_member(&self, key: &str) -> bool;

    /// Write a member.
    fn put_member(&mut self, key: Name, value: Value);
}

impl Decoratable for Behavior {
    fn has_member(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn put_member(&mut self, key: Name, value: Value) {
        self.entries.insert(key, value);
    }
}

/// Write every entry of `map` onto `target`.
///
/// With [`Overwrite::Preserve`] a key is only written when the target does not
/// have it yet.
///
/// # Example
///
/// ```
/// use lighter_core::values::{Behavior, Object, Overwrite, Value, decorate};
///
/// let mut object = Object::from_fields(Behavior::new().with("b", 0));
/// let map = Behavior::new().with("a", 1).with("b", 2);
///
/// decorate(&mut object, &map, Overwrite::Preserve);
/// assert_eq!(object.get("b"), Some(Value::Int(0)));
///
/// decorate(&mut object, &map, Overwrite::Replace);
/// assert_eq!(object.get("b"), Some(Value::Int(2)));
/// ```
pub fn decorate<T: Decoratable + ?Sized>(target: &mut T, map: &Behavior, overwrite: Overwrite) {
    for (key, value) in map.iter() {
        if overwrite.replaces() || !target.has_member(key) {
            tracing::trace!(key = %key, "Decorating member");
            target.put_member(key.clone(), value.clone());
        }
    }
}
