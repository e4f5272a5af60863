//! Document model for structured configuration data.
//!
//! A [`Document`] is an explicit tagged union of mappings, sequences, and
//! scalar leaves, mirroring the shape of parsed configuration without tying
//! the merge algorithms to any one format crate. Mapping-likeness is the
//! [`Document::Mapping`] variant itself; the order-preserving tag on
//! [`Mapping`] is orthogonal metadata that merges must propagate.

mod convert;
#[cfg(test)]
mod tests;

use indexmap::IndexMap;

/// A nested configuration value: a mapping, a sequence, or a scalar leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Key/value node; see [`Mapping`] for the ordering contract.
    Mapping(Mapping),
    /// Ordered list of documents.
    Sequence(Vec<Document>),
    /// Leaf value.
    Scalar(Scalar),
}

impl Document {
    /// Returns `true` when this document supports key/value iteration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structured_merge::{Document, Mapping};
    ///
    /// assert!(Document::Mapping(Mapping::new()).is_mapping());
    /// assert!(!Document::from(42_i64).is_mapping());
    /// ```
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Borrows the inner mapping, or `None` for sequences and scalars.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            Self::Sequence(_) | Self::Scalar(_) => None,
        }
    }

    /// Mutably borrows the inner mapping, or `None` for other variants.
    #[must_use]
    pub const fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            Self::Sequence(_) | Self::Scalar(_) => None,
        }
    }
}

/// A scalar leaf in a [`Document`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Absent or explicit-null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    String(String),
}

/// A mapping node with an order-preserving tag.
///
/// Entries always iterate in insertion order; the tag records whether
/// downstream consumers may *rely* on that order. Plain mappings make no
/// ordering promise even though the backing store happens to keep one.
/// Merges propagate the tag from whichever side supplied the surviving
/// value, so an order-preserving overlay sub-tree stays order-preserving
/// after landing in a plain base.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: IndexMap<String, Document>,
    order_preserving: bool,
}

impl Mapping {
    /// Creates an empty mapping with no ordering promise.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mapping tagged as order-preserving.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structured_merge::Mapping;
    ///
    /// let ordered = Mapping::order_preserving();
    /// assert!(ordered.is_order_preserving());
    /// assert!(!Mapping::new().is_order_preserving());
    /// ```
    #[must_use]
    pub fn order_preserving() -> Self {
        Self {
            entries: IndexMap::new(),
            order_preserving: true,
        }
    }

    /// Whether consumers may rely on insertion order.
    #[must_use]
    pub const fn is_order_preserving(&self) -> bool {
        self.order_preserving
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrows the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.entries.get(key)
    }

    /// Mutably borrows the value stored under `key`.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Document> {
        self.entries.get_mut(key)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts `value` under `key`, returning any previous value.
    ///
    /// New keys append at the end of the iteration order; existing keys
    /// keep their position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Document>) -> Option<Document> {
        self.entries.insert(key.into(), value.into())
    }

    /// Iterates over entries in insertion order.
    #[must_use]
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Document> {
        self.entries.iter()
    }

    /// Iterates over keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Document> {
        self.entries.keys()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Document);
    type IntoIter = indexmap::map::Iter<'a, String, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Document);
    type IntoIter = indexmap::map::IntoIter<String, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<Document>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            order_preserving: false,
        }
    }
}

impl From<Mapping> for Document {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<Scalar> for Document {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<Vec<Document>> for Document {
    fn from(items: Vec<Document>) -> Self {
        Self::Sequence(items)
    }
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Int(value))
    }
}

impl From<f64> for Document {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::String(value.into()))
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::String(value))
    }
}
