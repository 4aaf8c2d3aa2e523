use std::slice;

use crate::{Error, Result, TagID, Value, cold_path};

/// An ordered sequence of unnamed values that all share one kind.
///
/// The element kind is recorded separately from the values so an empty list
/// still knows what it holds. An empty list built with [`List::new`]`(TagID::End)`
/// adopts the kind of the first value pushed into it.
///
/// ```
/// use skyblock_nbt::{List, TagID, Value};
///
/// let mut list = List::default();
/// list.push(Value::Int(1)).unwrap();
/// list.push(Value::Int(2)).unwrap();
/// assert_eq!(list.element(), TagID::Int);
/// assert!(list.push(Value::Byte(3)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct List {
    element: TagID,
    values: Vec<Value>,
}

impl List {
    /// Creates an empty list of the given element kind.
    pub const fn new(element: TagID) -> Self {
        Self {
            element,
            values: Vec::new(),
        }
    }

    pub fn with_capacity(element: TagID, capacity: usize) -> Self {
        Self {
            element,
            values: Vec::with_capacity(capacity),
        }
    }

    /// Kind of every element. `End` for an untyped empty list.
    #[inline]
    pub fn element(&self) -> TagID {
        self.element
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }

    /// Appends a value, rejecting one whose kind differs from the list's.
    ///
    /// `Value::End` is never a valid element.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let actual = value.tag_id();
        if actual == TagID::End {
            cold_path();
            return Err(Error::InvalidTagType(TagID::End as u8));
        }
        if self.element == TagID::End && self.values.is_empty() {
            self.element = actual;
        } else if actual != self.element {
            cold_path();
            return Err(Error::TagMismatch {
                expected: self.element,
                actual,
            });
        }
        self.values.push(value);
        Ok(())
    }

    /// Appends a value the decoder has already produced with the right kind.
    pub(crate) fn push_unchecked(&mut self, value: Value) {
        debug_assert_eq!(value.tag_id(), self.element);
        self.values.push(value);
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new(TagID::End)
    }
}

impl TryFrom<Vec<Value>> for List {
    type Error = Error;

    fn try_from(values: Vec<Value>) -> Result<Self> {
        let element = values.first().map_or(TagID::End, Value::tag_id);
        if element == TagID::End && !values.is_empty() {
            cold_path();
            return Err(Error::InvalidTagType(TagID::End as u8));
        }
        if let Some(bad) = values.iter().find(|v| v.tag_id() != element) {
            cold_path();
            return Err(Error::TagMismatch {
                expected: element,
                actual: bad.tag_id(),
            });
        }
        Ok(Self { element, values })
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
