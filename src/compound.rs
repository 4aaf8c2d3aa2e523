use std::hash::{Hash, Hasher};

use indexmap::{IndexMap, map};

use crate::{ByteArray, IntArray, List, LongArray, Tag, Value, util::hash_one};

/// A mapping from unique names to values.
///
/// Entries iterate and serialize in insertion order. Equality ignores that
/// order: two compounds are equal when they hold the same names bound to
/// equal values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compound {
    entries: IndexMap<String, Value>,
}

macro_rules! typed_getter {
    ($($fn:ident => $as:ident -> $ty:ty;)*) => {
        $(
            #[inline]
            pub fn $fn(&self, name: &str) -> Option<$ty> {
                self.entries.get(name).and_then(Value::$as)
            }
        )*
    };
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Binds `name` to `value`, returning the value it replaces.
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Removes an entry, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.shift_remove(name)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the entry as a standalone named tag.
    pub fn tag(&self, name: &str) -> Option<Tag> {
        self.entries
            .get_key_value(name)
            .map(|(name, value)| Tag::new(name.clone(), value.clone()))
    }

    typed_getter! {
        get_byte => as_byte -> i8;
        get_short => as_short -> i16;
        get_int => as_int -> i32;
        get_long => as_long -> i64;
        get_float => as_float -> f32;
        get_double => as_double -> f64;
        get_byte_array => as_byte_array -> &ByteArray;
        get_str => as_str -> &str;
        get_list => as_list -> &List;
        get_compound => as_compound -> &Compound;
        get_int_array => as_int_array -> &IntArray;
        get_long_array => as_long_array -> &LongArray;
    }

    pub fn iter(&self) -> map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> map::Values<'_, String, Value> {
        self.entries.values()
    }
}

/// Order-independent, so equal compounds hash equally whatever their order.
impl Hash for Compound {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self
            .entries
            .iter()
            .fold(0u64, |acc, entry| acc.wrapping_add(hash_one(&entry)));
        self.entries.len().hash(state);
        combined.hash(state);
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Compound {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
