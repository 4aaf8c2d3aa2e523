use std::fmt;

use crate::{Compound, TagID, Value};

/// A named value: the unit a stream of NBT is made of.
///
/// The name may be empty. Two tags are equal when they have the same name and
/// equal values of the same kind.
///
/// ```
/// use skyblock_nbt::{ByteArray, Tag};
///
/// let tag = Tag::new("data", ByteArray::from([0x00, -1]));
/// assert_eq!(tag.to_string(), "TAG_Byte_Array(\"data\"): [00, ff]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    name: String,
    value: Value,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A compound root, the conventional top level of a save file.
    pub fn root(name: impl Into<String>, compound: Compound) -> Self {
        Self::new(name, compound)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    pub fn tag_id(&self) -> TagID {
        self.value.tag_id()
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.value)
    }

    /// Returns the payload when the root is a compound.
    #[inline]
    pub fn as_compound(&self) -> Option<&Compound> {
        self.value.as_compound()
    }
}

/// `TAG_Kind("name"): payload`, with the parenthesised name left out when empty.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_id().name())?;
        if !self.name.is_empty() {
            write!(f, "(\"{}\")", self.name)?;
        }
        f.write_str(": ")?;
        self.value.fmt_payload(f, 0)
    }
}
