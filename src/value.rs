use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{ByteArray, Compound, IntArray, List, LongArray, TagID};

/// The payload of a tag.
///
/// The variant decides the payload's type, and a value never changes variant
/// once built. `Float` and `Double` compare and hash by bit pattern so that
/// `Value` can be `Eq`: identical NaNs are equal, `0.0` and `-0.0` are not.
#[derive(Clone, Debug)]
pub enum Value {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(ByteArray),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(IntArray),
    LongArray(LongArray),
}

macro_rules! value_accessor {
    ($($(#[$meta:meta])* $fn:ident, $variant:ident, $ty:ty;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $fn(&self) -> Option<$ty> {
                match self {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        )*
    };
}

macro_rules! value_copy_accessor {
    ($($fn:ident, $variant:ident, $ty:ty;)*) => {
        $(
            #[inline]
            pub fn $fn(&self) -> Option<$ty> {
                match self {
                    Value::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        )*
    };
}

impl Value {
    pub const fn tag_id(&self) -> TagID {
        match self {
            Value::End => TagID::End,
            Value::Byte(_) => TagID::Byte,
            Value::Short(_) => TagID::Short,
            Value::Int(_) => TagID::Int,
            Value::Long(_) => TagID::Long,
            Value::Float(_) => TagID::Float,
            Value::Double(_) => TagID::Double,
            Value::ByteArray(_) => TagID::ByteArray,
            Value::String(_) => TagID::String,
            Value::List(_) => TagID::List,
            Value::Compound(_) => TagID::Compound,
            Value::IntArray(_) => TagID::IntArray,
            Value::LongArray(_) => TagID::LongArray,
        }
    }

    value_copy_accessor! {
        as_byte, Byte, i8;
        as_short, Short, i16;
        as_int, Int, i32;
        as_long, Long, i64;
        as_float, Float, f32;
        as_double, Double, f64;
    }

    value_accessor! {
        as_byte_array, ByteArray, &ByteArray;
        /// Returns the string payload, or `None` for any other kind.
        as_string, String, &String;
        as_list, List, &List;
        as_compound, Compound, &Compound;
        as_int_array, IntArray, &IntArray;
        as_long_array, LongArray, &LongArray;
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.as_string().map(String::as_str)
    }

    /// Writes the payload part of the printed form.
    ///
    /// Lists and compounds span several lines; `indent` is the depth of the
    /// line that holds the header.
    pub(crate) fn fmt_payload(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        match self {
            Value::End => Ok(()),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::ByteArray(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
            Value::IntArray(v) => write!(f, "{v}"),
            Value::LongArray(v) => write!(f, "{v}"),
            Value::List(list) => {
                writeln!(f, "{} entries of type {}", list.len(), list.element())?;
                writeln!(f, "{:width$}{{", "", width = indent * 3)?;
                for value in list {
                    write!(f, "{:width$}{}", "", value.tag_id(), width = (indent + 1) * 3)?;
                    if value.tag_id() != TagID::End {
                        f.write_str(": ")?;
                    }
                    value.fmt_payload(f, indent + 1)?;
                    writeln!(f)?;
                }
                write!(f, "{:width$}}}", "", width = indent * 3)
            }
            Value::Compound(compound) => {
                writeln!(f, "{} entries", compound.len())?;
                writeln!(f, "{:width$}{{", "", width = indent * 3)?;
                for (name, value) in compound {
                    write!(
                        f,
                        "{:width$}{}(\"{}\"): ",
                        "",
                        value.tag_id(),
                        name,
                        width = (indent + 1) * 3
                    )?;
                    value.fmt_payload(f, indent + 1)?;
                    writeln!(f)?;
                }
                write!(f, "{:width$}}}", "", width = indent * 3)
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::End, Value::End) => true,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::ByteArray(a), Value::ByteArray(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Compound(a), Value::Compound(b)) => a == b,
            (Value::IntArray(a), Value::IntArray(b)) => a == b,
            (Value::LongArray(a), Value::LongArray(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.tag_id() as u8).hash(state);
        match self {
            Value::End => {}
            Value::Byte(v) => v.hash(state),
            Value::Short(v) => v.hash(state),
            Value::Int(v) => v.hash(state),
            Value::Long(v) => v.hash(state),
            Value::Float(v) => v.to_bits().hash(state),
            Value::Double(v) => v.to_bits().hash(state),
            Value::ByteArray(v) => v.hash(state),
            Value::String(v) => v.hash(state),
            Value::List(v) => v.hash(state),
            Value::Compound(v) => v.hash(state),
            Value::IntArray(v) => v.hash(state),
            Value::LongArray(v) => v.hash(state),
        }
    }
}

/// Prints the payload alone, without a `TAG_*` header.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_payload(f, 0)
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value.into())
                }
            }
        )*
    };
}

impl_from! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    ByteArray => ByteArray,
    String => String,
    &str => String,
    List => List,
    Compound => Compound,
    IntArray => IntArray,
    LongArray => LongArray,
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Byte(value as i8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::hash_one;

    #[test]
    fn floats_compare_by_bits() {
        assert_eq!(Value::Float(f32::NAN), Value::Float(f32::NAN));
        assert_ne!(Value::Double(0.0), Value::Double(-0.0));
        assert_eq!(
            hash_one(&Value::Double(f64::NAN)),
            hash_one(&Value::Double(f64::NAN))
        );
    }

    #[test]
    fn different_kinds_never_equal() {
        assert_ne!(Value::Byte(1), Value::Short(1));
        assert_ne!(Value::Int(1), Value::Long(1));
        assert_ne!(
            Value::ByteArray(ByteArray::default()),
            Value::IntArray(IntArray::default())
        );
    }

    #[test]
    fn conversions_pick_the_natural_kind() {
        assert_eq!(Value::from(1i8).tag_id(), TagID::Byte);
        assert_eq!(Value::from(true), Value::Byte(1));
        assert_eq!(Value::from("island").as_str(), Some("island"));
        assert_eq!(Value::from(2.5f64).as_double(), Some(2.5));
        assert_eq!(Value::from(7i32).as_long(), None);
    }
}
