//! Owned payloads for NBT's native array types.
//!
//! | Type          | NBT Tag     | Element Type | Tag ID |
//! |---------------|-------------|--------------|--------|
//! | [`ByteArray`] | `ByteArray` | `i8`         | 7      |
//! | [`IntArray`]  | `IntArray`  | `i32`        | 11     |
//! | [`LongArray`] | `LongArray` | `i64`        | 12     |
//!
//! Each array exclusively owns its elements. Building one from a slice copies
//! it, and the elements are only ever handed out as `&[T]` or by value, so a
//! tag cannot be changed behind its back after construction.
//!
//! ```
//! use skyblock_nbt::{ByteArray, Error};
//!
//! let array = ByteArray::from_unsigned(&[0x00, 0xff]);
//! assert_eq!(array.size(), 2);
//! assert_eq!(array.get(1).unwrap(), -1);
//! assert!(matches!(array.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 })));
//! assert_eq!(array.to_string(), "[00, ff]");
//! ```

use std::fmt;

use crate::{Error, Result, cold_path};

macro_rules! define_array {
    ($($(#[$meta:meta])* $name:ident($elem:ty);)*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, PartialEq, Eq, Hash, Default)]
            pub struct $name(Box<[$elem]>);

            impl $name {
                pub fn new(values: impl Into<Box<[$elem]>>) -> Self {
                    Self(values.into())
                }

                /// Number of elements.
                #[inline]
                pub fn size(&self) -> usize {
                    self.0.len()
                }

                #[inline]
                pub fn is_empty(&self) -> bool {
                    self.0.is_empty()
                }

                /// Returns the element at `index`.
                ///
                /// Fails with [`Error::IndexOutOfRange`] when `index >= size()`.
                #[inline]
                pub fn get(&self, index: usize) -> Result<$elem> {
                    match self.0.get(index) {
                        Some(value) => Ok(*value),
                        None => {
                            cold_path();
                            Err(Error::IndexOutOfRange {
                                index,
                                len: self.0.len(),
                            })
                        }
                    }
                }

                /// Read-only view of the elements.
                #[inline]
                pub fn as_slice(&self) -> &[$elem] {
                    &self.0
                }

                pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, $elem>> {
                    self.0.iter().copied()
                }

                pub fn into_vec(self) -> Vec<$elem> {
                    self.0.into_vec()
                }
            }

            impl From<Vec<$elem>> for $name {
                fn from(values: Vec<$elem>) -> Self {
                    Self(values.into_boxed_slice())
                }
            }

            impl From<&[$elem]> for $name {
                fn from(values: &[$elem]) -> Self {
                    Self(values.into())
                }
            }

            impl<const N: usize> From<[$elem; N]> for $name {
                fn from(values: [$elem; N]) -> Self {
                    Self(Box::new(values))
                }
            }

            impl FromIterator<$elem> for $name {
                fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                    Self(iter.into_iter().collect())
                }
            }

            impl<'a> IntoIterator for &'a $name {
                type Item = $elem;
                type IntoIter = std::iter::Copied<std::slice::Iter<'a, $elem>>;

                fn into_iter(self) -> Self::IntoIter {
                    self.iter()
                }
            }

            impl fmt::Debug for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_tuple(stringify!($name)).field(&self.0).finish()
                }
            }
        )*
    };
}

define_array! {
    /// Payload of a `TAG_Byte_Array`.
    ByteArray(i8);
    /// Payload of a `TAG_Int_Array`.
    IntArray(i32);
    /// Payload of a `TAG_Long_Array`.
    LongArray(i64);
}

impl ByteArray {
    /// Copies raw unsigned bytes into a byte array.
    pub fn from_unsigned(bytes: &[u8]) -> Self {
        bytes.iter().map(|&b| b as i8).collect()
    }

    pub fn to_unsigned(&self) -> Vec<u8> {
        self.0.iter().map(|&b| b as u8).collect()
    }
}

/// Two-digit lowercase hex per byte: `[00, 7f, ff]`.
impl fmt::Display for ByteArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:02x}", *b as u8)?;
        }
        f.write_str("]")
    }
}

fn fmt_decimal<T: fmt::Display>(values: &[T], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str("]")
}

impl fmt::Display for IntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_decimal(&self.0, f)
    }
}

impl fmt::Display for LongArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_decimal(&self.0, f)
    }
}
