//! Owned NBT (Named Binary Tag) trees and their binary encoding.
//!
//! A save file is one named root [`Tag`], usually holding a [`Compound`].
//! Trees are plain owned values: build one with [`Compound`], [`List`] and the
//! array types, encode it with [`write`], and get an equal tree back from
//! [`read`].
//!
//! ```
//! use skyblock_nbt::{compound, read, write, BigEndian, ByteArray, Tag};
//!
//! let root = Tag::root("", compound! { "data" => ByteArray::from([1, 2, 3]) });
//! let bytes = write::<BigEndian>(&root).unwrap();
//!
//! let decoded = read::<BigEndian>(&bytes).unwrap();
//! let data = decoded.as_compound().unwrap().get_byte_array("data").unwrap();
//! assert_eq!(data.size(), 3);
//! assert_eq!(data.get(1).unwrap(), 2);
//! ```

pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;
pub use zerocopy::NativeEndian;

mod array;
mod compound;
mod config;
mod error;
mod list;
pub mod nbt;
mod read;
mod tag;
mod util;
mod value;
mod write;

#[cfg(feature = "compression")]
mod compression;
#[cfg(feature = "serde")]
pub mod serde;

pub use array::*;
pub use compound::*;
#[cfg(feature = "compression")]
pub use compression::*;
pub use config::*;
pub use error::*;
pub use list::*;
pub use nbt::*;
pub use read::*;
pub use tag::*;
pub use util::ByteOrder;
pub(crate) use util::cold_path;
pub use value::*;
pub use write::*;

/// Builds a [`Compound`] from `name => value` pairs.
///
/// Names must implement `Into<String>` and values `Into<Value>`.
///
/// ```
/// use skyblock_nbt::{compound, IntArray};
///
/// let island = compound! {
///     "owner" => "alice",
///     "level" => 5i32,
///     "locked" => false,
///     "spawn" => compound! { "x" => 0i32, "y" => 64i32, "z" => 0i32 },
///     "biomes" => IntArray::from([1, 1, 4]),
/// };
/// assert_eq!(island.len(), 5);
/// ```
#[macro_export]
macro_rules! compound {
    ($($key:expr => $value:expr),* $(,)?) => {
        <$crate::Compound as ::std::iter::FromIterator<(::std::string::String, $crate::Value)>>::from_iter([
            $(
                (
                    ::std::convert::Into::<::std::string::String>::into($key),
                    ::std::convert::Into::<$crate::Value>::into($value)
                ),
            )*
        ])
    };
}
