#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

/// Byte order of the binary encoding.
///
/// Java edition files are [`BigEndian`](zerocopy::BigEndian); Bedrock edition
/// uses [`LittleEndian`](zerocopy::LittleEndian).
pub trait ByteOrder: zerocopy::ByteOrder + Send + Sync + 'static {}

impl<T: zerocopy::ByteOrder + Send + Sync + 'static> ByteOrder for T {}

/// Hashes one value with fixed keys, so the result is stable across calls.
pub(crate) fn hash_one<T: std::hash::Hash + ?Sized>(value: &T) -> u64 {
    use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher};
    BuildHasherDefault::<DefaultHasher>::default().hash_one(value)
}
