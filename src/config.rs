/// Options for decoding.
///
/// ```
/// use skyblock_nbt::ReadConfig;
///
/// let config = ReadConfig::default().max_depth(64).allow_trailing_data(true);
/// assert_eq!(config.depth_limit(), 64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadConfig {
    max_depth: usize,
    allow_trailing_data: bool,
}

impl ReadConfig {
    /// Nesting limit used by [`Default`]; deeper input is rejected.
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            allow_trailing_data: false,
        }
    }

    /// Maximum number of nested lists and compounds below the root.
    ///
    /// The root itself is level zero, so `max_depth(0)` accepts a root
    /// compound of primitives but nothing nested inside it.
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Accept input that continues after the root tag instead of failing
    /// with [`Error::TrailingData`](crate::Error::TrailingData).
    pub const fn allow_trailing_data(mut self, allow: bool) -> Self {
        self.allow_trailing_data = allow;
        self
    }

    pub const fn depth_limit(&self) -> usize {
        self.max_depth
    }

    pub const fn trailing_data_allowed(&self) -> bool {
        self.allow_trailing_data
    }
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Options for encoding.
///
/// The encoder refuses trees nested deeper than a decoder with the same
/// `max_depth` would accept, so anything written with the defaults reads
/// back with the defaults.
///
/// ```
/// use skyblock_nbt::{ReadConfig, WriteConfig};
///
/// assert_eq!(WriteConfig::default().depth_limit(), ReadConfig::DEFAULT_MAX_DEPTH);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteConfig {
    max_depth: usize,
}

impl WriteConfig {
    pub const fn new() -> Self {
        Self {
            max_depth: ReadConfig::DEFAULT_MAX_DEPTH,
        }
    }

    /// Maximum number of nested lists and compounds below the root, counted
    /// the same way as [`ReadConfig::max_depth`].
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn depth_limit(&self) -> usize {
        self.max_depth
    }
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self::new()
    }
}
