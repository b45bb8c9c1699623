// src/config.rs
use crate::Compression;

/// Read/write parameters.
/// Build with `StashConfig::builder().foo(...).build()`, or use `StashConfig::default()`.
///
/// Only `compression` affects the bytes on disk; a reader must use the same
/// value as the writer that produced the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StashConfig {
    /// Compression applied to the encoded payload.
    pub compression: Compression,

    /// `BufReader` capacity used while reading the file (bytes).
    pub read_buffer: usize,
    /// `BufWriter` capacity used while writing the file (bytes).
    pub write_buffer: usize,

    /// `fsync` the file before `write` returns.
    pub sync: bool,
}

impl Default for StashConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl StashConfig {
    /// Start building a config with sane defaults.
    ///
    /// Defaults:
    /// - compression  = None
    /// - read_buffer  = 64 KiB
    /// - write_buffer = 64 KiB
    /// - sync         = false
    pub fn builder() -> StashConfigBuilder {
        StashConfigBuilder {
            compression: Compression::None,
            read_buffer: 64 * 1024,
            write_buffer: 64 * 1024,
            sync: false,
        }
    }
}

/// Fluent builder for `StashConfig`.
#[derive(Clone, Debug)]
pub struct StashConfigBuilder {
    compression: Compression,
    read_buffer: usize,
    write_buffer: usize,
    sync: bool,
}

impl StashConfigBuilder {
    pub fn compression(mut self, c: Compression) -> Self {
        self.compression = c;
        self
    }
    pub fn read_buffer(mut self, bufsize: usize) -> Self {
        self.read_buffer = bufsize;
        self
    }
    pub fn write_buffer(mut self, bufsize: usize) -> Self {
        self.write_buffer = bufsize;
        self
    }
    pub fn sync(mut self, on: bool) -> Self {
        self.sync = on;
        self
    }

    /// Finalize and return the config. Zero-sized buffers are bumped to one byte.
    pub fn build(self) -> StashConfig {
        StashConfig {
            compression: self.compression,
            read_buffer: self.read_buffer.max(1),
            write_buffer: self.write_buffer.max(1),
            sync: self.sync,
        }
    }
}
