//! Persist a single value to a file and load it back.
//!
//! The file holds exactly what the [`codec::Codec`] produces (optionally zstd
//! compressed). There is no header, version or checksum, so the reader must use
//! the same codec and [`Compression`] as the writer.
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! let losses = HashMap::from([("run1".to_string(), 0.42f64), ("run2".to_string(), 0.37)]);
//! stowage::write("losses.bin", &losses)?;
//! let back: HashMap<String, f64> = stowage::read("losses.bin")?;
//! assert_eq!(back, losses);
//! # Ok::<(), stowage::StashError>(())
//! ```

pub mod codec;
mod config;
mod error;
mod io;
mod reader;
mod tests;
mod writer;

pub use crate::config::{StashConfig, StashConfigBuilder};
pub use crate::error::StashError;
pub use crate::reader::StashReader;
pub use crate::writer::StashWriter;

#[cfg(feature = "serde-bincode")]
pub use crate::codec::serde_bincode::SerdeBincode;
#[cfg(feature = "serde-json")]
pub use crate::codec::serde_json::SerdeJson;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Compression {
    #[default]
    None,
    Zstd {
        level: i32,
    },
}

/// Serialize `value` with bincode and make it the complete contents of `path`.
#[cfg(feature = "serde-bincode")]
pub fn write<T>(path: impl AsRef<std::path::Path>, value: &T) -> Result<(), StashError>
where
    T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync + 'static,
{
    StashWriter::new(StashConfig::default(), SerdeBincode::<T>::new()).write(path, value)
}

/// Read all of `path` and decode it as one bincode-encoded `T`.
#[cfg(feature = "serde-bincode")]
pub fn read<T>(path: impl AsRef<std::path::Path>) -> Result<T, StashError>
where
    T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync + 'static,
{
    StashReader::new(StashConfig::default(), SerdeBincode::<T>::new()).read(path)
}
