//! Pluggable value (de)serialization. The codec alone fixes the file format.

use std::error::Error;
use std::io::{Read, Write};

/// Turns one `Value` into bytes and back.
/// Implement this yourself, or enable one of the provided serde codecs.
pub trait Codec: Send + Sync + 'static + Clone {
    type Value: Send + Sync + 'static;
    type Error: Error + Send + Sync + 'static;

    /// Encode `value` **into the provided writer**.
    fn encode_into(&self, value: &Self::Value, w: &mut impl Write) -> Result<(), Self::Error>;

    /// Decode a single value **from the provided reader**. Bytes left unread are
    /// reported as corruption by the caller.
    fn decode_from(&self, r: &mut impl Read) -> Result<Self::Value, Self::Error>;
}

#[cfg(feature = "serde-bincode")]
pub mod serde_bincode;

#[cfg(feature = "serde-json")]
pub mod serde_json;

#[cfg(feature = "serde-bincode")]
pub use serde_bincode::{DECODE_LIMIT, SerdeBincode};

#[cfg(feature = "serde-json")]
pub use self::serde_json::SerdeJson;
