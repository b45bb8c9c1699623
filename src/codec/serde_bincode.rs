//! Serde + bincode-based codec (compact, fast) using `Serialize`/`Deserialize`.
//!
//! Wire format: bincode `standard()` (little endian, varint lengths) capped at
//! [`DECODE_LIMIT`] bytes per value. The cap is enforced on both sides: a value
//! that encodes larger is refused, and a payload whose length prefixes claim
//! more fails with `LimitExceeded` before anything is allocated for it.

use super::Codec;
use std::io::{Read, Write};
use std::marker::PhantomData;

/// Largest encoded value, in bytes, that [`SerdeBincode`] writes or reads (1 GiB).
pub const DECODE_LIMIT: usize = 1 << 30;

#[derive(Copy, Debug, Default)]
pub struct SerdeBincode<T>(PhantomData<T>);

impl<T> SerdeBincode<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }

    fn config() -> impl bincode::config::Config {
        bincode::config::standard().with_limit::<DECODE_LIMIT>()
    }
}

impl<T> Clone for SerdeBincode<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum BincodeError {
    #[error("decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),
    #[error("encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    #[error("encoded value is {len} bytes, limit is {limit}")]
    TooLarge { len: usize, limit: usize },
}

impl<T> Codec for SerdeBincode<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync + 'static,
{
    type Value = T;
    type Error = BincodeError;

    /// Bytes may already have reached `w` when `TooLarge` is returned; the
    /// writer encodes into memory, so the file is never touched in that case.
    fn encode_into(&self, value: &Self::Value, w: &mut impl Write) -> Result<(), Self::Error> {
        let len = bincode::serde::encode_into_std_write(value, w, Self::config())?;
        if len > DECODE_LIMIT {
            return Err(BincodeError::TooLarge {
                len,
                limit: DECODE_LIMIT,
            });
        }
        Ok(())
    }

    fn decode_from(&self, r: &mut impl Read) -> Result<Self::Value, Self::Error> {
        Ok(bincode::serde::decode_from_std_read(r, Self::config())?)
    }
}
