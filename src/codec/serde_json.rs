//! Serde + JSON codec. Larger and slower than bincode, but the files can be
//! inspected and edited by hand.

use super::Codec;
use std::io::{Read, Write};
use std::marker::PhantomData;

#[derive(Copy, Debug, Default)]
pub struct SerdeJson<T>(PhantomData<T>);

impl<T> SerdeJson<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for SerdeJson<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Codec for SerdeJson<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync + 'static,
{
    type Value = T;
    type Error = serde_json::Error;

    fn encode_into(&self, value: &Self::Value, w: &mut impl Write) -> Result<(), Self::Error> {
        serde_json::to_writer(w, value)
    }

    fn decode_from(&self, r: &mut impl Read) -> Result<Self::Value, Self::Error> {
        serde_json::from_reader(r)
    }
}
