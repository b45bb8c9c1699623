use std::fs::File;
use std::io;
use std::path::Path;

use crate::codec::Codec;
use crate::config::StashConfig;
use crate::error::StashError;
use crate::io::payload_reader::PayloadReader;

/// Reads back a file produced by a [`crate::StashWriter`] with the same codec and compression.
#[derive(Clone, Debug)]
pub struct StashReader<C: Codec> {
    cfg: StashConfig,
    codec: C,
}

impl<C: Codec> StashReader<C> {
    pub fn new(cfg: StashConfig, codec: C) -> Self {
        Self { cfg, codec }
    }

    pub fn config(&self) -> &StashConfig {
        &self.cfg
    }

    /// Read all of `path` and decode exactly one value from it.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<C::Value, StashError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let payload = PayloadReader::new(self.cfg.compression, file, self.cfg.read_buffer)?
            .read_all()
            .map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => StashError::Decode(Box::new(e)),
                _ => StashError::Io(e),
            })?;

        let value = self.decode(&payload)?;

        tracing::debug!(
            path = %path.display(),
            decoded = payload.len(),
            compression = ?self.cfg.compression,
            "value read"
        );
        Ok(value)
    }

    /// Decode one value and insist the payload is fully consumed.
    fn decode(&self, payload: &[u8]) -> Result<C::Value, StashError> {
        let mut cur = payload;
        let value = self
            .codec
            .decode_from(&mut cur)
            .map_err(|e| StashError::Decode(Box::new(e)))?;
        if !cur.is_empty() {
            return Err("trailing bytes after encoded value".into());
        }
        Ok(value)
    }
}

