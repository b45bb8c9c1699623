//! writer.rs: whole-file, single-shot writer.
//! - Encode fully in memory first; a codec failure never touches the file
//! - Create/truncate, stream through BufWriter (+ zstd), flush, optional fsync
//! - The file handle lives only inside `write`; drop closes it on every path

use std::fs::File;
use std::io::{self, BufWriter, Seek, Write};
use std::path::Path;

use crate::Compression;
use crate::codec::Codec;
use crate::config::StashConfig;
use crate::error::StashError;

/// Writes one `C::Value` as the complete contents of a file.
///
/// Holds no file handles between calls, so it is cheap to clone and share.
/// Two writers racing on the same path leave whichever write landed last.
#[derive(Clone, Debug)]
pub struct StashWriter<C: Codec> {
    cfg: StashConfig,
    codec: C,
}

impl<C: Codec> StashWriter<C> {
    pub fn new(cfg: StashConfig, codec: C) -> Self {
        Self { cfg, codec }
    }

    pub fn config(&self) -> &StashConfig {
        &self.cfg
    }

    /// Encode `value` and replace the contents of `path` with it.
    ///
    /// The parent directory must already exist.
    pub fn write(&self, path: impl AsRef<Path>, value: &C::Value) -> Result<(), StashError> {
        let path = path.as_ref();

        let mut encoded = Vec::new();
        self.codec
            .encode_into(value, &mut encoded)
            .map_err(|e| StashError::Encode(Box::new(e)))?;

        let mut sink = FileSink::create(path, &self.cfg)?;
        sink.write_all(&encoded)?;
        let on_disk = sink.finish(self.cfg.sync)?;

        tracing::debug!(
            path = %path.display(),
            encoded = encoded.len(),
            on_disk,
            compression = ?self.cfg.compression,
            "value written"
        );
        Ok(())
    }
}

/// Byte path from the encoded value to disk: optional zstd over a buffered file.
enum FileSink {
    Plain(BufWriter<File>),
    Zstd(zstd::stream::write::Encoder<'static, BufWriter<File>>),
}

impl FileSink {
    /// Create or truncate `path`.
    fn create(path: &Path, cfg: &StashConfig) -> io::Result<Self> {
        let file = BufWriter::with_capacity(cfg.write_buffer, File::create(path)?);
        Ok(match cfg.compression {
            Compression::None => FileSink::Plain(file),
            Compression::Zstd { level } => {
                FileSink::Zstd(zstd::stream::write::Encoder::new(file, level)?)
            }
        })
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            FileSink::Plain(w) => w.write_all(buf),
            FileSink::Zstd(e) => e.write_all(buf),
        }
    }

    /// End the zstd frame, flush, optionally fsync. Returns the file length.
    fn finish(self, sync: bool) -> io::Result<u64> {
        let buffered = match self {
            FileSink::Plain(w) => w,
            FileSink::Zstd(e) => e.finish()?,
        };
        let mut file = buffered.into_inner().map_err(|e| e.into_error())?;
        if sync {
            file.sync_all()?;
        }
        // written from offset 0 of a truncated file, so position == length
        file.stream_position()
    }
}
