use crate::Compression;
use std::io::{self, BufReader, Read};

pub(crate) enum PayloadReader<R: Read> {
    Plain(BufReader<R>),
    Zstd(zstd::stream::read::Decoder<'static, BufReader<R>>),
}

impl<R: Read> PayloadReader<R> {
    pub(crate) fn new(compression: Compression, reader: R, bufread: usize) -> io::Result<Self> {
        let br = BufReader::with_capacity(bufread, reader);
        match compression {
            Compression::None => Ok(PayloadReader::Plain(br)),
            Compression::Zstd { .. } => {
                let dec = zstd::stream::read::Decoder::with_buffer(br).map_err(|e| {
                    io::Error::new(io::ErrorKind::InvalidData, format!("zstd: {e}"))
                })?;
                Ok(PayloadReader::Zstd(dec))
            }
        }
    }

    /// Read the whole (decompressed) payload.
    ///
    /// Failures of the underlying file keep their kind; a stream zstd cannot
    /// decode is reported as `InvalidData`.
    pub(crate) fn read_all(self) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        match self {
            PayloadReader::Plain(mut r) => {
                r.read_to_end(&mut out)?;
            }
            PayloadReader::Zstd(mut r) => {
                r.read_to_end(&mut out).map_err(|e| match e.kind() {
                    io::ErrorKind::Other | io::ErrorKind::UnexpectedEof => {
                        io::Error::new(io::ErrorKind::InvalidData, e)
                    }
                    _ => e,
                })?;
            }
        }
        Ok(out)
    }
}
