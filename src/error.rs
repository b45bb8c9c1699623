use std::io;

#[derive(thiserror::Error, Debug)]
pub enum StashError {
    /// File system failure: missing file or parent directory, permissions, disk full.
    #[error("io: {0}")]
    Io(#[from] io::Error),

    /// The codec could not represent the value. The destination file is untouched.
    #[error("encode: {0}")]
    Encode(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The file contents are not a valid payload for the codec in use
    /// (empty, truncated, corrupt, trailing bytes, or written by another codec).
    #[error("decode: {0}")]
    Decode(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StashError {
    /// True when the operation failed because the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StashError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

impl From<&'static str> for StashError {
    fn from(s: &'static str) -> Self {
        StashError::Decode(s.into())
    }
}
