use std::error::Error;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsumerError {
    #[error("decode error: {source}")]
    DecodeError {
        #[from]
        source: DecodeError,
    },

    #[error("build error: {source}")]
    BuildError {
        #[from]
        source: BuildError,
    },
}

/// Raised while pulling body content from the decoder.
///
/// Decode errors are propagated to the driver, never recorded on the consumer:
/// the driver is expected to abort the exchange and eventually call `close`.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("body size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeBody { current_size: usize, max_size: usize },

    #[error("invalid content: {reason}")]
    InvalidContent { reason: String },

    #[error("content after end of stream")]
    ContentAfterEof,

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl DecodeError {
    pub fn too_large_body(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeBody { current_size, max_size }
    }

    pub fn invalid_content<S: ToString>(str: S) -> Self {
        Self::InvalidContent { reason: str.to_string() }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}

/// Raised while assembling the final result from accumulated state.
///
/// Build errors are caught at the terminal transition and recorded on the
/// consumer, never propagated to the driver thread that triggered completion.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("invalid message: {reason}")]
    InvalidMessage { reason: String },

    #[error("build failed: {source}")]
    Other {
        #[from]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl BuildError {
    pub fn invalid_message<S: ToString>(str: S) -> Self {
        Self::InvalidMessage { reason: str.to_string() }
    }

    pub fn other<E: Into<Box<dyn Error + Send + Sync>>>(e: E) -> Self {
        Self::Other { source: e.into() }
    }
}
