//! Error types for the echo handler and its worker loop

use thiserror::Error;

/// Errors that can occur while serving an invocation.
///
/// None of these are turned into an HTTP response. They fail the invocation
/// and the hosting platform decides what the caller sees.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("request has no requestContext.identity.sourceIp")]
    MissingSourceIp,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IPC error: {0}")]
    Ipc(String),

    #[error("frame of {len} bytes exceeds the {max} byte limit")]
    FrameTooLarge { len: usize, max: usize },
}
