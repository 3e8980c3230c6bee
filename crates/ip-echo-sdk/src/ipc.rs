//! Framed stdin/stdout protocol between the gateway and a handler worker.
//!
//! Every message is a 4-byte big-endian length followed by that many bytes of
//! JSON. The gateway writes `InvocationRequest` frames to the worker's stdin
//! and reads one `InvocationResponse` frame back from stdout per request.
//!
//! # Handler Macro
//!
//! ```ignore
//! use ip_echo_sdk::prelude::*;
//!
//! fn handle(req: &InvocationRequest) -> Result<InvocationResponse, HandlerError> {
//!     InvocationResponse::ok_json(&json!({"ip": req.source_ip()?}))
//! }
//!
//! handler_loop!(handle);
//! ```
//!
//! A handler error ends the worker: no frame is written for that request and
//! the gateway treats the invocation as failed.

use crate::config::IpcConfig;
use crate::{HandlerError, InvocationRequest, InvocationResponse};
use std::io::{ErrorKind, Read, Write};

/// Read one request frame.
///
/// Returns `Ok(None)` when the stream ends cleanly before a length prefix.
pub fn read_frame<R: Read>(
    reader: &mut R,
    max_frame_bytes: usize,
) -> Result<Option<InvocationRequest>, HandlerError> {
    // Read length prefix (4 bytes, big-endian)
    let mut len_buf = [0u8; 4];
    let mut filled = 0;
    while filled < len_buf.len() {
        match reader.read(&mut len_buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => return Err(HandlerError::Ipc("Truncated length prefix".into())),
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(HandlerError::Ipc(format!("Failed to read length prefix: {}", e))),
        }
    }

    let len = u32::from_be_bytes(len_buf) as usize;
    if len > max_frame_bytes {
        return Err(HandlerError::FrameTooLarge { len, max: max_frame_bytes });
    }

    let mut payload = vec![0u8; len];
    reader
        .read_exact(&mut payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to read payload: {}", e)))?;

    Ok(Some(serde_json::from_slice(&payload)?))
}

/// Write one response frame and flush it.
pub fn write_frame<W: Write>(writer: &mut W, response: &InvocationResponse) -> Result<(), HandlerError> {
    let payload = serde_json::to_vec(response)?;

    let len = u32::try_from(payload.len()).map_err(|_| HandlerError::FrameTooLarge {
        len: payload.len(),
        max: u32::MAX as usize,
    })?;
    writer
        .write_all(&len.to_be_bytes())
        .map_err(|e| HandlerError::Ipc(format!("Failed to write length: {}", e)))?;
    writer
        .write_all(&payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to write payload: {}", e)))?;
    writer
        .flush()
        .map_err(|e| HandlerError::Ipc(format!("Failed to flush: {}", e)))?;

    Ok(())
}

/// Serve requests from `reader` until it ends, writing responses to `writer`.
///
/// Returns the number of requests answered. Stops at the first error of any
/// kind, including one returned by `handler`.
pub fn serve<R, W, F>(
    mut reader: R,
    mut writer: W,
    config: &IpcConfig,
    mut handler: F,
) -> Result<u64, HandlerError>
where
    R: Read,
    W: Write,
    F: FnMut(&InvocationRequest) -> Result<InvocationResponse, HandlerError>,
{
    let mut served = 0;
    loop {
        let req = match read_frame(&mut reader, config.max_frame_bytes) {
            Ok(Some(req)) => req,
            Ok(None) => {
                tracing::debug!(served, "request stream closed");
                return Ok(served);
            }
            Err(e) => {
                tracing::error!("Failed to read request: {}", e);
                return Err(e);
            }
        };

        let span = tracing::info_span!("invocation", request_id = req.request_id().unwrap_or("-"));
        let _guard = span.enter();

        let response = handler(&req).map_err(|e| {
            tracing::error!("Handler failed: {}", e);
            e
        })?;
        write_frame(&mut writer, &response).map_err(|e| {
            tracing::error!("Failed to send response: {}", e);
            e
        })?;
        served += 1;
    }
}

/// Generates a `main` that runs `handler` over stdin/stdout.
///
/// The handler takes `&InvocationRequest` and returns
/// `Result<InvocationResponse, HandlerError>`.
///
/// # Example
/// ```ignore
/// use ip_echo_sdk::prelude::*;
///
/// fn handle(req: &InvocationRequest) -> Result<InvocationResponse, HandlerError> {
///     Ok(InvocationResponse::new(204))
/// }
///
/// handler_loop!(handle);
/// ```
#[macro_export]
macro_rules! handler_loop {
    ($handler:expr) => {
        fn main() -> ::std::result::Result<(), $crate::HandlerError> {
            $crate::logging::init();
            let config = $crate::config::IpcConfig::from_env();
            $crate::tracing::info!(max_frame_bytes = config.max_frame_bytes, "worker started");

            let stdin = ::std::io::stdin();
            let stdout = ::std::io::stdout();
            $crate::ipc::serve(stdin.lock(), stdout.lock(), &config, $handler)?;
            Ok(())
        }
    };
}
