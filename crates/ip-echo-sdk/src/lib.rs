//! IP Echo SDK - Types and plumbing for the source-ip echo handler
//!
//! This crate provides the invocation record types, the response builder and
//! the worker loop that handlers use to talk to their hosting platform.

pub mod config;
pub mod error;
pub mod ipc;
pub mod logging;
pub mod request;
pub mod response;

pub mod prelude {
    //! Common imports for handlers
    pub use crate::error::HandlerError;
    pub use crate::handler_loop;
    pub use crate::request::InvocationRequest;
    pub use crate::response::{CorsPolicy, InvocationResponse};
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use error::HandlerError;
pub use request::InvocationRequest;
pub use response::{CorsPolicy, InvocationResponse};

#[doc(hidden)]
pub use tracing;
