//! Worker configuration

use std::env;

/// Largest payload Lambda accepts for a synchronous invocation.
pub const DEFAULT_MAX_FRAME_BYTES: usize = 6 * 1024 * 1024;

/// Configuration for the framed stdin/stdout worker loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpcConfig {
    /// Frames longer than this are rejected before their payload is read
    pub max_frame_bytes: usize,
}

impl IpcConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            max_frame_bytes: parse_frame_limit(env::var("IP_ECHO_MAX_FRAME_BYTES").ok()),
        }
    }
}

impl Default for IpcConfig {
    fn default() -> Self {
        Self {
            max_frame_bytes: DEFAULT_MAX_FRAME_BYTES,
        }
    }
}

fn parse_frame_limit(raw: Option<String>) -> usize {
    raw.and_then(|s| s.trim().parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_FRAME_BYTES)
}
