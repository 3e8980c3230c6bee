//! Source-ip echo handler and its Lambda adapter

pub mod handler;
pub mod lambda;
