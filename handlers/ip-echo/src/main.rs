//! Gateway worker: serves framed invocations over stdin/stdout
use ip_echo_sdk::prelude::*;

handler_loop!(ip_echo::handler::handle);
