use lambda_runtime::{run, service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    ip_echo_sdk::logging::init();
    run(service_fn(ip_echo::lambda::function_handler)).await
}
