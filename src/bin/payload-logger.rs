use lambda_runtime::{service_fn, Error};
use payload_logger::{function_handler, FunctionConfig};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = FunctionConfig::bundled()?;
    simple_logger::init_with_level(config.log_level)?;
    log::info!("Starting {}", config.service_name);

    lambda_runtime::run(service_fn(function_handler)).await
}
