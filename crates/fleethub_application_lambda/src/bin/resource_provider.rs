use fleethub_application_core::contract::ProgressEvent;
use fleethub_application_lambda::adapters::aws::AwsFleetHubClient;
use fleethub_application_lambda::config::ProviderConfig;
use fleethub_application_lambda::handlers::handle_event;
use fleethub_application_lambda::logging::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = ProviderConfig::from_env()?;
    init_logging(&config)
        .map_err(|error| Error::from(format!("failed to initialise logging: {error}")))?;

    let client = AwsFleetHubClient::from_config(&config).await;
    let client_ref = &client;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        Ok::<ProgressEvent, Error>(handle_event(event.payload, client_ref))
    }))
    .await
}
