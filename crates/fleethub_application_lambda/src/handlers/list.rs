use fleethub_application_core::api::FleetHubApi;
use fleethub_application_core::contract::{ProgressEvent, ResourceHandlerRequest};
use fleethub_application_core::translator::{from_summary, to_list_request};

use super::remote_failure;

pub fn handle_list(request: &ResourceHandlerRequest, api: &impl FleetHubApi) -> ProgressEvent {
    let response = match api.list_applications(&to_list_request(request)) {
        Ok(value) => value,
        Err(error) => {
            return remote_failure(Some(&request.desired_resource_state), "list", &error)
        }
    };

    let models = response
        .application_summaries
        .iter()
        .map(from_summary)
        .collect::<Vec<_>>();

    tracing::info!(
        account_id = request.account_id(),
        page_size = models.len(),
        has_more = response.next_token.is_some(),
        "listed applications"
    );

    ProgressEvent::page(models, response.next_token)
}
