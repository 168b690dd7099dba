use fleethub_application_core::api::FleetHubApi;
use fleethub_application_core::contract::{ProgressEvent, ResourceHandlerRequest};
use fleethub_application_core::translator::to_create_request;
use fleethub_application_core::validation::{
    first_supplied_read_only_field, CREATE_READ_ONLY_FIELDS, CREATE_SETTABLE_FIELDS_MESSAGE,
};

use super::{missing_client_token, read_only_field_supplied, remote_failure};

pub fn handle_create(request: &ResourceHandlerRequest, api: &impl FleetHubApi) -> ProgressEvent {
    let model = &request.desired_resource_state;

    let Some(client_token) = request.client_token() else {
        return missing_client_token(model, "create");
    };

    if let Some((field, value)) = first_supplied_read_only_field(model, CREATE_READ_ONLY_FIELDS) {
        return read_only_field_supplied(
            model,
            "create",
            field,
            &value,
            CREATE_SETTABLE_FIELDS_MESSAGE,
        );
    }

    let create_request = to_create_request(request, client_token);
    let response = match api.create_application(&create_request) {
        Ok(value) => value,
        Err(error) => return remote_failure(Some(model), "create", &error),
    };

    tracing::info!(
        application_id = %response.application_id,
        application_arn = %response.application_arn,
        tag_count = create_request.tags.len(),
        "created application"
    );

    let mut created = model.clone();
    created.application_id = Some(response.application_id);
    created.application_arn = Some(response.application_arn);
    ProgressEvent::success(Some(created))
}
