use fleethub_application_core::api::FleetHubApi;
use fleethub_application_core::contract::{HandlerErrorCode, ProgressEvent, ResourceHandlerRequest};
use fleethub_application_core::translator::{from_describe_response, to_describe_request};

use super::{remote_failure, MISSING_APPLICATION_ID_MESSAGE};

pub fn handle_read(request: &ResourceHandlerRequest, api: &impl FleetHubApi) -> ProgressEvent {
    let model = &request.desired_resource_state;

    let Some(application_id) = model.application_id.as_deref() else {
        tracing::warn!("read requires an application id, but none was provided");
        return ProgressEvent::failed(
            Some(model.clone()),
            HandlerErrorCode::NotFound,
            MISSING_APPLICATION_ID_MESSAGE,
        );
    };

    let response = match api.describe_application(&to_describe_request(application_id)) {
        Ok(value) => value,
        Err(error) if error.is_not_found() => {
            tracing::info!(application_id, "application was not found");
            return ProgressEvent::failed(
                Some(model.clone()),
                HandlerErrorCode::NotFound,
                error.message,
            );
        }
        Err(error) => return remote_failure(Some(model), "read", &error),
    };

    tracing::info!(
        application_id = %response.application_id,
        application_name = response.application_name.as_deref().unwrap_or_default(),
        "described application"
    );

    ProgressEvent::success(Some(from_describe_response(&response)))
}
