use fleethub_application_core::api::FleetHubApi;
use fleethub_application_core::contract::{HandlerErrorCode, ProgressEvent, ResourceHandlerRequest};
use fleethub_application_core::translator::{
    desired_tags, diff_tags, to_describe_request, to_update_request,
};
use fleethub_application_core::validation::{
    first_supplied_read_only_field, UPDATE_READ_ONLY_FIELDS, UPDATE_SETTABLE_FIELDS_MESSAGE,
};

use super::{
    missing_client_token, read_only_field_supplied, remote_failure,
    MISSING_APPLICATION_ID_MESSAGE,
};

/// Updates name and description, then reconciles tags against the live
/// resource. Returns the caller's desired model unchanged on success.
pub fn handle_update(request: &ResourceHandlerRequest, api: &impl FleetHubApi) -> ProgressEvent {
    let model = &request.desired_resource_state;

    let Some(application_id) = model.application_id.as_deref() else {
        tracing::warn!("update requires an application id, but none was provided");
        return ProgressEvent::failed(
            Some(model.clone()),
            HandlerErrorCode::NotFound,
            MISSING_APPLICATION_ID_MESSAGE,
        );
    };

    let Some(client_token) = request.client_token() else {
        return missing_client_token(model, "update");
    };

    if let Some((field, value)) = first_supplied_read_only_field(model, UPDATE_READ_ONLY_FIELDS) {
        return read_only_field_supplied(
            model,
            "update",
            field,
            &value,
            UPDATE_SETTABLE_FIELDS_MESSAGE,
        );
    }

    // A missing application surfaces from the describe below.
    match api.update_application(&to_update_request(model, application_id, client_token)) {
        Ok(()) => {}
        Err(error) if error.is_not_found() => {
            tracing::warn!(application_id, "application was not found during update");
        }
        Err(error) => return remote_failure(Some(model), "update", &error),
    }

    let current = match api.describe_application(&to_describe_request(application_id)) {
        Ok(value) => value,
        Err(error) if error.is_not_found() => {
            tracing::info!(application_id, "application was not found");
            return ProgressEvent::failed(
                Some(model.clone()),
                HandlerErrorCode::NotFound,
                error.message,
            );
        }
        Err(error) => return remote_failure(Some(model), "update", &error),
    };

    let diff = diff_tags(&current.tags, &desired_tags(request));

    if let Some(tag_request) = diff.tag_request(&current.application_arn) {
        if let Err(error) = api.tag_resource(&tag_request) {
            return remote_failure(Some(model), "update", &error);
        }
        tracing::info!(
            application_arn = %current.application_arn,
            added = tag_request.tags.len(),
            "tagged application"
        );
    }

    if let Some(untag_request) = diff.untag_request(&current.application_arn) {
        if let Err(error) = api.untag_resource(&untag_request) {
            return remote_failure(Some(model), "update", &error);
        }
        tracing::info!(
            application_arn = %current.application_arn,
            removed = untag_request.tag_keys.len(),
            "untagged application"
        );
    }

    tracing::info!(application_id, "updated application");
    ProgressEvent::success(Some(model.clone()))
}
