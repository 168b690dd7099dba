use fleethub_application_core::api::FleetHubApi;
use fleethub_application_core::contract::{HandlerErrorCode, ProgressEvent, ResourceHandlerRequest};
use fleethub_application_core::translator::{to_delete_request, to_describe_request};
use fleethub_application_core::validation::is_valid_application_id;

use super::{missing_client_token, remote_failure};

pub const DELETE_MISSING_APPLICATION_ID_MESSAGE: &str = "Application Id was not provided.";
pub const INVALID_APPLICATION_ID_MESSAGE: &str = "Invalid Application Id";

/// Deletes an application.
///
/// The remote delete call succeeds for ids that no longer exist, so the
/// handler describes first to report `NotFound` for already-deleted
/// resources. Missing or malformed ids also report `NotFound` so that the
/// orchestrator treats them as already gone.
pub fn handle_delete(request: &ResourceHandlerRequest, api: &impl FleetHubApi) -> ProgressEvent {
    let model = &request.desired_resource_state;

    let Some(client_token) = request.client_token() else {
        return missing_client_token(model, "delete");
    };

    let Some(application_id) = model.application_id.as_deref() else {
        tracing::info!("returning NotFound from delete: no application id provided");
        return ProgressEvent::failed(
            Some(model.clone()),
            HandlerErrorCode::NotFound,
            DELETE_MISSING_APPLICATION_ID_MESSAGE,
        );
    };

    if !is_valid_application_id(application_id) {
        tracing::info!(application_id, "returning NotFound from delete: invalid application id");
        return ProgressEvent::failed(
            Some(model.clone()),
            HandlerErrorCode::NotFound,
            INVALID_APPLICATION_ID_MESSAGE,
        );
    }

    if let Err(error) = api.describe_application(&to_describe_request(application_id)) {
        return remote_failure(Some(model), "delete", &error);
    }
    tracing::info!(
        application_id,
        account_id = request.account_id(),
        "described application before delete"
    );

    if let Err(error) = api.delete_application(&to_delete_request(application_id, client_token)) {
        if error.is_not_found() {
            tracing::info!(application_id, "application was not found");
        }
        return remote_failure(Some(model), "delete", &error);
    }

    tracing::info!(
        application_id,
        account_id = request.account_id(),
        "deleted application"
    );
    ProgressEvent::success(None)
}
