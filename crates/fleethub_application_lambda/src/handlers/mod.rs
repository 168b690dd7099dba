//! Lifecycle handlers for the `AWS::IoTFleetHub::Application` resource.
//!
//! Every handler is a synchronous, single-pass translation: validate the
//! request, call the remote API through [`FleetHubApi`], and map the outcome
//! onto a [`ProgressEvent`]. Retries belong to the orchestration runtime.

pub mod create;
pub mod delete;
pub mod list;
pub mod read;
pub mod update;

use fleethub_application_core::api::{ApiError, FleetHubApi};
use fleethub_application_core::classifier::{classify_error, is_unexpected};
use fleethub_application_core::contract::{
    HandlerAction, HandlerErrorCode, ProgressEvent, ResourceHandlerRequest,
};
use fleethub_application_core::model::ApplicationModel;
use serde_json::Value;

pub use create::handle_create;
pub use delete::handle_delete;
pub use list::handle_list;
pub use read::handle_read;
pub use update::handle_update;

pub const MISSING_CLIENT_TOKEN_MESSAGE: &str = "ClientToken was not provided.";
pub const MISSING_APPLICATION_ID_MESSAGE: &str = "ApplicationId was not provided.";

/// Decodes a raw invocation payload and routes it to the matching handler.
pub fn handle_event(payload: Value, api: &impl FleetHubApi) -> ProgressEvent {
    match serde_json::from_value::<ResourceHandlerRequest>(payload) {
        Ok(request) => dispatch(&request, api),
        Err(error) => {
            tracing::warn!(error = %error, "rejecting malformed handler request");
            ProgressEvent::failed(
                None,
                HandlerErrorCode::InvalidRequest,
                format!("Malformed handler request: {error}"),
            )
        }
    }
}

pub fn dispatch(request: &ResourceHandlerRequest, api: &impl FleetHubApi) -> ProgressEvent {
    match request.action {
        Some(HandlerAction::Create) => handle_create(request, api),
        Some(HandlerAction::Read) => handle_read(request, api),
        Some(HandlerAction::Update) => handle_update(request, api),
        Some(HandlerAction::Delete) => handle_delete(request, api),
        Some(HandlerAction::List) => handle_list(request, api),
        None => ProgressEvent::failed(
            Some(request.desired_resource_state.clone()),
            HandlerErrorCode::InvalidRequest,
            "Handler action was not provided.",
        ),
    }
}

fn missing_client_token(model: &ApplicationModel, operation: &str) -> ProgressEvent {
    tracing::warn!(
        operation,
        "client request token is required, but none was provided"
    );
    ProgressEvent::failed(
        Some(model.clone()),
        HandlerErrorCode::InvalidRequest,
        MISSING_CLIENT_TOKEN_MESSAGE,
    )
}

fn read_only_field_supplied(
    model: &ApplicationModel,
    operation: &str,
    field: &str,
    value: &str,
    message: &str,
) -> ProgressEvent {
    tracing::warn!(operation, field, value, "caller supplied a read-only field");
    ProgressEvent::failed(
        Some(model.clone()),
        HandlerErrorCode::InvalidRequest,
        message,
    )
}

/// Classifies a remote error and fails the invocation with the remote message.
fn remote_failure(
    model: Option<&ApplicationModel>,
    operation: &str,
    error: &ApiError,
) -> ProgressEvent {
    let error_code = classify_error(error);
    if is_unexpected(error) {
        tracing::error!(
            operation,
            error_kind = ?error.kind,
            error = %error,
            "unexpected error from Fleet Hub API"
        );
    } else {
        tracing::warn!(
            operation,
            error_code = %error_code,
            error = %error,
            "Fleet Hub API call failed"
        );
    }
    ProgressEvent::failed(model.cloned(), error_code, error.message.clone())
}
