//! Typed contract of the remote Fleet Hub management API.
//!
//! Handlers only ever talk to [`FleetHubApi`]; the AWS SDK implementation lives
//! in the lambda crate and test doubles implement the same trait.

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateApplicationRequest {
    pub application_name: Option<String>,
    pub application_description: Option<String>,
    pub client_token: String,
    pub role_arn: Option<String>,
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateApplicationResponse {
    pub application_id: String,
    pub application_arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeApplicationRequest {
    pub application_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeApplicationResponse {
    pub application_id: String,
    pub application_arn: String,
    pub application_name: Option<String>,
    pub application_description: Option<String>,
    pub application_url: Option<String>,
    pub application_state: Option<String>,
    pub application_creation_date: Option<i64>,
    pub application_last_update_date: Option<i64>,
    pub role_arn: Option<String>,
    pub sso_client_id: Option<String>,
    pub error_message: Option<String>,
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateApplicationRequest {
    pub application_id: String,
    pub application_name: Option<String>,
    pub application_description: Option<String>,
    pub client_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteApplicationRequest {
    pub application_id: String,
    pub client_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListApplicationsRequest {
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationSummary {
    pub application_id: String,
    pub application_name: Option<String>,
    pub application_description: Option<String>,
    pub application_url: Option<String>,
    pub application_state: Option<String>,
    pub application_creation_date: Option<i64>,
    pub application_last_update_date: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListApplicationsResponse {
    pub application_summaries: Vec<ApplicationSummary>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagResourceRequest {
    pub resource_arn: String,
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UntagResourceRequest {
    pub resource_arn: String,
    pub tag_keys: Vec<String>,
}

/// Service error categories the remote API documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
    Conflict,
    InternalFailure,
    InvalidRequest,
    LimitExceeded,
    ResourceNotFound,
    Throttling,
    /// Anything the API does not document, keyed by the raw error code when
    /// one was returned.
    Unexpected(String),
}

impl ApiErrorKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "ConflictException" => Self::Conflict,
            "InternalFailureException" => Self::InternalFailure,
            "InvalidRequestException" => Self::InvalidRequest,
            "LimitExceededException" => Self::LimitExceeded,
            "ResourceNotFoundException" => Self::ResourceNotFound,
            "ThrottlingException" => Self::Throttling,
            other => Self::Unexpected(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::ResourceNotFound, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::ResourceNotFound
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Blocking client for the remote management API.
///
/// Implementations hold no per-invocation state; one client is built at
/// startup and lent to every handler call.
pub trait FleetHubApi {
    fn create_application(
        &self,
        request: &CreateApplicationRequest,
    ) -> ApiResult<CreateApplicationResponse>;

    fn describe_application(
        &self,
        request: &DescribeApplicationRequest,
    ) -> ApiResult<DescribeApplicationResponse>;

    fn update_application(&self, request: &UpdateApplicationRequest) -> ApiResult<()>;

    fn delete_application(&self, request: &DeleteApplicationRequest) -> ApiResult<()>;

    fn list_applications(
        &self,
        request: &ListApplicationsRequest,
    ) -> ApiResult<ListApplicationsResponse>;

    fn tag_resource(&self, request: &TagResourceRequest) -> ApiResult<()>;

    fn untag_resource(&self, request: &UntagResourceRequest) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_documented_error_codes() {
        assert_eq!(
            ApiErrorKind::from_code("ResourceNotFoundException"),
            ApiErrorKind::ResourceNotFound
        );
        assert_eq!(
            ApiErrorKind::from_code("LimitExceededException"),
            ApiErrorKind::LimitExceeded
        );
        assert_eq!(
            ApiErrorKind::from_code("AccessDeniedException"),
            ApiErrorKind::Unexpected("AccessDeniedException".to_string())
        );
    }

    #[test]
    fn error_displays_remote_message() {
        let error = ApiError::not_found("Application not found");
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Application not found");
    }
}
