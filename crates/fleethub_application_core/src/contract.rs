use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::ApplicationModel;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandlerAction {
    Create,
    Read,
    Update,
    Delete,
    List,
}

/// Inbound request handed to a handler by the orchestration runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHandlerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<HandlerAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desired_resource_state: ApplicationModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_resource_state: Option<ApplicationModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_resource_tags: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl ResourceHandlerRequest {
    pub fn for_model(desired_resource_state: ApplicationModel) -> Self {
        Self {
            desired_resource_state,
            ..Self::default()
        }
    }

    /// The idempotency token, treating an empty string as absent.
    pub fn client_token(&self) -> Option<&str> {
        self.client_request_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }

    pub fn account_id(&self) -> &str {
        self.aws_account_id.as_deref().unwrap_or("unknown")
    }
}

// List requests may carry an explicit `null` state.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Success,
    Failed,
}

/// Error codes surfaced to the orchestration runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HandlerErrorCode {
    InvalidRequest,
    NotFound,
    ResourceConflict,
    InternalFailure,
    ServiceLimitExceeded,
    Throttling,
}

impl HandlerErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "InvalidRequest",
            Self::NotFound => "NotFound",
            Self::ResourceConflict => "ResourceConflict",
            Self::InternalFailure => "InternalFailure",
            Self::ServiceLimitExceeded => "ServiceLimitExceeded",
            Self::Throttling => "Throttling",
        }
    }
}

impl std::fmt::Display for HandlerErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound result of a single handler invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    pub status: OperationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HandlerErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_model: Option<ApplicationModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_models: Option<Vec<ApplicationModel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default)]
    pub callback_delay_seconds: u32,
}

impl ProgressEvent {
    pub fn success(resource_model: Option<ApplicationModel>) -> Self {
        Self {
            status: OperationStatus::Success,
            error_code: None,
            message: None,
            resource_model,
            resource_models: None,
            next_token: None,
            callback_delay_seconds: 0,
        }
    }

    pub fn page(resource_models: Vec<ApplicationModel>, next_token: Option<String>) -> Self {
        Self {
            resource_models: Some(resource_models),
            next_token,
            ..Self::success(None)
        }
    }

    pub fn failed(
        resource_model: Option<ApplicationModel>,
        error_code: HandlerErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status: OperationStatus::Failed,
            error_code: Some(error_code),
            message: Some(message.into()),
            ..Self::success(resource_model)
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }
}
