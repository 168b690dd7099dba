use crate::api::{ApiError, ApiErrorKind};
use crate::contract::HandlerErrorCode;

/// Maps a remote error category onto the provider error code reported to
/// the orchestration runtime. Undocumented categories become
/// `InternalFailure`.
pub fn classify(kind: &ApiErrorKind) -> HandlerErrorCode {
    match kind {
        ApiErrorKind::Conflict => HandlerErrorCode::ResourceConflict,
        ApiErrorKind::InternalFailure => HandlerErrorCode::InternalFailure,
        ApiErrorKind::InvalidRequest => HandlerErrorCode::InvalidRequest,
        ApiErrorKind::LimitExceeded => HandlerErrorCode::ServiceLimitExceeded,
        ApiErrorKind::ResourceNotFound => HandlerErrorCode::NotFound,
        ApiErrorKind::Throttling => HandlerErrorCode::Throttling,
        ApiErrorKind::Unexpected(_) => HandlerErrorCode::InternalFailure,
    }
}

pub fn classify_error(error: &ApiError) -> HandlerErrorCode {
    classify(&error.kind)
}

pub fn is_unexpected(error: &ApiError) -> bool {
    matches!(error.kind, ApiErrorKind::Unexpected(_))
}
