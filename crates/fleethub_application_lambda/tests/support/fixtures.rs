use std::collections::{BTreeMap, BTreeSet};

use fleethub_application_core::api::DescribeApplicationResponse;
use fleethub_application_core::contract::ResourceHandlerRequest;
use fleethub_application_core::model::{ApplicationModel, Tag};

pub const APPLICATION_ID: &str = "87e64213-f61a-4e99-2b22-c633b4512917";
pub const APPLICATION_ID_2: &str = "76d53102-e50f-3d88-1a11-b522a3401806";
pub const APPLICATION_ARN: &str =
    "arn:aws:iotfleethub:us-east-1:123456789012:application/87e64213-f61a-4e99-2b22-c633b4512917";
pub const APPLICATION_NAME: &str = "FleetHub_Test_Application";
pub const APPLICATION_NAME_2: &str = "FleetHub_Test_Application_2";
pub const APPLICATION_DESCRIPTION: &str = "FleetHub Application created with CFN";
pub const APPLICATION_URL: &str =
    "https://87e64213-f61a-4e99-2b22-c633b4512917.fleethub-endpoint.com";
pub const APPLICATION_URL_2: &str =
    "https://76d53102-e50f-3d88-1a11-b522a3401806.fleethub-endpoint.com";
pub const APPLICATION_STATE: &str = "ACTIVE";
pub const APPLICATION_CREATION_DATE: i64 = 1_605_054_959;
pub const APPLICATION_LAST_UPDATE_DATE: i64 = 1_605_054_999;
pub const CLIENT_TOKEN: &str = "Fl33tHuB";
pub const ROLE_ARN: &str = "arn:aws:iam::123456789012:role/service-role/AWSIotFleetHub_3";
pub const SSO_CLIENT_ID: &str = "LHGUNDyWARfdHlWpWgMuLmJ5hp58xwbqCc";
pub const INVALID_APPLICATION_ID: &str = "1234-invalid-5678";

pub fn tag_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

pub fn tag_set(pairs: &[(&str, &str)]) -> BTreeSet<Tag> {
    pairs.iter().map(|(key, value)| Tag::new(*key, *value)).collect()
}

pub fn describe_response() -> DescribeApplicationResponse {
    DescribeApplicationResponse {
        application_id: APPLICATION_ID.to_string(),
        application_arn: APPLICATION_ARN.to_string(),
        application_name: Some(APPLICATION_NAME.to_string()),
        application_description: Some(APPLICATION_DESCRIPTION.to_string()),
        application_url: Some(APPLICATION_URL.to_string()),
        application_state: Some(APPLICATION_STATE.to_string()),
        application_creation_date: Some(APPLICATION_CREATION_DATE),
        application_last_update_date: Some(APPLICATION_LAST_UPDATE_DATE),
        role_arn: Some(ROLE_ARN.to_string()),
        sso_client_id: Some(SSO_CLIENT_ID.to_string()),
        error_message: None,
        tags: tag_map(&[("resourceTagKey", "resourceTagValue")]),
    }
}

pub fn create_model() -> ApplicationModel {
    ApplicationModel {
        application_name: Some(APPLICATION_NAME.to_string()),
        application_description: Some(APPLICATION_DESCRIPTION.to_string()),
        role_arn: Some(ROLE_ARN.to_string()),
        ..ApplicationModel::default()
    }
}

pub fn request_with_token(model: ApplicationModel) -> ResourceHandlerRequest {
    ResourceHandlerRequest {
        client_request_token: Some(CLIENT_TOKEN.to_string()),
        aws_account_id: Some("123456789012".to_string()),
        ..ResourceHandlerRequest::for_model(model)
    }
}
