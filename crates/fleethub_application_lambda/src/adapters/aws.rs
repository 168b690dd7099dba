use std::collections::HashMap;
use std::future::Future;

use aws_sdk_iotfleethub::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use fleethub_application_core::api::{
    ApiError, ApiErrorKind, ApiResult, ApplicationSummary, CreateApplicationRequest,
    CreateApplicationResponse, DeleteApplicationRequest, DescribeApplicationRequest,
    DescribeApplicationResponse, FleetHubApi, ListApplicationsRequest, ListApplicationsResponse,
    TagResourceRequest, UntagResourceRequest, UpdateApplicationRequest,
};

use crate::config::ProviderConfig;

/// [`FleetHubApi`] backed by the AWS SDK.
///
/// Calls block the current worker thread, so the client must be used from a
/// multi-threaded tokio runtime.
#[derive(Debug, Clone)]
pub struct AwsFleetHubClient {
    client: aws_sdk_iotfleethub::Client,
}

impl AwsFleetHubClient {
    pub fn new(client: aws_sdk_iotfleethub::Client) -> Self {
        Self { client }
    }

    pub async fn from_config(config: &ProviderConfig) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_iotfleethub::config::Builder::from(&sdk_config);
        if let Some(endpoint_url) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint_url);
        }
        Self::new(aws_sdk_iotfleethub::Client::from_conf(builder.build()))
    }
}

impl FleetHubApi for AwsFleetHubClient {
    fn create_application(
        &self,
        request: &CreateApplicationRequest,
    ) -> ApiResult<CreateApplicationResponse> {
        let output = block_on(
            self.client
                .create_application()
                .set_application_name(request.application_name.clone())
                .set_application_description(request.application_description.clone())
                .client_token(&request.client_token)
                .set_role_arn(request.role_arn.clone())
                .set_tags(non_empty_tags(&request.tags))
                .send(),
        )
        .map_err(api_error)?;

        Ok(CreateApplicationResponse {
            application_id: output.application_id().to_string(),
            application_arn: output.application_arn().to_string(),
        })
    }

    fn describe_application(
        &self,
        request: &DescribeApplicationRequest,
    ) -> ApiResult<DescribeApplicationResponse> {
        let output = block_on(
            self.client
                .describe_application()
                .application_id(&request.application_id)
                .send(),
        )
        .map_err(api_error)?;

        Ok(DescribeApplicationResponse {
            application_id: output.application_id().to_string(),
            application_arn: output.application_arn().to_string(),
            application_name: Some(output.application_name().to_string()),
            application_description: output.application_description().map(str::to_string),
            application_url: Some(output.application_url().to_string()),
            application_state: Some(output.application_state().as_str().to_string()),
            application_creation_date: Some(output.application_creation_date()),
            application_last_update_date: Some(output.application_last_update_date()),
            role_arn: Some(output.role_arn().to_string()),
            sso_client_id: output.sso_client_id().map(str::to_string),
            error_message: output.error_message().map(str::to_string),
            tags: output
                .tags()
                .map(|tags| {
                    tags.iter()
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    fn update_application(&self, request: &UpdateApplicationRequest) -> ApiResult<()> {
        block_on(
            self.client
                .update_application()
                .application_id(&request.application_id)
                .set_application_name(request.application_name.clone())
                .set_application_description(request.application_description.clone())
                .client_token(&request.client_token)
                .send(),
        )
        .map(|_| ())
        .map_err(api_error)
    }

    fn delete_application(&self, request: &DeleteApplicationRequest) -> ApiResult<()> {
        block_on(
            self.client
                .delete_application()
                .application_id(&request.application_id)
                .client_token(&request.client_token)
                .send(),
        )
        .map(|_| ())
        .map_err(api_error)
    }

    fn list_applications(
        &self,
        request: &ListApplicationsRequest,
    ) -> ApiResult<ListApplicationsResponse> {
        let output = block_on(
            self.client
                .list_applications()
                .set_next_token(request.next_token.clone())
                .send(),
        )
        .map_err(api_error)?;

        let application_summaries = output
            .application_summaries()
            .iter()
            .map(|summary| ApplicationSummary {
                application_id: summary.application_id().to_string(),
                application_name: Some(summary.application_name().to_string()),
                application_description: summary.application_description().map(str::to_string),
                application_url: Some(summary.application_url().to_string()),
                application_state: summary
                    .application_state()
                    .map(|state| state.as_str().to_string()),
                application_creation_date: Some(summary.application_creation_date()),
                application_last_update_date: Some(summary.application_last_update_date()),
            })
            .collect();

        Ok(ListApplicationsResponse {
            application_summaries,
            next_token: output.next_token().map(str::to_string),
        })
    }

    fn tag_resource(&self, request: &TagResourceRequest) -> ApiResult<()> {
        block_on(
            self.client
                .tag_resource()
                .resource_arn(&request.resource_arn)
                .set_tags(Some(to_hash_map(&request.tags)))
                .send(),
        )
        .map(|_| ())
        .map_err(api_error)
    }

    fn untag_resource(&self, request: &UntagResourceRequest) -> ApiResult<()> {
        block_on(
            self.client
                .untag_resource()
                .resource_arn(&request.resource_arn)
                .set_tag_keys(Some(request.tag_keys.clone()))
                .send(),
        )
        .map(|_| ())
        .map_err(api_error)
    }
}

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

fn to_hash_map(tags: &std::collections::BTreeMap<String, String>) -> HashMap<String, String> {
    tags.iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn non_empty_tags(
    tags: &std::collections::BTreeMap<String, String>,
) -> Option<HashMap<String, String>> {
    (!tags.is_empty()).then(|| to_hash_map(tags))
}

/// Buckets an SDK failure by its service error code. Failures that never
/// reached the service (dispatch, timeout, decoding) carry no code and are
/// reported as unexpected.
fn api_error<E, R>(error: SdkError<E, R>) -> ApiError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let kind = match error.code() {
        Some(code) => ApiErrorKind::from_code(code),
        None => ApiErrorKind::Unexpected("SdkError".to_string()),
    };
    let message = error
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(&error).to_string());
    ApiError::new(kind, message)
}
