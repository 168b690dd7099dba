use std::sync::Mutex;

use fleethub_application_core::api::{
    ApiError, ApiResult, CreateApplicationRequest, CreateApplicationResponse,
    DeleteApplicationRequest, DescribeApplicationRequest, DescribeApplicationResponse,
    FleetHubApi, ListApplicationsRequest, ListApplicationsResponse, TagResourceRequest,
    UntagResourceRequest, UpdateApplicationRequest,
};

use super::fixtures;

/// One recorded call against the fake API, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Create(CreateApplicationRequest),
    Describe(DescribeApplicationRequest),
    Update(UpdateApplicationRequest),
    Delete(DeleteApplicationRequest),
    List(ListApplicationsRequest),
    Tag(TagResourceRequest),
    Untag(UntagResourceRequest),
}

/// Fake Fleet Hub API that records every request and answers with canned
/// results.
pub struct RecordingApi {
    calls: Mutex<Vec<ApiCall>>,
    create: ApiResult<CreateApplicationResponse>,
    describe: ApiResult<DescribeApplicationResponse>,
    update: ApiResult<()>,
    delete: ApiResult<()>,
    list: ApiResult<ListApplicationsResponse>,
    tag: ApiResult<()>,
    untag: ApiResult<()>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            create: Ok(CreateApplicationResponse {
                application_id: fixtures::APPLICATION_ID.to_string(),
                application_arn: fixtures::APPLICATION_ARN.to_string(),
            }),
            describe: Ok(fixtures::describe_response()),
            update: Ok(()),
            delete: Ok(()),
            list: Ok(ListApplicationsResponse::default()),
            tag: Ok(()),
            untag: Ok(()),
        }
    }

    pub fn with_create(mut self, result: ApiResult<CreateApplicationResponse>) -> Self {
        self.create = result;
        self
    }

    pub fn with_describe(mut self, result: ApiResult<DescribeApplicationResponse>) -> Self {
        self.describe = result;
        self
    }

    pub fn with_update(mut self, result: ApiResult<()>) -> Self {
        self.update = result;
        self
    }

    pub fn with_delete(mut self, result: ApiResult<()>) -> Self {
        self.delete = result;
        self
    }

    pub fn with_list(mut self, result: ApiResult<ListApplicationsResponse>) -> Self {
        self.list = result;
        self
    }

    pub fn with_tag(mut self, result: ApiResult<()>) -> Self {
        self.tag = result;
        self
    }

    pub fn with_untag(mut self, result: ApiResult<()>) -> Self {
        self.untag = result;
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().expect("poisoned mutex").clone()
    }

    pub fn tag_calls(&self) -> Vec<TagResourceRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::Tag(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    pub fn untag_calls(&self) -> Vec<UntagResourceRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::Untag(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn record<T: Clone>(&self, call: ApiCall, result: &Result<T, ApiError>) -> Result<T, ApiError> {
        self.calls.lock().expect("poisoned mutex").push(call);
        result.clone()
    }
}

impl FleetHubApi for RecordingApi {
    fn create_application(
        &self,
        request: &CreateApplicationRequest,
    ) -> ApiResult<CreateApplicationResponse> {
        self.record(ApiCall::Create(request.clone()), &self.create)
    }

    fn describe_application(
        &self,
        request: &DescribeApplicationRequest,
    ) -> ApiResult<DescribeApplicationResponse> {
        self.record(ApiCall::Describe(request.clone()), &self.describe)
    }

    fn update_application(&self, request: &UpdateApplicationRequest) -> ApiResult<()> {
        self.record(ApiCall::Update(request.clone()), &self.update)
    }

    fn delete_application(&self, request: &DeleteApplicationRequest) -> ApiResult<()> {
        self.record(ApiCall::Delete(request.clone()), &self.delete)
    }

    fn list_applications(
        &self,
        request: &ListApplicationsRequest,
    ) -> ApiResult<ListApplicationsResponse> {
        self.record(ApiCall::List(request.clone()), &self.list)
    }

    fn tag_resource(&self, request: &TagResourceRequest) -> ApiResult<()> {
        self.record(ApiCall::Tag(request.clone()), &self.tag)
    }

    fn untag_resource(&self, request: &UntagResourceRequest) -> ApiResult<()> {
        self.record(ApiCall::Untag(request.clone()), &self.untag)
    }
}
