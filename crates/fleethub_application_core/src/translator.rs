//! Pure translation between the resource model and the remote API contract.

use std::collections::BTreeMap;

use crate::api::{
    ApplicationSummary, CreateApplicationRequest, DeleteApplicationRequest,
    DescribeApplicationRequest, DescribeApplicationResponse, ListApplicationsRequest,
    TagResourceRequest, UntagResourceRequest, UpdateApplicationRequest,
};
use crate::contract::ResourceHandlerRequest;
use crate::model::{tag_set_from_map, ApplicationModel};

/// Tags the resource should carry: model tags overlaid by stack-level tags,
/// stack-level values winning on key collision.
pub fn desired_tags(request: &ResourceHandlerRequest) -> BTreeMap<String, String> {
    let mut tags = request.desired_resource_state.tag_map();
    if let Some(stack_tags) = &request.desired_resource_tags {
        tags.extend(
            stack_tags
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
    }
    tags
}

pub fn to_create_request(
    request: &ResourceHandlerRequest,
    client_token: &str,
) -> CreateApplicationRequest {
    let model = &request.desired_resource_state;
    CreateApplicationRequest {
        application_name: model.application_name.clone(),
        application_description: model.application_description.clone(),
        client_token: client_token.to_string(),
        role_arn: model.role_arn.clone(),
        tags: desired_tags(request),
    }
}

pub fn to_describe_request(application_id: &str) -> DescribeApplicationRequest {
    DescribeApplicationRequest {
        application_id: application_id.to_string(),
    }
}

pub fn to_update_request(
    model: &ApplicationModel,
    application_id: &str,
    client_token: &str,
) -> UpdateApplicationRequest {
    UpdateApplicationRequest {
        application_id: application_id.to_string(),
        application_name: model.application_name.clone(),
        application_description: model.application_description.clone(),
        client_token: client_token.to_string(),
    }
}

pub fn to_delete_request(application_id: &str, client_token: &str) -> DeleteApplicationRequest {
    DeleteApplicationRequest {
        application_id: application_id.to_string(),
        client_token: client_token.to_string(),
    }
}

pub fn to_list_request(request: &ResourceHandlerRequest) -> ListApplicationsRequest {
    ListApplicationsRequest {
        next_token: request.next_token.clone(),
    }
}

/// Narrows an epoch-seconds timestamp to the 32-bit width of the resource
/// schema. Values outside the `i32` range wrap.
pub fn truncate_timestamp(epoch_seconds: i64) -> i32 {
    epoch_seconds as i32
}

pub fn from_describe_response(response: &DescribeApplicationResponse) -> ApplicationModel {
    ApplicationModel {
        application_id: Some(response.application_id.clone()),
        application_arn: Some(response.application_arn.clone()),
        application_name: response.application_name.clone(),
        application_description: response.application_description.clone(),
        application_url: response.application_url.clone(),
        application_state: response.application_state.clone(),
        application_creation_date: response.application_creation_date.map(truncate_timestamp),
        application_last_update_date: response
            .application_last_update_date
            .map(truncate_timestamp),
        role_arn: response.role_arn.clone(),
        sso_client_id: response.sso_client_id.clone(),
        error_message: response.error_message.clone(),
        tags: Some(tag_set_from_map(&response.tags)),
    }
}

pub fn from_summary(summary: &ApplicationSummary) -> ApplicationModel {
    ApplicationModel {
        application_id: Some(summary.application_id.clone()),
        application_name: summary.application_name.clone(),
        application_description: summary.application_description.clone(),
        application_url: summary.application_url.clone(),
        application_state: summary.application_state.clone(),
        application_creation_date: summary.application_creation_date.map(truncate_timestamp),
        application_last_update_date: summary
            .application_last_update_date
            .map(truncate_timestamp),
        ..ApplicationModel::default()
    }
}

/// Tag changes needed to move a resource from its current tags to the
/// desired ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDiff {
    pub to_add: BTreeMap<String, String>,
    pub to_remove: Vec<String>,
}

impl TagDiff {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    pub fn tag_request(&self, resource_arn: &str) -> Option<TagResourceRequest> {
        if self.to_add.is_empty() {
            return None;
        }
        Some(TagResourceRequest {
            resource_arn: resource_arn.to_string(),
            tags: self.to_add.clone(),
        })
    }

    pub fn untag_request(&self, resource_arn: &str) -> Option<UntagResourceRequest> {
        if self.to_remove.is_empty() {
            return None;
        }
        Some(UntagResourceRequest {
            resource_arn: resource_arn.to_string(),
            tag_keys: self.to_remove.clone(),
        })
    }
}

pub fn diff_tags(
    current: &BTreeMap<String, String>,
    desired: &BTreeMap<String, String>,
) -> TagDiff {
    let to_add = desired
        .iter()
        .filter(|(key, value)| current.get(*key) != Some(*value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    let to_remove = current
        .keys()
        .filter(|key| !desired.contains_key(*key))
        .cloned()
        .collect();

    TagDiff { to_add, to_remove }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::model::Tag;

    fn tags(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn stack_tags_override_model_tags() {
        let request = ResourceHandlerRequest {
            desired_resource_state: ApplicationModel {
                tags: Some(BTreeSet::from([
                    Tag::new("owner", "model"),
                    Tag::new("team", "devices"),
                ])),
                ..ApplicationModel::default()
            },
            desired_resource_tags: Some(tags(&[("owner", "stack"), ("env", "prod")])),
            ..ResourceHandlerRequest::default()
        };

        assert_eq!(
            desired_tags(&request),
            tags(&[("env", "prod"), ("owner", "stack"), ("team", "devices")])
        );
    }

    #[test]
    fn create_request_carries_token_role_and_merged_tags() {
        let request = ResourceHandlerRequest {
            desired_resource_state: ApplicationModel {
                application_name: Some("FleetHub_Test_Application".to_string()),
                role_arn: Some("arn:aws:iam::123456789012:role/FleetHub".to_string()),
                ..ApplicationModel::default()
            },
            desired_resource_tags: Some(tags(&[("env", "prod")])),
            ..ResourceHandlerRequest::default()
        };

        let create = to_create_request(&request, "Fl33tHuB");
        assert_eq!(create.client_token, "Fl33tHuB");
        assert_eq!(
            create.role_arn.as_deref(),
            Some("arn:aws:iam::123456789012:role/FleetHub")
        );
        assert_eq!(create.application_description, None);
        assert_eq!(create.tags, tags(&[("env", "prod")]));
    }

    #[test]
    fn timestamps_wrap_like_a_narrowing_cast() {
        assert_eq!(truncate_timestamp(1_605_054_959), 1_605_054_959);
        assert_eq!(truncate_timestamp(i64::from(i32::MAX) + 1), i32::MIN);
    }

    #[test]
    fn describe_response_becomes_full_model() {
        let response = DescribeApplicationResponse {
            application_id: "87e64213-f61a-4e99-2b22-c633b4512917".to_string(),
            application_arn: "arn:aws:iotfleethub:us-east-1:123456789012:application/87e64213-f61a-4e99-2b22-c633b4512917".to_string(),
            application_state: Some("ACTIVE".to_string()),
            application_creation_date: Some(1_605_054_959),
            sso_client_id: Some("LHGUNDyWARfdHlWpWgMuLmJ5hp58xwbqCc".to_string()),
            tags: tags(&[("team", "devices")]),
            ..DescribeApplicationResponse::default()
        };

        let model = from_describe_response(&response);
        assert_eq!(model.application_state.as_deref(), Some("ACTIVE"));
        assert_eq!(model.application_creation_date, Some(1_605_054_959));
        assert_eq!(model.application_last_update_date, None);
        assert_eq!(
            model.tags,
            Some(BTreeSet::from([Tag::new("team", "devices")]))
        );
    }

    #[test]
    fn changed_value_is_re_added_without_removal() {
        let diff = diff_tags(&tags(&[("k1", "v1")]), &tags(&[("k1", "v2")]));

        assert_eq!(diff.to_add, tags(&[("k1", "v2")]));
        assert!(diff.to_remove.is_empty());
        assert!(diff.untag_request("arn").is_none());
    }

    #[test]
    fn dropped_key_is_removed_without_add() {
        let diff = diff_tags(&tags(&[("k1", "v1")]), &BTreeMap::new());

        assert!(diff.to_add.is_empty());
        assert_eq!(diff.to_remove, vec!["k1".to_string()]);
        assert!(diff.tag_request("arn").is_none());
    }

    #[test]
    fn unchanged_tags_produce_empty_diff() {
        let current = tags(&[("k1", "v1"), ("k2", "v2")]);
        assert!(diff_tags(&current, &current.clone()).is_empty());
    }
}
