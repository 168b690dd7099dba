use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A single resource-level tag as it appears in the CloudFormation template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The `AWS::IoTFleetHub::Application` resource model.
///
/// Identity and server-owned attributes are optional because a desired model
/// arriving on Create carries none of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_creation_date: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_last_update_date: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sso_client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<Tag>>,
}

impl ApplicationModel {
    pub fn with_id(application_id: impl Into<String>) -> Self {
        Self {
            application_id: Some(application_id.into()),
            ..Self::default()
        }
    }

    /// The model tag set as a key/value map. Duplicate keys resolve to the
    /// last tag in set order.
    pub fn tag_map(&self) -> BTreeMap<String, String> {
        self.tags
            .iter()
            .flatten()
            .map(|tag| (tag.key.clone(), tag.value.clone()))
            .collect()
    }
}

pub fn tag_set_from_map(tags: &BTreeMap<String, String>) -> BTreeSet<Tag> {
    tags.iter()
        .map(|(key, value)| Tag::new(key.clone(), value.clone()))
        .collect()
}
