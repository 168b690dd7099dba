use std::sync::LazyLock;

use regex::Regex;

use crate::model::ApplicationModel;

static APPLICATION_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("application id pattern is valid")
});

/// A server-owned attribute that callers must leave empty.
#[derive(Clone, Copy)]
pub struct ReadOnlyField {
    pub name: &'static str,
    value: fn(&ApplicationModel) -> Option<String>,
}

impl ReadOnlyField {
    const fn new(name: &'static str, value: fn(&ApplicationModel) -> Option<String>) -> Self {
        Self { name, value }
    }

    /// The caller-supplied value, if one was set and is non-empty.
    pub fn supplied_value(&self, model: &ApplicationModel) -> Option<String> {
        (self.value)(model).filter(|value| !value.is_empty())
    }
}

impl std::fmt::Debug for ReadOnlyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadOnlyField").field("name", &self.name).finish()
    }
}

const APPLICATION_ARN: ReadOnlyField =
    ReadOnlyField::new("ApplicationArn", |model| model.application_arn.clone());
const APPLICATION_ID: ReadOnlyField =
    ReadOnlyField::new("ApplicationId", |model| model.application_id.clone());
const APPLICATION_URL: ReadOnlyField =
    ReadOnlyField::new("ApplicationUrl", |model| model.application_url.clone());
const APPLICATION_STATE: ReadOnlyField =
    ReadOnlyField::new("ApplicationState", |model| model.application_state.clone());
const SSO_CLIENT_ID: ReadOnlyField =
    ReadOnlyField::new("SsoClientId", |model| model.sso_client_id.clone());
const ERROR_MESSAGE: ReadOnlyField =
    ReadOnlyField::new("ErrorMessage", |model| model.error_message.clone());
const APPLICATION_CREATION_DATE: ReadOnlyField = ReadOnlyField::new(
    "ApplicationCreationDate",
    |model| model.application_creation_date.map(|date| date.to_string()),
);
const APPLICATION_LAST_UPDATE_DATE: ReadOnlyField = ReadOnlyField::new(
    "ApplicationLastUpdateDate",
    |model| model.application_last_update_date.map(|date| date.to_string()),
);

/// Fields a Create request may not carry. The id is server-assigned.
pub const CREATE_READ_ONLY_FIELDS: &[ReadOnlyField] = &[
    APPLICATION_ARN,
    APPLICATION_ID,
    APPLICATION_URL,
    APPLICATION_STATE,
    SSO_CLIENT_ID,
    ERROR_MESSAGE,
    APPLICATION_CREATION_DATE,
    APPLICATION_LAST_UPDATE_DATE,
];

/// Fields an Update request may not carry. The id identifies the target.
pub const UPDATE_READ_ONLY_FIELDS: &[ReadOnlyField] = &[
    APPLICATION_ARN,
    APPLICATION_URL,
    APPLICATION_STATE,
    SSO_CLIENT_ID,
    ERROR_MESSAGE,
    APPLICATION_CREATION_DATE,
    APPLICATION_LAST_UPDATE_DATE,
];

pub const CREATE_SETTABLE_FIELDS_MESSAGE: &str = "Can only set ApplicationName, RoleArn, ApplicationDescription (optional), and Tags (optional) in CreateApplication call.";
pub const UPDATE_SETTABLE_FIELDS_MESSAGE: &str =
    "Can only update ApplicationName, ApplicationDescription, or Tags.";

/// Returns the first read-only field the caller populated, with its value.
pub fn first_supplied_read_only_field(
    model: &ApplicationModel,
    fields: &[ReadOnlyField],
) -> Option<(&'static str, String)> {
    fields
        .iter()
        .find_map(|field| field.supplied_value(model).map(|value| (field.name, value)))
}

pub fn is_valid_application_id(application_id: &str) -> bool {
    APPLICATION_ID_PATTERN.is_match(application_id)
}
