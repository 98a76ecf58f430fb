use serde::Deserialize;
use utoipa::ToSchema;

use crate::storage::TodoFields;

/// Body of `POST /todos`. Any `id` in the payload is ignored; missing or
/// `null` text fields are stored as empty strings.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "completed")]
    pub is_completed: bool,
}

/// Body of `PUT /todos/{id}`: a complete replacement of the mutable fields.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateTodo {
    pub title: String,
    pub description: String,
    #[serde(alias = "completed")]
    pub is_completed: bool,
}

impl From<CreateTodo> for TodoFields {
    fn from(value: CreateTodo) -> Self {
        Self {
            title: value.title.unwrap_or_default(),
            description: value.description.unwrap_or_default(),
            is_completed: value.is_completed,
        }
    }
}

impl From<UpdateTodo> for TodoFields {
    fn from(value: UpdateTodo) -> Self {
        Self {
            title: value.title,
            description: value.description,
            is_completed: value.is_completed,
        }
    }
}
