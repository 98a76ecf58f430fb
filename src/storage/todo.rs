use super::TodoId;
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[schema(value_type = u64)]
    pub id: TodoId,
    pub title: String,
    pub description: String,
    #[serde(alias = "completed")]
    pub is_completed: bool,
}

/// The mutable part of a todo item. Writes always carry all of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

impl Todo {
    pub(crate) fn new(id: TodoId, fields: TodoFields) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            is_completed: fields.is_completed,
        }
    }

    /// Whole replacement, never a merge.
    pub(crate) fn apply(&mut self, fields: &TodoFields) {
        self.title.clone_from(&fields.title);
        self.description.clone_from(&fields.description);
        self.is_completed = fields.is_completed;
    }
}

/// On-disk value. The id lives in the key.
#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub(crate) struct TodoRecord {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

impl TodoRecord {
    pub(crate) fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
            is_completed: self.is_completed,
        }
    }
}

impl From<TodoFields> for TodoRecord {
    fn from(value: TodoFields) -> Self {
        Self {
            title: value.title,
            description: value.description,
            is_completed: value.is_completed,
        }
    }
}

impl From<&Todo> for TodoRecord {
    fn from(value: &Todo) -> Self {
        Self {
            title: value.title.clone(),
            description: value.description.clone(),
            is_completed: value.is_completed,
        }
    }
}
