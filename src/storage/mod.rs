mod error;
mod ids;
mod sled;
mod todo;

#[cfg(any(test, feature = "integration_tests"))]
pub use self::sled::test_util;
pub(crate) use self::sled::{error::SledStartupError, SledStorage};

use async_trait::async_trait;
pub(crate) use error::StorageError;
#[cfg(test)]
pub(crate) use error::SledStorageError;
pub use ids::TodoId;
pub(crate) use todo::TodoRecord;
pub use todo::{Todo, TodoFields};

/// Durable keyed collection of todo items.
///
/// Every write runs inside its own transaction: it is either committed as a
/// whole or not visible at all.
#[async_trait]
pub trait TodoStorage: Send + Sync {
    /// All items in ascending id order.
    async fn find_all(&self) -> Result<Vec<Todo>, StorageError>;

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, StorageError>;

    /// `None` inserts under a fresh id and never replaces an existing item.
    /// `Some(id)` writes under that id, replacing whatever is stored there.
    async fn save(&self, id: Option<TodoId>, fields: TodoFields) -> Result<Todo, StorageError>;

    /// Replaces all mutable fields of an existing item. Fails with
    /// `StorageError::NotFound` and writes nothing if `id` is absent.
    async fn update(&self, id: TodoId, fields: TodoFields) -> Result<Todo, StorageError>;

    /// Returns whether an item was removed.
    async fn delete(&self, id: TodoId) -> Result<bool, StorageError>;
}

#[async_trait]
pub trait FlushStorage: Send + Sync {
    async fn flush(&self) -> Result<(), StorageError>;
}
