use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    handlers::error::AppError,
    storage::{Todo, TodoFields, TodoId, TodoStorage},
    utils::measure_metrics::measure_and_record_service,
};

pub struct ServiceTodoRef {
    storage: Arc<dyn TodoStorage>,
}

impl ServiceTodoRef {
    pub(crate) fn new(storage: Arc<dyn TodoStorage>) -> Self {
        Self { storage }
    }

    #[instrument(name = "Service::todo::find_all", skip_all)]
    pub async fn find_all(&self) -> Result<Vec<Todo>, AppError> {
        measure_and_record_service("find_all_todos", || async {
            self.storage.find_all().await
        })
        .await
        .map_err(Into::into)
    }

    #[instrument(name = "Service::todo::find_by_id", skip_all)]
    pub async fn find_by_id(&self, todo_id: TodoId) -> Result<Option<Todo>, AppError> {
        measure_and_record_service("find_todo_by_id", || async {
            self.storage.find_by_id(todo_id).await
        })
        .await
        .map_err(Into::into)
    }

    /// Like [`Self::find_by_id`], with absence turned into `AppError::NotFound`.
    #[instrument(name = "Service::todo::get", skip_all)]
    pub async fn get(&self, todo_id: TodoId) -> Result<Todo, AppError> {
        match self.find_by_id(todo_id).await? {
            Some(todo) => Ok(todo),
            None => {
                info!(todo_id = %todo_id, "todo not found");
                Err(AppError::NotFound)
            }
        }
    }

    #[instrument(name = "Service::todo::create", skip_all)]
    pub async fn create(&self, fields: TodoFields) -> Result<Todo, AppError> {
        let todo = measure_and_record_service("create_todo", || async {
            self.storage.save(None, fields).await
        })
        .await?;

        info!(todo_id = %todo.id, "created todo");

        Ok(todo)
    }

    #[instrument(name = "Service::todo::update", skip_all)]
    pub async fn update(&self, todo_id: TodoId, fields: TodoFields) -> Result<Todo, AppError> {
        info!(todo_id = %todo_id, "update todo");

        measure_and_record_service("update_todo", || async {
            self.storage.update(todo_id, fields).await
        })
        .await
        .map_err(Into::into)
    }

    /// Deleting a missing item is a no-op.
    #[instrument(name = "Service::todo::delete", skip_all)]
    pub async fn delete(&self, todo_id: TodoId) -> Result<(), AppError> {
        info!(todo_id = %todo_id, "delete todo");

        let removed = measure_and_record_service("delete_todo", || async {
            self.storage.delete(todo_id).await
        })
        .await?;

        if !removed {
            info!(todo_id = %todo_id, "nothing to delete");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{service::Service, storage::test_util::TestStorageBuilder};

    async fn service() -> Service {
        let builder = TestStorageBuilder::new();
        Service::new(builder.build_todo().await, builder.build_flush().await)
    }

    fn fields(title: &str, description: &str, is_completed: bool) -> TodoFields {
        TodoFields {
            title: title.to_string(),
            description: description.to_string(),
            is_completed,
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = service().await;

        let created = service
            .todo()
            .create(fields("Buy milk", "", false))
            .await
            .unwrap();
        assert_eq!(created.title, "Buy milk");

        let found = service.todo().get(created.id).await.unwrap();
        assert_eq!(found, created);

        let all = service.todo().find_all().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let service = service().await;

        let result = service.todo().get(TodoId::from(99999)).await;
        assert!(matches!(result, Err(AppError::NotFound)));

        let found = service.todo().find_by_id(TodoId::from(99999)).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let service = service().await;

        let result = service
            .todo()
            .update(TodoId::from(99999), fields("A", "B", true))
            .await;
        assert!(matches!(result, Err(AppError::NotFound)));
        assert!(service.todo().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let service = service().await;

        let created = service.todo().create(fields("a", "", false)).await.unwrap();

        service.todo().delete(created.id).await.unwrap();
        service.todo().delete(created.id).await.unwrap();

        let result = service.todo().get(created.id).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_flush_storage() {
        let service = service().await;
        service.todo().create(fields("a", "", false)).await.unwrap();

        service.flush_storage().await.unwrap();
    }
}
