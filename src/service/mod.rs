pub(crate) mod todo;

use std::sync::Arc;

use crate::{
    storage::{FlushStorage, TodoStorage},
    utils::measure_metrics::measure_and_record_service,
};
use todo::ServiceTodoRef;
use tracing::instrument;

use crate::handlers::error::AppError;

/// Entry point from the HTTP layer into persistence. Cheap to clone: every
/// clone shares the same storage handles.
#[derive(Clone)]
pub struct Service {
    todo_storage: Arc<dyn TodoStorage>,
    flush_storage: Arc<dyn FlushStorage>,
}

impl Service {
    #[instrument(name = "Service::new", skip_all)]
    pub fn new(todo_storage: Arc<dyn TodoStorage>, flush_storage: Arc<dyn FlushStorage>) -> Self {
        Self {
            todo_storage,
            flush_storage,
        }
    }

    pub fn todo(&self) -> ServiceTodoRef {
        ServiceTodoRef::new(self.todo_storage.clone())
    }

    #[instrument(name = "Service::flush_storage", skip_all)]
    pub async fn flush_storage(&self) -> Result<(), AppError> {
        measure_and_record_service("flush_storage", || async {
            self.flush_storage.flush().await.map_err(Into::into)
        })
        .await
    }
}
