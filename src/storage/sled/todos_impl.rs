use crate::storage::TodoId;
use crate::trace_err;
use crate::utils::measure_metrics::{measure_and_record_storage, record_transaction};

use super::error::SledStorageError;
use super::internal::{
    span_wrappers::{
        deserialize_in_span, get_value_in_transaction_with_span, get_value_with_span,
        insert_value_in_transaction_with_span, remove_value_in_transaction_with_span,
        scan_tree_with_span, serialize_in_span,
    },
    Key,
};
use super::{BincodeConfig, SledStorage};
use super::{StorageError, Todo, TodoFields, TodoRecord, TodoStorage};
use async_trait::async_trait;
use sled::transaction::ConflictableTransactionError;
use sled::Tree;
use tracing::{info, info_span, instrument, warn, Span};

#[async_trait]
impl TodoStorage for SledStorage {
    #[instrument(name = "SledStorage::find_all_todos", skip_all)]
    async fn find_all(&self) -> Result<Vec<Todo>, StorageError> {
        measure_and_record_storage("SledStorage::find_all_todos", || {
            trace_err!(
                scan_tree_with_span(&self.todo_tree, |key, bytes| {
                    Ok(deserialize_in_span::<TodoRecord>(&self.bincode_config, bytes)?
                        .into_todo(key.id()))
                }),
                "failed to scan todo tree"
            )
        })
        .map_err(Into::into)
    }

    #[instrument(name = "SledStorage::find_todo_by_id", skip_all)]
    async fn find_by_id(&self, todo_id: TodoId) -> Result<Option<Todo>, StorageError> {
        info!(todo_id = %todo_id, "find todo");

        measure_and_record_storage("SledStorage::find_todo_by_id", || {
            let key = Key::new(todo_id);

            let value = trace_err!(
                get_value_with_span(&key, &self.todo_tree),
                "failed to read todo from storage"
            )?;

            value
                .map(|bytes| {
                    trace_err!(
                        deserialize_in_span::<TodoRecord>(&self.bincode_config, &bytes),
                        "failed to bin decode todo"
                    )
                    .map(|record| record.into_todo(todo_id))
                })
                .transpose()
        })
        .map_err(Into::into)
    }

    #[instrument(name = "SledStorage::save_todo", skip_all)]
    async fn save(&self, id: Option<TodoId>, fields: TodoFields) -> Result<Todo, StorageError> {
        info!(todo_id = ?id, "save todo");

        measure_and_record_storage("SledStorage::save_todo", || loop {
            let todo_id = match id {
                Some(todo_id) => todo_id,
                None => trace_err!(self.next_id(), "failed to generate todo id")?,
            };
            let todo = Todo::new(todo_id, fields.clone());
            let key = Key::new(todo_id);

            let encoded = trace_err!(
                serialize_in_span(&self.bincode_config, &TodoRecord::from(&todo)),
                "failed to bin encode todo"
            )?;

            let result = self.todo_tree.transaction(|tx| {
                if id.is_none() && get_value_in_transaction_with_span(&key, tx)?.is_some() {
                    return Err(ConflictableTransactionError::Abort(
                        SledStorageError::IdTaken(todo_id),
                    ));
                }
                insert_value_in_transaction_with_span(&key, &encoded, tx)
            });
            record_transaction("save_todo", result.is_ok());

            match result.map_err(SledStorageError::from) {
                Ok(()) => {
                    info!(todo_id = %todo_id, "saved todo");
                    return Ok::<Todo, SledStorageError>(todo);
                }
                Err(SledStorageError::IdTaken(taken)) => {
                    warn!(todo_id = %taken, "generated id already in use, retrying");
                }
                Err(e) => return trace_err!(Err(e), "failed to write todo into storage"),
            }
        })
        .map_err(Into::into)
    }

    #[instrument(name = "SledStorage::update_todo", skip_all)]
    async fn update(&self, todo_id: TodoId, fields: TodoFields) -> Result<Todo, StorageError> {
        // cloning tree should be cheap: struct Tree{inner: Arc<TreeInner>}
        let (todo_tree, bincode_config) = info_span!("Cloning tree and config")
            .in_scope(|| (self.todo_tree.clone(), self.bincode_config));

        let span = Span::current();
        tokio::task::spawn_blocking(move || {
            span.in_scope(|| update_todo(todo_id, &fields, &todo_tree, &bincode_config))
        })
        .await?
    }

    #[instrument(name = "SledStorage::delete_todo", skip_all)]
    async fn delete(&self, todo_id: TodoId) -> Result<bool, StorageError> {
        info!(todo_id = %todo_id, "delete todo");

        let result = measure_and_record_storage("SledStorage::delete_todo", || {
            let key = Key::new(todo_id);
            self.todo_tree
                .transaction(|tx| remove_value_in_transaction_with_span(&key, tx))
        });
        record_transaction("delete_todo", result.is_ok());

        let removed = trace_err!(
            result.map_err(SledStorageError::from),
            "failed to remove todo from storage"
        )?;

        Ok(removed)
    }
}

#[instrument(name = "update_todo", skip_all)]
fn update_todo(
    todo_id: TodoId,
    fields: &TodoFields,
    todo_tree: &Tree,
    bincode_config: &BincodeConfig,
) -> Result<Todo, StorageError> {
    info!(todo_id = %todo_id, "update todo");

    let result = measure_and_record_storage("SledStorage::update_todo_in_transaction", || {
        todo_tree.transaction(|tx| {
            let key = Key::new(todo_id);

            let Some(value) = get_value_in_transaction_with_span(&key, tx)? else {
                warn!(todo_id = %todo_id, "failed to find todo in the storage");
                return Err(ConflictableTransactionError::Abort(SledStorageError::NotFound));
            };

            let mut todo = trace_err!(
                deserialize_in_span::<TodoRecord>(bincode_config, &value),
                "failed to bin decode todo"
            )?
            .into_todo(todo_id);

            todo.apply(fields);

            let encoded = trace_err!(
                serialize_in_span(bincode_config, &TodoRecord::from(&todo)),
                "failed to bin encode todo"
            )?;

            insert_value_in_transaction_with_span(&key, &encoded, tx)?;

            Ok(todo)
        })
    });
    record_transaction("update_todo", result.is_ok());

    Ok(result.map_err(SledStorageError::from)?)
}
