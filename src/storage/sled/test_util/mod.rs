#![allow(dead_code)]
use std::sync::Arc;

use crate::storage::{FlushStorage, TodoFields, TodoStorage};
use sled::Config;

use super::SledStorage;

/// Temporary sled database, removed when the last handle drops.
pub struct TestStorageBuilder {
    todos: Vec<TodoFields>,
    sled_storage: Arc<SledStorage>,
}

impl TestStorageBuilder {
    pub fn new() -> Self {
        let db = Config::new().temporary(true).open().unwrap();
        Self {
            todos: Vec::new(),
            sled_storage: Arc::new(SledStorage::from_db(db).unwrap()),
        }
    }

    pub fn with_todos(mut self, count: usize) -> Self {
        self.todos = (0..count)
            .map(|i| TodoFields {
                title: format!("todo {i}"),
                description: format!("description {i}"),
                is_completed: i % 2 == 0,
            })
            .collect();
        self
    }

    pub async fn build_todo(&self) -> Arc<dyn TodoStorage> {
        for todo in &self.todos {
            self.sled_storage.save(None, todo.clone()).await.unwrap();
        }

        self.sled_storage.clone()
    }

    pub async fn build_flush(&self) -> Arc<dyn FlushStorage> {
        self.sled_storage.clone()
    }

    pub fn todos(&self) -> Vec<TodoFields> {
        self.todos.clone()
    }
}

impl Default for TestStorageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
