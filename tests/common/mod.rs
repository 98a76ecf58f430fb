#![allow(dead_code, unused_imports)]

mod client;
mod server;

use axum::Router;
pub use client::TestAppClient;
use todo_service::build_app;
use todo_service::Service;

pub use server::{spawn_test_app, TestAppHandle};
use todo_service::TestStorageBuilder;

#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

pub async fn create_test_app() -> Router {
    let builder = TestStorageBuilder::new();
    let service = Service::new(builder.build_todo().await, builder.build_flush().await);

    build_app(service)
}

/// Spawns a fresh app on its own temporary database and returns a client for it.
pub async fn test_client() -> (TestAppClient, TestAppHandle) {
    let handle = spawn_test_app(create_test_app().await).await;
    (TestAppClient::new(handle.address.clone()), handle)
}
