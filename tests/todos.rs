mod common;
use common::{test_client, ErrorBody};
use reqwest::StatusCode;
use todo_service::{Todo, TodoId};

#[tokio::test]
async fn create_returns_created_item_with_id() {
    let (client, _handle) = test_client().await;

    let res = client.create_todo("Buy milk", "2 litres").await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let todo = res.json::<Todo>().await.unwrap();
    assert!(todo.id.as_u64() > 0);
    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.description, "2 litres");
    assert!(!todo.is_completed);
}

#[tokio::test]
async fn create_accepts_missing_and_null_text() {
    let (client, _handle) = test_client().await;

    for body in [
        serde_json::json!({}),
        serde_json::json!({"title": null, "description": null}),
    ] {
        let res = client.create_todo_json(body).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let todo = res.json::<Todo>().await.unwrap();
        assert_eq!(todo.title, "");
        assert_eq!(todo.description, "");
        assert!(!todo.is_completed);
    }
}

#[tokio::test]
async fn create_ignores_client_id() {
    let (client, _handle) = test_client().await;

    let res = client
        .create_todo_json(serde_json::json!({
            "id": 424242,
            "title": "mine",
            "description": "",
            "isCompleted": true,
        }))
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let todo = res.json::<Todo>().await.unwrap();
    assert_ne!(todo.id, TodoId::from(424242));
    assert!(todo.is_completed);

    let res = client.get_todo(TodoId::from(424242)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_and_get_todo() {
    let (client, _handle) = test_client().await;

    let res = client.create_todo("Buy milk", "").await;
    let created = res.json::<Todo>().await.unwrap();

    let res = client.get_todo(created.id).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Todo>().await.unwrap(), created);

    let res = client.get_all_todos().await;
    assert_eq!(res.status(), StatusCode::OK);
    let todos = res.json::<Vec<Todo>>().await.unwrap();
    assert!(todos.contains(&created));
}

#[tokio::test]
async fn list_empty_store() {
    let (client, _handle) = test_client().await;

    let res = client.get_all_todos().await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.json::<Vec<Todo>>().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_keeps_creation_order() {
    let todo_count = 15;
    let (client, _handle) = test_client().await;

    for i in 0..todo_count {
        let res = client.create_todo(&format!("todo{i}"), "").await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let todos = client
        .get_all_todos()
        .await
        .json::<Vec<Todo>>()
        .await
        .unwrap();
    assert_eq!(todos.len(), todo_count);

    let titles: Vec<String> = todos.into_iter().map(|t| t.title).collect();
    let expected: Vec<String> = (0..todo_count).map(|i| format!("todo{i}")).collect();
    assert_eq!(titles, expected);
}

#[tokio::test]
async fn get_missing_todo() {
    let (client, _handle) = test_client().await;

    let res = client.get_todo(TodoId::from(99999)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!(body.error, "not_found");
}

#[tokio::test]
async fn get_with_non_numeric_id_is_rejected() {
    let (client, _handle) = test_client().await;

    let res = client.get_todo_raw("abc").await;
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn update_todo_replaces_all_fields() {
    let (client, _handle) = test_client().await;

    let created = client
        .create_todo("old title", "old description")
        .await
        .json::<Todo>()
        .await
        .unwrap();

    let res = client.update_todo(created.id, "A", "B", true).await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = res.json::<Todo>().await.unwrap();
    assert_eq!(updated.id, created.id);

    let todo = client
        .get_todo(created.id)
        .await
        .json::<Todo>()
        .await
        .unwrap();
    assert_eq!(todo.title, "A");
    assert_eq!(todo.description, "B");
    assert!(todo.is_completed);
}

#[tokio::test]
async fn update_accepts_completed_alias() {
    let (client, _handle) = test_client().await;

    let created = client
        .create_todo("t", "d")
        .await
        .json::<Todo>()
        .await
        .unwrap();

    let res = client
        .update_todo_json(
            created.id,
            serde_json::json!({"title": "t", "description": "d", "completed": true}),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.json::<Todo>().await.unwrap().is_completed);
}

#[tokio::test]
async fn update_missing_todo_does_not_create() {
    let (client, _handle) = test_client().await;

    let res = client.update_todo(TodoId::from(99999), "A", "B", true).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.get_todo(TodoId::from(99999)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let todos = client
        .get_all_todos()
        .await
        .json::<Vec<Todo>>()
        .await
        .unwrap();
    assert!(todos.is_empty());
}

#[tokio::test]
async fn update_with_partial_body_is_rejected() {
    let (client, _handle) = test_client().await;

    let created = client
        .create_todo("t", "d")
        .await
        .json::<Todo>()
        .await
        .unwrap();

    let res = client
        .update_todo_json(created.id, serde_json::json!({"title": "only title"}))
        .await;
    assert!(res.status().is_client_error());

    let todo = client
        .get_todo(created.id)
        .await
        .json::<Todo>()
        .await
        .unwrap();
    assert_eq!(todo, created);
}

#[tokio::test]
async fn delete_todo() {
    let (client, _handle) = test_client().await;

    let created = client
        .create_todo("t", "d")
        .await
        .json::<Todo>()
        .await
        .unwrap();

    let res = client.delete_todo(created.id).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());

    let res = client.get_todo(created.id).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (client, _handle) = test_client().await;

    let created = client
        .create_todo("t", "d")
        .await
        .json::<Todo>()
        .await
        .unwrap();

    let res = client.delete_todo(created.id).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.delete_todo(created.id).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.delete_todo(TodoId::from(99999)).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn health_is_ok() {
    let (client, _handle) = test_client().await;

    let res = client.health().await;
    assert_eq!(res.status(), StatusCode::OK);
}
