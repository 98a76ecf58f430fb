#![allow(dead_code)]
use reqwest::{Method, Url};
use serde_json::Value;
use todo_service::TodoId;

pub struct TestAppClient {
    url: Url,
    client: reqwest::Client,
}

impl TestAppClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    fn todo_url(&self, id: impl std::fmt::Display) -> Url {
        self.url.join(&format!("todos/{id}")).unwrap()
    }

    pub async fn health(&self) -> reqwest::Response {
        self.client
            .get(self.url.join("health").unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo_json(&self, body: Value) -> reqwest::Response {
        self.client
            .post(self.url.join("todos").unwrap())
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo(&self, title: &str, description: &str) -> reqwest::Response {
        self.create_todo_json(serde_json::json!({
            "title": title,
            "description": description,
        }))
        .await
    }

    pub async fn get_todo(&self, id: TodoId) -> reqwest::Response {
        self.client.get(self.todo_url(id)).send().await.unwrap()
    }

    pub async fn get_todo_raw(&self, id: &str) -> reqwest::Response {
        self.client.get(self.todo_url(id)).send().await.unwrap()
    }

    pub async fn get_all_todos(&self) -> reqwest::Response {
        self.client
            .get(self.url.join("todos").unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn update_todo_json(&self, id: TodoId, body: Value) -> reqwest::Response {
        self.client
            .put(self.todo_url(id))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn update_todo(
        &self,
        id: TodoId,
        title: &str,
        description: &str,
        is_completed: bool,
    ) -> reqwest::Response {
        self.update_todo_json(
            id,
            serde_json::json!({
                "title": title,
                "description": description,
                "isCompleted": is_completed,
            }),
        )
        .await
    }

    pub async fn delete_todo(&self, id: TodoId) -> reqwest::Response {
        self.client.delete(self.todo_url(id)).send().await.unwrap()
    }

    pub async fn preflight(&self, path: &str, origin: &str, method: &str) -> reqwest::Response {
        self.client
            .request(Method::OPTIONS, self.url.join(path).unwrap())
            .header("Origin", origin)
            .header("Access-Control-Request-Method", method)
            .send()
            .await
            .unwrap()
    }

    pub async fn get_with_origin(&self, path: &str, origin: &str) -> reqwest::Response {
        self.client
            .get(self.url.join(path).unwrap())
            .header("Origin", origin)
            .send()
            .await
            .unwrap()
    }
}
