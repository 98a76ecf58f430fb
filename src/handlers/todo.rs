use super::error::AppError;
use super::types::*;
use crate::{
    handlers::Service,
    storage::{Todo, TodoId},
    utils::RootSpan,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use tracing::info;

#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "List all todos", body = [Todo]),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::get_all", skip_all)]
pub(crate) async fn get_all(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let items = service.todo().find_all().await?;

    root_span.record().todo_count(items.len());
    info!("Get {} ToDos", items.len());

    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(
        ("id" = u64, Path, description = "ToDo ID")
    ),
    responses(
        (status = 200, description = "Get ToDo by ID", body = Todo),
        (status = 404, description = "ToDo not found", body = AppError),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::get", skip_all)]
pub(crate) async fn get(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, AppError> {
    root_span.record().todo_id(&id);

    let todo = service.todo().get(id).await?;

    tracing::info!(todo = ?todo, "Get ToDo");

    Ok(Json(todo))
}

#[utoipa::path(
    post,
    path = "/todos",
    request_body(
        content = CreateTodo,
        description = "New ToDo item, any id is ignored",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "ToDo created", body = Todo),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::post", skip_all)]
pub(crate) async fn add(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    Json(input): Json<CreateTodo>,
) -> Result<impl IntoResponse, AppError> {
    match service.todo().create(input.into()).await {
        Ok(todo) => {
            root_span.record().todo_id(&todo.id);
            Ok((StatusCode::CREATED, Json(todo)))
        }
        Err(e) => {
            tracing::error!(err = ?e, "failed to add new ToDo");
            Err(e)
        }
    }
}

#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(
        ("id" = u64, Path, description = "ToDo ID")
    ),
    request_body(
        content = UpdateTodo,
        description = "Full replacement of title, description and completion flag",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "ToDo updated", body = Todo),
        (status = 404, description = "ToDo not found", body = AppError),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::update", skip_all)]
pub(crate) async fn update(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    Path(id): Path<TodoId>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, AppError> {
    root_span.record().todo_id(&id);

    let todo = service.todo().update(id, input.into()).await?;

    Ok(Json(todo))
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(
        ("id" = u64, Path, description = "ToDo ID")
    ),
    responses(
        (status = 204, description = "ToDo deleted, or there was nothing to delete"),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::delete", skip_all)]
pub(crate) async fn delete(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, AppError> {
    root_span.record().todo_id(&id);

    service.todo().delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
