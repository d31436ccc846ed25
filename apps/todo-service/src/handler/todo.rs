//! # Todo ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /todos/` - Todo 作成
//! - `GET /todos/` - Todo 一覧
//! - `GET /todos/{id}` - Todo 取得
//! - `PATCH /todos/{id}` - Todo 部分更新
//! - `DELETE /todos/{id}` - Todo 削除
//!
//! `/todos` と `/todos/` はどちらも同じハンドラに対応する。

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use todo_domain::{
    patch::Patch,
    todo::{NewTodo, Todo, TodoId, TodoPatch},
};

use crate::{
    error::TodoError,
    extract::{ValidatedJson, ValidatedPath},
    usecase::TodoUseCaseImpl,
};

/// Todo API の共有状態
pub struct TodoState {
    pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title:        String,
    pub description:  String,
    #[serde(default)]
    pub is_completed: bool,
}

impl From<CreateTodoRequest> for NewTodo {
    fn from(req: CreateTodoRequest) -> Self {
        Self {
            title:        req.title,
            description:  req.description,
            is_completed: req.is_completed,
        }
    }
}

/// Todo 更新リクエスト
///
/// キーが無いフィールドは [`Patch::Missing`]、`null` は [`Patch::Null`] になる。
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title:        Patch<String>,
    #[serde(default)]
    pub description:  Patch<String>,
    #[serde(default)]
    pub is_completed: Patch<bool>,
}

impl From<UpdateTodoRequest> for TodoPatch {
    fn from(req: UpdateTodoRequest) -> Self {
        Self {
            title:        req.title,
            description:  req.description,
            is_completed: req.is_completed,
        }
    }
}

/// Todo DTO
#[derive(Debug, Serialize)]
pub struct TodoDto {
    pub id:           TodoId,
    pub title:        String,
    pub description:  String,
    pub is_completed: bool,
}

impl From<Todo> for TodoDto {
    fn from(todo: Todo) -> Self {
        Self {
            id:           todo.id(),
            title:        todo.title().to_string(),
            description:  todo.description().to_string(),
            is_completed: todo.is_completed(),
        }
    }
}

/// 削除成功レスポンス
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

// --- ハンドラ ---

/// POST /todos/
///
/// ## レスポンス
///
/// - `201 Created`: 作成された Todo（採番された `id` を含む）
/// - `400 Bad Request`: `title` / `description` の欠落、型不一致
#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    ValidatedJson(req): ValidatedJson<CreateTodoRequest>,
) -> Result<impl IntoResponse, TodoError> {
    let todo = state.usecase.create_todo(req.into()).await?;

    Ok((StatusCode::CREATED, Json(TodoDto::from(todo))))
}

/// GET /todos/
///
/// 全件を返す。0 件の場合は空配列。
#[tracing::instrument(skip_all)]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, TodoError> {
    let todos = state.usecase.list_todos().await?;

    let items: Vec<TodoDto> = todos.into_iter().map(TodoDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// GET /todos/{id}
#[tracing::instrument(skip_all, fields(id))]
pub async fn get_todo(
    State(state): State<Arc<TodoState>>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, TodoError> {
    tracing::Span::current().record("id", id);
    let todo = state.usecase.get_todo(TodoId::from_i64(id)).await?;

    Ok((StatusCode::OK, Json(TodoDto::from(todo))))
}

/// PATCH /todos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の Todo
/// - `400 Bad Request`: 型不一致、`null` の指定
/// - `404 Not Found`: Todo が存在しない
#[tracing::instrument(skip_all, fields(id))]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(req): ValidatedJson<UpdateTodoRequest>,
) -> Result<impl IntoResponse, TodoError> {
    tracing::Span::current().record("id", id);
    let todo = state
        .usecase
        .update_todo(TodoId::from_i64(id), req.into())
        .await?;

    Ok((StatusCode::OK, Json(TodoDto::from(todo))))
}

/// DELETE /todos/{id}
///
/// 成功時は `{"ok": true}` を返す。
#[tracing::instrument(skip_all, fields(id))]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, TodoError> {
    tracing::Span::current().record("id", id);
    state.usecase.delete_todo(TodoId::from_i64(id)).await?;

    Ok((StatusCode::OK, Json(DeleteResponse { ok: true })))
}
