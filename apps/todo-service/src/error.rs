//! # Todo Service エラー定義
//!
//! Todo Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | バリアント | ステータス | `detail` |
//! |-----------|-----------|----------|
//! | [`TodoError::Validation`] | 400 | 検証メッセージ |
//! | [`TodoError::NotFound`] | 404 | `"Todo not found"` |
//! | [`TodoError::Store`] | 500 | 固定メッセージ（内部情報は返さない） |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_domain::DomainError;
use todo_infra::InfraError;
use todo_shared::ErrorResponse;

/// Todo が存在しない場合の `detail`
pub const TODO_NOT_FOUND: &str = "Todo not found";

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum TodoError {
    /// 入力の形式・型が不正
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 指定 ID の Todo が存在しない
    #[error("Todo が見つかりません")]
    NotFound,

    /// データストアの障害
    #[error("データストアエラー: {0}")]
    Store(#[from] InfraError),
}

impl From<DomainError> for TodoError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let body = match &self {
            TodoError::Validation(msg) => ErrorResponse::validation_error(msg.clone()),
            TodoError::NotFound => ErrorResponse::not_found(TODO_NOT_FOUND),
            TodoError::Store(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "データストアエラー"
                );
                ErrorResponse::internal_error()
            }
        };

        let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
