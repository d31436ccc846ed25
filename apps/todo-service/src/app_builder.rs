//! # アプリケーション構築
//!
//! ルーターとミドルウェアの組み立てを担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use todo_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::AllowedOrigins,
    handler::{
        ReadinessState,
        TodoState,
        create_todo,
        delete_todo,
        get_todo,
        health_check,
        list_todos,
        readiness_check,
        update_todo,
    },
};

/// CORS レイヤーを構築する
///
/// [`AllowedOrigins::Any`] の場合はクレデンシャルを許可しない。
pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    match origins {
        AllowedOrigins::Any => {
            tracing::warn!(
                "CORS: 全オリジンを許可しています。公開環境では CORS_ALLOWED_ORIGINS を設定してください"
            );
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        AllowedOrigins::List(list) => CorsLayer::new()
            .allow_origin(list.clone())
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]),
    }
}

/// ルーターを構築する
pub fn build_app(
    todo_state: Arc<TodoState>,
    readiness_state: Arc<ReadinessState>,
    cors: CorsLayer,
) -> Router {
    let todo_routes = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(todo_state);

    let health_routes = Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .with_state(readiness_state);

    Router::new()
        .merge(health_routes)
        .merge(todo_routes)
        .layer(cors)
        // 下に書いたものが外側:
        // SetRequestIdLayer → TraceLayer → PropagateRequestIdLayer
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
