//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するヘルパー。
//! Rust の統合テスト規約に従い `tests/common/mod.rs` に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use sqlx::PgPool;
use todo_domain::todo::TodoId;
use todo_infra::db::{self, PgTransactionManager, TransactionManager, TxContext};

/// `todos` テーブルを作成する
pub async fn setup_schema(pool: &PgPool) {
    db::ensure_schema(pool).await.expect("スキーマ作成に失敗");
}

/// トランザクションを開始する
pub async fn begin(pool: &PgPool) -> TxContext {
    PgTransactionManager::new(pool.clone())
        .begin()
        .await
        .expect("トランザクション開始に失敗")
}

/// リポジトリを経由せずに Todo を直接 SQL で挿入する
pub async fn insert_todo_raw(
    pool: &PgPool,
    title: &str,
    description: &str,
    is_completed: bool,
) -> TodoId {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO todos (title, description, is_completed)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(is_completed)
    .fetch_one(pool)
    .await
    .expect("Todo 挿入に失敗");
    TodoId::from_i64(id)
}

/// `todos` テーブルの行数を数える
pub async fn count_todos(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos")
        .fetch_one(pool)
        .await
        .expect("件数取得に失敗");
    count
}
