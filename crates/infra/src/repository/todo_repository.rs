//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 操作 1 文**: 各メソッドは単一の SQL 文を実行する
//! - **採番はデータストア**: `id` は `BIGSERIAL` が採番し、`RETURNING` で受け取る
//! - **存在確認は戻り値で**: 更新・削除は影響行数が 0 のとき `false` を返し、
//!   NotFound への変換はユースケース層が行う

use async_trait::async_trait;
use sqlx::PgPool;
use todo_domain::todo::{NewTodo, Todo, TodoId};

use crate::{db::TxContext, error::InfraError};

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Todo を挿入し、採番された `id` を含む Todo を返す
    async fn insert(&self, tx: &mut TxContext, new_todo: &NewTodo) -> Result<Todo, InfraError>;

    /// 全件を取得する（フィルタなし、`id` 順）
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError>;

    /// トランザクション内で ID により Todo を検索し、行ロックを取得する
    ///
    /// 部分更新の「読み取り → マージ → 書き込み」を同一トランザクションで行うために使う。
    async fn find_by_id_for_update(
        &self,
        tx: &mut TxContext,
        id: &TodoId,
    ) -> Result<Option<Todo>, InfraError>;

    /// Todo の全フィールドを上書きする
    ///
    /// 対象行が存在しない場合は `false` を返す。
    async fn update(&self, tx: &mut TxContext, todo: &Todo) -> Result<bool, InfraError>;

    /// Todo を削除する
    ///
    /// 対象行が存在しない場合は `false` を返す。
    async fn delete(&self, tx: &mut TxContext, id: &TodoId) -> Result<bool, InfraError>;
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `todos` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:           i64,
    title:        String,
    description:  String,
    is_completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo::from_db(
            TodoId::from_i64(row.id),
            row.title,
            row.description,
            row.is_completed,
        )
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, tx: &mut TxContext, new_todo: &NewTodo) -> Result<Todo, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (title, description, is_completed)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, is_completed
            "#,
        )
        .bind(&new_todo.title)
        .bind(&new_todo.description)
        .bind(new_todo.is_completed)
        .fetch_one(tx.conn())
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, is_completed
            FROM todos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, is_completed
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Todo::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id_for_update(
        &self,
        tx: &mut TxContext,
        id: &TodoId,
    ) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, is_completed
            FROM todos
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(tx.conn())
        .await?;

        Ok(row.map(Todo::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %todo.id()))]
    async fn update(&self, tx: &mut TxContext, todo: &Todo) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET title = $2, description = $3, is_completed = $4
            WHERE id = $1
            "#,
        )
        .bind(todo.id().as_i64())
        .bind(todo.title())
        .bind(todo.description())
        .bind(todo.is_completed())
        .execute(tx.conn())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, tx: &mut TxContext, id: &TodoId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(tx.conn())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
