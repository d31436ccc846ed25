//! Todo ユースケース
//!
//! 各操作は単一のデータストア操作に対応する。書き込みは
//! [`TxContext`](todo_infra::db::TxContext) の中で行い、成功時のみコミットする。
//! `?` による早期リターンではコンテキストがドロップされ、ロールバックされる。

use std::sync::Arc;

use todo_domain::todo::{NewTodo, Todo, TodoId, TodoPatch};
use todo_infra::{db::TransactionManager, repository::TodoRepository};

use crate::error::TodoError;

/// Todo ユースケース
pub struct TodoUseCaseImpl {
    todo_repository: Arc<dyn TodoRepository>,
    tx_manager:      Arc<dyn TransactionManager>,
}

impl TodoUseCaseImpl {
    pub fn new(
        todo_repository: Arc<dyn TodoRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            todo_repository,
            tx_manager,
        }
    }

    /// Todo を作成する
    ///
    /// `id` はデータストアが採番する。
    #[tracing::instrument(skip_all)]
    pub async fn create_todo(&self, new_todo: NewTodo) -> Result<Todo, TodoError> {
        let mut tx = self.tx_manager.begin().await?;
        let todo = self.todo_repository.insert(&mut tx, &new_todo).await?;
        tx.commit().await?;

        tracing::debug!(id = %todo.id(), "Todo を作成しました");
        Ok(todo)
    }

    /// Todo を全件取得する
    #[tracing::instrument(skip_all)]
    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.todo_repository.find_all().await?)
    }

    /// ID で Todo を取得する
    #[tracing::instrument(skip_all, fields(%id))]
    pub async fn get_todo(&self, id: TodoId) -> Result<Todo, TodoError> {
        self.todo_repository
            .find_by_id(&id)
            .await?
            .ok_or(TodoError::NotFound)
    }

    /// Todo を部分更新する
    ///
    /// 1. パッチに `null` が含まれないことを検証（データストアには触れない）
    /// 2. トランザクション内で対象行をロックして取得
    /// 3. 指定されたフィールドのみマージして書き戻す（キーが 1 つもなければ書き込まない）
    #[tracing::instrument(skip_all, fields(%id))]
    pub async fn update_todo(&self, id: TodoId, patch: TodoPatch) -> Result<Todo, TodoError> {
        patch.validate()?;

        let mut tx = self.tx_manager.begin().await?;
        let current = self
            .todo_repository
            .find_by_id_for_update(&mut tx, &id)
            .await?
            .ok_or(TodoError::NotFound)?;

        if patch.is_empty() {
            tracing::debug!("更新対象のフィールドがないため書き込みを省略します");
            return Ok(current);
        }

        let updated = current.apply(patch)?;
        if !self.todo_repository.update(&mut tx, &updated).await? {
            return Err(TodoError::NotFound);
        }
        tx.commit().await?;

        Ok(updated)
    }

    /// Todo を削除する
    ///
    /// 対象行が無い場合は何もコミットせずに NotFound を返す。
    #[tracing::instrument(skip_all, fields(%id))]
    pub async fn delete_todo(&self, id: TodoId) -> Result<(), TodoError> {
        let mut tx = self.tx_manager.begin().await?;
        if !self.todo_repository.delete(&mut tx, &id).await? {
            return Err(TodoError::NotFound);
        }
        tx.commit().await?;

        tracing::debug!("Todo を削除しました");
        Ok(())
    }
}
