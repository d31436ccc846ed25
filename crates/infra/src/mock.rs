//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todo_domain::todo::{NewTodo, Todo, TodoId};

use crate::{
    db::{TransactionManager, TxContext},
    error::InfraError,
    repository::TodoRepository,
};

// ===== MockTodoRepository =====

#[derive(Default)]
struct MockState {
    todos:   Vec<Todo>,
    last_id: i64,
}

/// インメモリの TodoRepository
///
/// `id` は 1 から順に採番する。`unavailable()` で作成すると
/// すべての操作がデータベースエラー相当の [`InfraError`] を返す。
#[derive(Clone, Default)]
pub struct MockTodoRepository {
    state:       Arc<Mutex<MockState>>,
    unavailable: bool,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に失敗するリポジトリ（データストア障害の再現用）
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// 保存済みの Todo をすべて返す（検証用）
    pub fn todos(&self) -> Vec<Todo> {
        self.state.lock().unwrap().todos.clone()
    }

    fn check_available(&self) -> Result<(), InfraError> {
        if self.unavailable {
            return Err(InfraError::from(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn insert(&self, _tx: &mut TxContext, new_todo: &NewTodo) -> Result<Todo, InfraError> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        state.last_id += 1;
        let todo = Todo::from_db(
            TodoId::from_i64(state.last_id),
            new_todo.title.clone(),
            new_todo.description.clone(),
            new_todo.is_completed,
        );
        state.todos.push(todo.clone());
        Ok(todo)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        self.check_available()?;
        Ok(self.todos())
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        self.check_available()?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .todos
            .iter()
            .find(|t| t.id() == *id)
            .cloned())
    }

    async fn find_by_id_for_update(
        &self,
        _tx: &mut TxContext,
        id: &TodoId,
    ) -> Result<Option<Todo>, InfraError> {
        self.find_by_id(id).await
    }

    async fn update(&self, _tx: &mut TxContext, todo: &Todo) -> Result<bool, InfraError> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        match state.todos.iter_mut().find(|t| t.id() == todo.id()) {
            Some(existing) => {
                *existing = todo.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, _tx: &mut TxContext, id: &TodoId) -> Result<bool, InfraError> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        let before = state.todos.len();
        state.todos.retain(|t| t.id() != *id);
        Ok(state.todos.len() < before)
    }
}

// ===== MockTransactionManager =====

/// [`TxContext::mock()`] を返す TransactionManager
#[derive(Clone, Default)]
pub struct MockTransactionManager;

#[async_trait]
impl TransactionManager for MockTransactionManager {
    async fn begin(&self) -> Result<TxContext, InfraError> {
        Ok(TxContext::mock())
    }
}
