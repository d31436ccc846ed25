//! # Todo ドメイン層
//!
//! Todo リストのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つ [`todo::Todo`]
//! - **入力シェイプ**: 作成用の [`todo::NewTodo`] と部分更新用の [`todo::TodoPatch`]
//! - **ドメインエラー**: 入力値のルール違反を表現する [`DomainError`]
//!
//! ## 依存関係の方向
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`patch`] - 「キーなし」と「null」を区別する部分更新フィールド
//! - [`todo`] - Todo エンティティと入力シェイプ
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::todo::{Todo, TodoId, TodoPatch};
//! use todo_domain::patch::Patch;
//!
//! let todo = Todo::from_db(TodoId::from_i64(1), "A".to_string(), "B".to_string(), false);
//! let patch = TodoPatch {
//!     is_completed: Patch::Value(true),
//!     ..TodoPatch::default()
//! };
//!
//! let updated = todo.apply(patch).unwrap();
//! assert_eq!(updated.title(), "A");
//! assert!(updated.is_completed());
//! ```

pub mod error;
pub mod patch;
pub mod todo;

pub use error::DomainError;
