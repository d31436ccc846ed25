//! # Todo インフラ層
//!
//! 外部システム（PostgreSQL）との接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とスキーマ作成
//! - **トランザクション**: 書き込み操作のスコープ付きトランザクション（[`db::TxContext`]）
//! - **リポジトリ実装**: [`repository::TodoRepository`] の PostgreSQL 実装
//!
//! ## 依存関係
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todo_infra::{db, repository::PostgresTodoRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/todo", 10).await?;
//!     db::ensure_schema(&pool).await?;
//!
//!     let repository = PostgresTodoRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
