//! # リポジトリ実装
//!
//! ドメインエンティティの永続化を担当するリポジトリを提供する。
//!
//! ## 設計方針
//!
//! - **トレイト経由の注入**: ユースケースは `Arc<dyn TodoRepository>` に依存し、
//!   PostgreSQL 実装とインメモリ実装を差し替えられる
//! - **書き込みは TxContext 必須**: 書き込みメソッドは `&mut TxContext` を要求する

pub mod todo_repository;

pub use todo_repository::{PostgresTodoRepository, TodoRepository};
