//! # ユースケース層
//!
//! Todo Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリとトランザクション管理を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入出力の変換のみ行い、NotFound の判定はユースケースに集約

pub mod todo;

pub use todo::TodoUseCaseImpl;
