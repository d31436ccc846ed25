//! # ドメイン層エラー定義
//!
//! 入力値のルール違反を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//!
//! エンティティが存在しない場合はリポジトリが `None` を返し、
//! サービス層で 404 に変換する。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// # 例
    ///
    /// - 部分更新で NOT NULL のフィールドに `null` が指定された
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
