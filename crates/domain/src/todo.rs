//! # Todo
//!
//! Todo リストの唯一のエンティティと、その入力シェイプを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`Todo`] | Todo | 保存済みの 1 行。`id` はデータストアが採番する |
//! | [`NewTodo`] | 作成シェイプ | `title` と `description` が必須、`is_completed` は省略時 `false` |
//! | [`TodoPatch`] | 更新シェイプ | 全フィールド任意。指定されたキーのみ上書きする |
//!
//! ## 不変条件
//!
//! - `id` は作成後に変化しない
//! - `title` と `description` は常に存在する（部分更新で `null` にできない）

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{DomainError, patch::Patch};

/// Todo ID（データストアが採番する正の整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// 既存の整数値から ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Todo エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:           TodoId,
    title:        String,
    description:  String,
    is_completed: bool,
}

/// Todo 作成の入力
///
/// データストアへの挿入時に `id` が採番され、[`Todo`] になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title:        String,
    pub description:  String,
    pub is_completed: bool,
}

impl NewTodo {
    /// `is_completed = false` の作成入力を組み立てる
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title:        title.into(),
            description:  description.into(),
            is_completed: false,
        }
    }
}

/// Todo 部分更新の入力
///
/// [`Patch::Missing`] のフィールドは既存値を維持する。
/// 保存済みのフィールドはすべて NOT NULL のため、[`Patch::Null`] は
/// [`TodoPatch::validate`] で拒否される。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title:        Patch<String>,
    pub description:  Patch<String>,
    pub is_completed: Patch<bool>,
}

impl TodoPatch {
    /// `null` が指定されたフィールドがないことを検証する
    pub fn validate(&self) -> Result<(), DomainError> {
        let nulls: Vec<&str> = [
            ("title", matches!(self.title, Patch::Null)),
            ("description", matches!(self.description, Patch::Null)),
            ("is_completed", matches!(self.is_completed, Patch::Null)),
        ]
        .into_iter()
        .filter_map(|(name, is_null)| is_null.then_some(name))
        .collect();

        if nulls.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "{} に null は指定できません",
                nulls.join(", ")
            )))
        }
    }

    /// 更新対象のキーが 1 つもないか
    pub fn is_empty(&self) -> bool {
        !self.title.is_present() && !self.description.is_present() && !self.is_completed.is_present()
    }
}

impl Todo {
    /// 既存のデータから Todo を復元する（データベースから取得時）
    pub fn from_db(id: TodoId, title: String, description: String, is_completed: bool) -> Self {
        Self {
            id,
            title,
            description,
            is_completed,
        }
    }

    // Getter メソッド

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    // 不変更新メソッド

    /// タイトルを更新する
    pub fn with_title(self, title: String) -> Self {
        Self { title, ..self }
    }

    /// 説明を更新する
    pub fn with_description(self, description: String) -> Self {
        Self {
            description,
            ..self
        }
    }

    /// 完了フラグを更新する
    pub fn with_completed(self, is_completed: bool) -> Self {
        Self {
            is_completed,
            ..self
        }
    }

    /// 部分更新を適用する
    ///
    /// 指定されたキーのみ上書きし、キーが無いフィールドは維持する。
    /// `null` を含むパッチは何も変更せずにエラーを返す。
    pub fn apply(self, patch: TodoPatch) -> Result<Self, DomainError> {
        patch.validate()?;

        let todo = match patch.title.into_value() {
            Some(title) => self.with_title(title),
            None => self,
        };
        let todo = match patch.description.into_value() {
            Some(description) => todo.with_description(description),
            None => todo,
        };
        let todo = match patch.is_completed.into_value() {
            Some(is_completed) => todo.with_completed(is_completed),
            None => todo,
        };

        Ok(todo)
    }
}
