//! # 部分更新フィールド
//!
//! JSON の部分更新では「キーが存在しない」と「キーが `null`」を区別する必要がある。
//! `Option<Option<T>>` は serde が `null` を外側の `None` に畳み込むため区別できない。
//! [`Patch`] は 3 状態を明示的に表現する。
//!
//! ## 使い方
//!
//! フィールドに `#[serde(default)]` を付けると、キーが無い場合は
//! [`Patch::Missing`] になり、`null` の場合は [`Patch::Null`] になる。
//!
//! ```rust
//! use serde::Deserialize;
//! use todo_domain::patch::Patch;
//!
//! #[derive(Deserialize)]
//! struct Body {
//!     #[serde(default)]
//!     title: Patch<String>,
//! }
//!
//! let body: Body = serde_json::from_str("{}").unwrap();
//! assert_eq!(body.title, Patch::Missing);
//!
//! let body: Body = serde_json::from_str(r#"{"title": null}"#).unwrap();
//! assert_eq!(body.title, Patch::Null);
//! ```

use serde::{Deserialize, Deserializer};

/// 部分更新の 1 フィールド
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// キーが存在しない（既存値を維持する）
    #[default]
    Missing,
    /// キーが `null` で指定された
    Null,
    /// 値が指定された
    Value(T),
}

impl<T> Patch<T> {
    /// キーが存在したか
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// 値が指定されていれば `Some` を返す（`Missing` / `Null` は `None`）
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Missing | Self::Null => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }
}

// キーが存在する場合にのみ呼ばれる。欠落は `#[serde(default)]` が Missing にする。
impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        flag: Patch<bool>,
    }

    #[test]
    fn test_キーが無い場合はmissingになる() {
        let body: Body = serde_json::from_str("{}").unwrap();

        assert_eq!(body.flag, Patch::Missing);
        assert!(!body.flag.is_present());
    }

    #[test]
    fn test_デフォルトはmissing() {
        assert_eq!(Patch::<String>::default(), Patch::Missing);
        assert_eq!(Patch::<bool>::default(), Patch::Missing);
    }

    #[test]
    fn test_nullの場合はnullになる() {
        let body: Body = serde_json::from_str(r#"{"flag": null}"#).unwrap();

        assert_eq!(body.flag, Patch::Null);
        assert!(body.flag.is_present());
    }

    #[test]
    fn test_値がある場合はvalueになる() {
        let body: Body = serde_json::from_str(r#"{"flag": true}"#).unwrap();

        assert_eq!(body.flag, Patch::Value(true));
        assert_eq!(body.flag.into_value(), Some(true));
    }

    #[test]
    fn test_型が違う場合はデシリアライズに失敗する() {
        let result = serde_json::from_str::<Body>(r#"{"flag": "yes"}"#);

        assert!(result.is_err());
    }
}
