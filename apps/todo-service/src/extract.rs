//! # リクエスト抽出
//!
//! axum 標準の `Json` / `Path` の拒否理由を [`TodoError::Validation`] に変換する。
//! 構文エラー、必須フィールド欠落、型不一致、整数でないパス ID のいずれも
//! 400 の Problem Details として返す。
//!
//! JSON ボディはオブジェクトのみ受け付ける。serde の構造体デシリアライズは
//! 配列を位置指定のフィールド列としても受け付けるため、先に形を検査する。

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::TodoError;

/// JSON オブジェクトのボディ抽出（拒否時は 400）
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = TodoError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| TodoError::Validation(rejection.body_text()))?;
        if !value.is_object() {
            return Err(TodoError::Validation(
                "リクエストボディは JSON オブジェクトである必要があります".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map(Self)
            .map_err(|e| TodoError::Validation(format!("リクエストボディが不正です: {e}")))
    }
}

/// パスパラメータ抽出（拒否時は 400）
#[derive(Debug)]
pub struct ValidatedPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = TodoError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| TodoError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}
