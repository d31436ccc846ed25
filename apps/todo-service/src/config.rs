//! # Todo Service 設定
//!
//! 環境変数から Todo Service サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | デフォルト |
//! |--------|------|-----------|
//! | `TODO_HOST` | No | `0.0.0.0` |
//! | `TODO_PORT` | No | `8000` |
//! | `DATABASE_URL` | **Yes** | - |
//! | `DATABASE_MAX_CONNECTIONS` | No | `10` |
//! | `CORS_ALLOWED_ORIGINS` | No | `*`（全オリジン許可） |

use std::env;

use axum::http::HeaderValue;
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値の形式が不正
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// CORS で許可するオリジン
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// 全オリジン許可（`*`）
    Any,
    /// 列挙されたオリジンのみ許可
    List(Vec<HeaderValue>),
}

impl AllowedOrigins {
    /// カンマ区切りの文字列をパースする
    ///
    /// 空文字列または `*` は [`AllowedOrigins::Any`] になる。
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return Ok(Self::Any);
        }

        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    name:  "CORS_ALLOWED_ORIGINS",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::List)
    }
}

/// Todo Service サーバーの設定
#[derive(Debug, Clone)]
pub struct TodoConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// データベース接続 URL
    pub database_url: String,
    /// 接続プールの最大接続数
    pub database_max_connections: u32,
    /// CORS 許可オリジン
    pub cors_allowed_origins: AllowedOrigins,
}

impl TodoConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// `lookup` は変数名を受け取り、値が無ければ `None` を返す。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("TODO_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("TODO_PORT", lookup("TODO_PORT"), 8000)?,
            database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                lookup("DATABASE_MAX_CONNECTIONS"),
                10,
            )?,
            cors_allowed_origins: match lookup("CORS_ALLOWED_ORIGINS") {
                Some(raw) => AllowedOrigins::parse(&raw)?,
                None => AllowedOrigins::Any,
            },
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
