//! # Todo Service ライブラリ
//!
//! Todo Service のルーター、ハンドラ、ユースケースを公開する。
//! バイナリ（`main.rs`）と HTTP テストの両方から利用する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod usecase;
