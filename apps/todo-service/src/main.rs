//! # Todo Service サーバー
//!
//! Todo リストの CRUD API を提供する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TODO_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TODO_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `DATABASE_MAX_CONNECTIONS` | No | 最大接続数（デフォルト: `10`） |
//! | `CORS_ALLOWED_ORIGINS` | No | カンマ区切りの許可オリジン（デフォルト: `*`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/todo cargo run -p todo-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use todo_infra::{
    db::{self, PgTransactionManager},
    repository::PostgresTodoRepository,
};
use todo_service::{
    app_builder::{build_app, cors_layer},
    config::TodoConfig,
    handler::{ReadinessState, TodoState},
    usecase::TodoUseCaseImpl,
};
use todo_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("todo-service");
    init_tracing(&tracing_config);

    let config = TodoConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        service = %tracing_config.service_name,
        "Todo Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let pool = db::create_pool(&config.database_url, config.database_max_connections)
        .await
        .context("データベース接続に失敗しました")?;
    db::ensure_schema(&pool)
        .await
        .context("スキーマの作成に失敗しました")?;
    tracing::info!("データベースに接続しました");

    // 依存コンポーネントを初期化
    let usecase = TodoUseCaseImpl::new(
        Arc::new(PostgresTodoRepository::new(pool.clone())),
        Arc::new(PgTransactionManager::new(pool.clone())),
    );
    let todo_state = Arc::new(TodoState { usecase });
    let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });

    let app = build_app(
        todo_state,
        readiness_state,
        cors_layer(&config.cors_allowed_origins),
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Todo Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Todo Service サーバーを停止しました");

    Ok(())
}

/// Ctrl-C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Ctrl-C を受信しました。シャットダウンします"),
        () = terminate => tracing::info!("SIGTERM を受信しました。シャットダウンします"),
    }
}
