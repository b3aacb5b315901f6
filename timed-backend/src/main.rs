// src/main.rs
use migration::{Migrator, MigratorTrait};
use timed_backend::config::Config;
use timed_backend::db;
use timed_backend::logging::{init_tracing, DEFAULT_LOG_FILTER};
use timed_backend::service::billing_service::BillingService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    init_tracing(DEFAULT_LOG_FILTER);

    tracing::info!("Starting Timed backend...");

    // 設定を読み込む
    let app_config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        schema = ?app_config.db_schema,
        max_connections = app_config.max_connections,
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = db::connect(&app_config).await?;
    tracing::info!("Database pool created successfully.");

    // 未適用のマイグレーションを適用（失敗した時点で停止する）
    let pending = Migrator::get_pending_migrations(&db_pool).await?;
    if pending.is_empty() {
        tracing::info!("Database schema is up to date.");
    } else {
        tracing::info!("Applying {} pending migration(s)...", pending.len());
        if let Err(e) = Migrator::up(&db_pool, None).await {
            tracing::error!(error = %e, "Migration failed, halting");
            return Err(e.into());
        }
        tracing::info!("Migrations applied.");
    }

    // 請求タイプごとの集計を出力
    let billing_service = BillingService::new(db_pool.clone());
    for entry in billing_service.billing_summary().await? {
        tracing::info!(
            billing_type = %entry.name,
            packages = entry.package_count,
            projects = entry.project_count,
            "Billing type"
        );
    }

    db_pool.close().await?;
    Ok(())
}
