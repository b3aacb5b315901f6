// migration/src/main.rs

use migration::Migrator;
use sea_orm_migration::prelude::*;

// sea-orm-migration のCLIを async-std ランタイムで実行
#[async_std::main]
async fn main() {
    // up / down / status / fresh / refresh / reset
    cli::run_cli(Migrator).await;
}
