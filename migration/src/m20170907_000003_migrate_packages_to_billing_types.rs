use crate::billing_type_mapping::migrate_packages;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // PostgreSQL ではランナーが各マイグレーションをトランザクション内で実行する
        migrate_packages(manager.get_connection()).await
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // 削除したパッケージは復元できない
        Ok(())
    }
}
