// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// データ移行ロジック（マイグレーション以外からも呼び出せるように公開）
pub mod billing_type_mapping;

// 基本テーブル
mod m20170801_000001_create_users_table;
mod m20170801_000002_create_projects_table;
mod m20170801_000003_create_attendances_table;

// 旧サブスクリプション関連
mod m20170808_000001_create_subscription_tables;

// 請求タイプへの移行
mod m20170907_000001_create_billing_types_table;
mod m20170907_000002_add_billing_type_to_packages;
mod m20170907_000003_migrate_packages_to_billing_types;
mod m20170907_000004_drop_subscriptions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成
            Box::new(m20170801_000001_create_users_table::Migration),
            Box::new(m20170801_000002_create_projects_table::Migration),
            // 2. 依存テーブル作成（usersテーブルに依存）
            Box::new(m20170801_000003_create_attendances_table::Migration),
            // 3. 旧サブスクリプション（projectsテーブルに依存）
            Box::new(m20170808_000001_create_subscription_tables::Migration),
            // 4. 請求タイプ導入
            Box::new(m20170907_000001_create_billing_types_table::Migration),
            // 5. パッケージの付け替え（順序を変えないこと）
            //    列追加 → データ移行 → 旧サブスクリプション削除
            Box::new(m20170907_000002_add_billing_type_to_packages::Migration),
            Box::new(m20170907_000003_migrate_packages_to_billing_types::Migration),
            Box::new(m20170907_000004_drop_subscriptions::Migration),
        ]
    }
}
