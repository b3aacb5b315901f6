use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 中間テーブルの外部キー列を削除（テーブル自体は後続のマイグレーションで削除）
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("fk_subscription_projects_project_id")
                    .table(SubscriptionProjects::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("fk_subscription_projects_subscription_id")
                    .table(SubscriptionProjects::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(SubscriptionProjects::Table)
                    .drop_column(SubscriptionProjects::ProjectId)
                    .drop_column(SubscriptionProjects::SubscriptionId)
                    .to_owned(),
            )
            .await?;

        // パッケージに請求タイプを追加
        // データ移行が終わるまでは NULL を許可する
        manager
            .alter_table(
                Table::alter()
                    .table(Packages::Table)
                    .add_column(ColumnDef::new(Packages::BillingTypeId).uuid().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_packages_billing_type_id")
                    .from(Packages::Table, Packages::BillingTypeId)
                    .to(BillingTypes::Table, BillingTypes::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Packages::Table)
                    .name("idx_packages_billing_type_id")
                    .col(Packages::BillingTypeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(Packages::Table)
                    .name("idx_packages_billing_type_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("fk_packages_billing_type_id")
                    .table(Packages::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Packages::Table)
                    .drop_column(Packages::BillingTypeId)
                    .to_owned(),
            )
            .await?;

        // 削除済みの紐付けは復元できないため NULL 許可で列だけ戻す
        manager
            .alter_table(
                Table::alter()
                    .table(SubscriptionProjects::Table)
                    .add_column(
                        ColumnDef::new(SubscriptionProjects::SubscriptionId)
                            .uuid()
                            .null(),
                    )
                    .add_column(ColumnDef::new(SubscriptionProjects::ProjectId).uuid().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_subscription_projects_subscription_id")
                    .from(
                        SubscriptionProjects::Table,
                        SubscriptionProjects::SubscriptionId,
                    )
                    .to(Subscriptions::Table, Subscriptions::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_subscription_projects_project_id")
                    .from(SubscriptionProjects::Table, SubscriptionProjects::ProjectId)
                    .to(Projects::Table, Projects::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Packages {
    Table,
    BillingTypeId,
}

#[derive(DeriveIden)]
enum BillingTypes {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum SubscriptionProjects {
    Table,
    SubscriptionId,
    ProjectId,
}

#[derive(DeriveIden)]
enum Subscriptions {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}
