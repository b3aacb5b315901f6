use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillingTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BillingTypes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BillingTypes::Name)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(BillingTypes::Reference)
                            .string_len(255)
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // プロジェクトに請求タイプを紐付ける（請求タイプ削除時はNULLに戻す）
        manager
            .alter_table(
                Table::alter()
                    .table(Projects::Table)
                    .add_column(ColumnDef::new(Projects::BillingTypeId).uuid().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_projects_billing_type_id")
                    .from(Projects::Table, Projects::BillingTypeId)
                    .to(BillingTypes::Table, BillingTypes::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("fk_projects_billing_type_id")
                    .table(Projects::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Projects::Table)
                    .drop_column(Projects::BillingTypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BillingTypes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BillingTypes {
    Table,
    Id,
    Name,
    Reference,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    BillingTypeId,
}
