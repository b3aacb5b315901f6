// src/repository/billing_type_repository.rs
use crate::domain::billing_type_model::{
    self, ActiveModel as BillingTypeActiveModel, Entity as BillingTypeEntity,
};
use crate::domain::project_model::{self, Entity as ProjectEntity};
use sea_orm::{entity::*, query::*, DbConn, DbErr, PaginatorTrait, Set, TransactionTrait};
use uuid::Uuid;

pub struct BillingTypeRepository {
    db: DbConn,
}

impl BillingTypeRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<billing_type_model::Model>, DbErr> {
        BillingTypeEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<billing_type_model::Model>, DbErr> {
        BillingTypeEntity::find()
            .filter(billing_type_model::Column::Name.eq(name))
            .one(&self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<billing_type_model::Model>, DbErr> {
        BillingTypeEntity::find()
            .order_by_asc(billing_type_model::Column::Name)
            .all(&self.db)
            .await
    }

    /// 名前で検索し、無ければ作成する
    ///
    /// 検索と作成を同一トランザクションで行い、作成した場合は `true` を返す。
    pub async fn find_or_create_by_name(
        &self,
        name: &str,
    ) -> Result<(billing_type_model::Model, bool), DbErr> {
        let txn = self.db.begin().await?;

        let existing = BillingTypeEntity::find()
            .filter(billing_type_model::Column::Name.eq(name))
            .one(&txn)
            .await?;

        let result = match existing {
            Some(model) => (model, false),
            None => {
                let new_billing_type = BillingTypeActiveModel {
                    name: Set(name.to_string()),
                    ..Default::default()
                };
                (new_billing_type.insert(&txn).await?, true)
            }
        };

        txn.commit().await?;
        Ok(result)
    }

    pub async fn count_projects(&self, billing_type_id: Uuid) -> Result<u64, DbErr> {
        ProjectEntity::find()
            .filter(project_model::Column::BillingTypeId.eq(billing_type_id))
            .count(&self.db)
            .await
    }
}
