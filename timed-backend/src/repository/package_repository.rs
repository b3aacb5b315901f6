// src/repository/package_repository.rs
use crate::domain::package_model::{self, ActiveModel as PackageActiveModel, Entity as PackageEntity};
use crate::dto::billing_dto::CreatePackageDto;
use sea_orm::{entity::*, query::*, DbConn, DbErr, PaginatorTrait, Set};
use uuid::Uuid;

pub struct PackageRepository {
    db: DbConn,
}

impl PackageRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<package_model::Model>, DbErr> {
        PackageEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<package_model::Model>, DbErr> {
        PackageEntity::find()
            .order_by_asc(package_model::Column::DurationSeconds)
            .all(&self.db)
            .await
    }

    pub async fn find_by_billing_type(
        &self,
        billing_type_id: Uuid,
    ) -> Result<Vec<package_model::Model>, DbErr> {
        PackageEntity::find()
            .filter(package_model::Column::BillingTypeId.eq(billing_type_id))
            .order_by_asc(package_model::Column::DurationSeconds)
            .all(&self.db)
            .await
    }

    pub async fn count_by_billing_type(&self, billing_type_id: Uuid) -> Result<u64, DbErr> {
        PackageEntity::find()
            .filter(package_model::Column::BillingTypeId.eq(billing_type_id))
            .count(&self.db)
            .await
    }

    pub async fn create(&self, payload: CreatePackageDto) -> Result<package_model::Model, DbErr> {
        let new_package = PackageActiveModel {
            billing_type_id: Set(payload.billing_type_id),
            duration_seconds: Set(payload.duration_seconds),
            price: Set(payload.price),
            ..Default::default()
        };
        new_package.insert(&self.db).await
    }
}
