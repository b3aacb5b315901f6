// src/domain/package_model.rs
use chrono::TimeDelta;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// 請求パッケージ（一定時間分の作業を一定価格で販売する単位）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "packages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub billing_type_id: Uuid,
    pub duration_seconds: i64,
    #[sea_orm(column_type = "Decimal(Some((7, 2)))")]
    pub price: Decimal,
}

impl Model {
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::seconds(self.duration_seconds)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::billing_type_model::Entity",
        from = "Column::BillingTypeId",
        to = "super::billing_type_model::Column::Id",
        on_delete = "Cascade"
    )]
    BillingType,
}

impl Related<super::billing_type_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BillingType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            ..ActiveModelTrait::default()
        }
    }
}
