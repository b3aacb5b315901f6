// src/dto/billing_dto.rs
use crate::domain::{billing_type_model, package_model};
use sea_orm::prelude::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct CreatePackageDto {
    pub billing_type_id: Uuid,
    pub duration_seconds: i64,
    pub price: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct PackageDto {
    pub id: Uuid,
    pub billing_type_id: Uuid,
    pub duration_seconds: i64,
    pub price: Decimal,
}

impl From<package_model::Model> for PackageDto {
    fn from(model: package_model::Model) -> Self {
        Self {
            id: model.id,
            billing_type_id: model.billing_type_id,
            duration_seconds: model.duration_seconds,
            price: model.price,
        }
    }
}

/// 請求タイプごとの件数集計
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BillingTypeSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub reference: Option<String>,
    pub package_count: u64,
    pub project_count: u64,
}

impl BillingTypeSummaryDto {
    pub fn new(model: billing_type_model::Model, package_count: u64, project_count: u64) -> Self {
        Self {
            id: model.id,
            name: model.name,
            reference: model.reference,
            package_count,
            project_count,
        }
    }
}
