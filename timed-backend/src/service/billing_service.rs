// src/service/billing_service.rs

use crate::db::DbPool;
use crate::domain::billing_type_model;
use crate::dto::billing_dto::{BillingTypeSummaryDto, CreatePackageDto, PackageDto};
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::billing_type_repository::BillingTypeRepository;
use crate::repository::package_repository::PackageRepository;
use std::sync::Arc;
use uuid::Uuid;

pub struct BillingService {
    billing_type_repo: Arc<BillingTypeRepository>,
    package_repo: Arc<PackageRepository>,
}

impl BillingService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            billing_type_repo: Arc::new(BillingTypeRepository::new(db_pool.clone())),
            package_repo: Arc::new(PackageRepository::new(db_pool)),
        }
    }

    /// 請求タイプに属するパッケージ（`packages` 関連）
    pub async fn billing_type_packages(&self, billing_type_id: Uuid) -> AppResult<Vec<PackageDto>> {
        self.billing_type_repo
            .find_by_id(billing_type_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Billing type with id {} not found", billing_type_id))
            })?;

        let packages = self.package_repo.find_by_billing_type(billing_type_id).await?;
        Ok(packages.into_iter().map(Into::into).collect())
    }

    pub async fn billing_type_by_name(&self, name: &str) -> AppResult<billing_type_model::Model> {
        self.billing_type_repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Billing type '{}' not found", name)))
    }

    /// 名前の請求タイプを取得し、無ければ作成する
    pub async fn ensure_billing_type(&self, name: &str) -> AppResult<billing_type_model::Model> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Billing type name must not be empty".to_string(),
            ));
        }

        // 同名の行が並行して作成された場合は一意制約違反になる
        let (billing_type, created) = self
            .billing_type_repo
            .find_or_create_by_name(name)
            .await
            .map_err(|e| {
                AppError::from_unique_violation(e, format!("Billing type '{}' already exists", name))
            })?;
        if created {
            log_with_context!(
                tracing::Level::INFO,
                "Billing type created",
                "billing_type_id" => billing_type.id,
                "name" => &billing_type.name,
            );
        }

        Ok(billing_type)
    }

    pub async fn create_package(&self, payload: CreatePackageDto) -> AppResult<PackageDto> {
        if payload.duration_seconds <= 0 {
            return Err(AppError::ValidationError(
                "Package duration must be positive".to_string(),
            ));
        }

        // 存在しない請求タイプは外部キー違反になる前に弾く
        self.billing_type_repo
            .find_by_id(payload.billing_type_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Billing type with id {} not found",
                    payload.billing_type_id
                ))
            })?;

        let created = self.package_repo.create(payload).await?;
        Ok(created.into())
    }

    /// 全請求タイプのパッケージ数・プロジェクト数（名前順）
    pub async fn billing_summary(&self) -> AppResult<Vec<BillingTypeSummaryDto>> {
        let billing_types = self.billing_type_repo.find_all().await?;

        let mut summary = Vec::with_capacity(billing_types.len());
        for billing_type in billing_types {
            let package_count = self.package_repo.count_by_billing_type(billing_type.id).await?;
            let project_count = self.billing_type_repo.count_projects(billing_type.id).await?;
            summary.push(BillingTypeSummaryDto::new(
                billing_type,
                package_count,
                project_count,
            ));
        }

        Ok(summary)
    }
}
