// src/service/attendance_service.rs

use crate::db::DbPool;
use crate::dto::attendance_dto::{AttendanceDto, CreateAttendanceDto, UpdateAttendanceDto};
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::attendance_repository::AttendanceRepository;
use chrono::NaiveTime;
use std::sync::Arc;
use uuid::Uuid;

/// ユーザー単位の出勤記録操作
///
/// 他ユーザーの記録は存在しないものとして扱う。
pub struct AttendanceService {
    repo: Arc<AttendanceRepository>,
}

impl AttendanceService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(AttendanceRepository::new(db_pool)),
        }
    }

    pub async fn list_attendances(&self, user_id: Uuid) -> AppResult<Vec<AttendanceDto>> {
        let attendances = self.repo.find_all_for_user(user_id).await?;
        Ok(attendances.into_iter().map(Into::into).collect())
    }

    pub async fn get_attendance(&self, user_id: Uuid, id: Uuid) -> AppResult<AttendanceDto> {
        self.repo
            .find_by_id_for_user(user_id, id)
            .await?
            .map(Into::into)
            .ok_or_else(|| attendance_not_found(id))
    }

    // ユーザーは呼び出し元から自動的に設定する
    pub async fn create_attendance(
        &self,
        user_id: Uuid,
        payload: CreateAttendanceDto,
    ) -> AppResult<AttendanceDto> {
        validate_time_range(payload.from_time, payload.to_time)?;

        let created = self.repo.create_for_user(user_id, payload).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Attendance created",
            "attendance_id" => created.id,
            "user_id" => user_id,
            "date" => created.date,
        );

        Ok(created.into())
    }

    pub async fn update_attendance(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: UpdateAttendanceDto,
    ) -> AppResult<AttendanceDto> {
        let existing = self
            .repo
            .find_by_id_for_user(user_id, id)
            .await?
            .ok_or_else(|| attendance_not_found(id))?;

        // 部分更新を適用した後の時刻で検証する
        validate_time_range(
            payload.from_time.unwrap_or(existing.from_time),
            payload.to_time.unwrap_or(existing.to_time),
        )?;

        let updated = self.repo.update(existing, payload).await?;
        Ok(updated.into())
    }

    pub async fn delete_attendance(&self, user_id: Uuid, id: Uuid) -> AppResult<()> {
        let result = self.repo.delete_for_user(user_id, id).await?;
        if result.rows_affected == 0 {
            let err = attendance_not_found(id);
            log_with_context!(
                tracing::Level::WARN,
                "Attendance delete failed",
                "attendance_id" => id,
                "user_id" => user_id,
                "error_type" => err.error_type(),
            );
            return Err(err);
        }

        log_with_context!(
            tracing::Level::INFO,
            "Attendance deleted",
            "attendance_id" => id,
            "user_id" => user_id,
        );

        Ok(())
    }
}

fn attendance_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Attendance with id {} not found", id))
}

fn validate_time_range(from_time: NaiveTime, to_time: NaiveTime) -> AppResult<()> {
    if to_time < from_time {
        return Err(AppError::ValidationError(format!(
            "to-time {} must not be before from-time {}",
            to_time, from_time
        )));
    }
    Ok(())
}
