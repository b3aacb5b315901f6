// src/dto/attendance_dto.rs
use crate::domain::attendance_model;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Request DTOs ---

/// ユーザーは呼び出し元から決まるためペイロードには含めない
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct CreateAttendanceDto {
    pub date: NaiveDate,
    pub from_time: NaiveTime,
    pub to_time: NaiveTime,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateAttendanceDto {
    pub date: Option<NaiveDate>,
    pub from_time: Option<NaiveTime>,
    pub to_time: Option<NaiveTime>,
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct AttendanceDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub from_time: NaiveTime,
    pub to_time: NaiveTime,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<attendance_model::Model> for AttendanceDto {
    fn from(model: attendance_model::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            date: model.date,
            from_time: model.from_time,
            to_time: model.to_time,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
