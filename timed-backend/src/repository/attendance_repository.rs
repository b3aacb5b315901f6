// src/repository/attendance_repository.rs
use crate::domain::attendance_model::{
    self, ActiveModel as AttendanceActiveModel, Entity as AttendanceEntity,
};
use crate::dto::attendance_dto::{CreateAttendanceDto, UpdateAttendanceDto};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use uuid::Uuid;

pub struct AttendanceRepository {
    db: DbConn,
}

impl AttendanceRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<attendance_model::Model>, DbErr> {
        AttendanceEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_id_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<attendance_model::Model>, DbErr> {
        AttendanceEntity::find_by_id(id)
            .filter(attendance_model::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    // 日付・出勤時刻の昇順
    pub async fn find_all_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<attendance_model::Model>, DbErr> {
        AttendanceEntity::find()
            .filter(attendance_model::Column::UserId.eq(user_id))
            .order_by_asc(attendance_model::Column::Date)
            .order_by_asc(attendance_model::Column::FromTime)
            .all(&self.db)
            .await
    }

    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        payload: CreateAttendanceDto,
    ) -> Result<attendance_model::Model, DbErr> {
        let new_attendance = AttendanceActiveModel {
            user_id: Set(user_id),
            date: Set(payload.date),
            from_time: Set(payload.from_time),
            to_time: Set(payload.to_time),
            ..Default::default()
        };
        new_attendance.insert(&self.db).await
    }

    pub async fn update(
        &self,
        attendance: attendance_model::Model,
        payload: UpdateAttendanceDto,
    ) -> Result<attendance_model::Model, DbErr> {
        let mut active_model: AttendanceActiveModel = attendance.clone().into();
        let mut changed = false;

        if let Some(date) = payload.date {
            active_model.date = Set(date);
            changed = true;
        }

        if let Some(from_time) = payload.from_time {
            active_model.from_time = Set(from_time);
            changed = true;
        }

        if let Some(to_time) = payload.to_time {
            active_model.to_time = Set(to_time);
            changed = true;
        }

        if changed {
            active_model.update(&self.db).await
        } else {
            Ok(attendance) // 変更が無ければ updated_at も更新しない
        }
    }

    pub async fn delete_for_user(&self, user_id: Uuid, id: Uuid) -> Result<DeleteResult, DbErr> {
        AttendanceEntity::delete_many()
            .filter(attendance_model::Column::Id.eq(id))
            .filter(attendance_model::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
    }
}
