// tests/common/test_data.rs

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, Set, Statement,
};
use timed_backend::domain::user_model;
use timed_backend::dto::attendance_dto::CreateAttendanceDto;
use uuid::Uuid;

/// パッケージ列追加まで適用した時点のマイグレーション名
#[allow(dead_code)]
pub const BEFORE_PACKAGE_MIGRATION: &str = "m20170907_000002_add_billing_type_to_packages";

// === ユーザー・出勤記録 ===

#[allow(dead_code)]
pub async fn create_test_user(db: &DatabaseConnection) -> user_model::Model {
    let suffix = &Uuid::new_v4().to_string()[..8];
    user_model::ActiveModel {
        username: Set(format!("testuser{}", suffix)),
        email: Set(format!("test{}@example.com", suffix)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[allow(dead_code)]
pub fn create_test_attendance() -> CreateAttendanceDto {
    create_attendance_on(NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(), time(8, 0), time(10, 0))
}

#[allow(dead_code)]
pub fn create_attendance_on(
    date: NaiveDate,
    from_time: NaiveTime,
    to_time: NaiveTime,
) -> CreateAttendanceDto {
    CreateAttendanceDto {
        date,
        from_time,
        to_time,
    }
}

// === 移行前（旧サブスクリプション）のデータ ===

#[allow(dead_code)]
pub async fn insert_subscription(db: &DatabaseConnection, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "INSERT INTO subscriptions (id, name) VALUES ($1, $2)",
        [id.into(), name.into()],
    ))
    .await
    .unwrap();
    id
}

#[allow(dead_code)]
pub async fn insert_legacy_package(db: &DatabaseConnection, subscription_id: Uuid) -> Uuid {
    let id = Uuid::new_v4();
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "INSERT INTO packages (id, subscription_id, duration_seconds, price) VALUES ($1, $2, 3600, 100.00)",
        [id.into(), subscription_id.into()],
    ))
    .await
    .unwrap();
    id
}

/// パッケージが存在しなければ `None`、存在すれば請求タイプID（未設定なら `Some(None)`）
#[allow(dead_code)]
pub async fn legacy_package_billing_type(
    db: &DatabaseConnection,
    package_id: Uuid,
) -> Option<Option<Uuid>> {
    db.query_one(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "SELECT billing_type_id FROM packages WHERE id = $1",
        [package_id.into()],
    ))
    .await
    .unwrap()
    .map(|row| row.try_get("", "billing_type_id").unwrap())
}

#[allow(dead_code)]
pub async fn billing_type_id_by_name(db: &DatabaseConnection, name: &str) -> Option<Uuid> {
    db.query_one(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "SELECT id FROM billing_types WHERE name = $1",
        [name.into()],
    ))
    .await
    .unwrap()
    .map(|row| row.try_get("", "id").unwrap())
}

#[allow(dead_code)]
pub async fn billing_type_names(db: &DatabaseConnection) -> Vec<String> {
    db.query_all(Statement::from_string(
        DatabaseBackend::Postgres,
        "SELECT name FROM billing_types ORDER BY name",
    ))
    .await
    .unwrap()
    .into_iter()
    .map(|row| row.try_get("", "name").unwrap())
    .collect()
}

#[allow(dead_code)]
pub async fn table_exists(db: &DatabaseConnection, table: &str) -> bool {
    let row = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = $1)",
            [table.into()],
        ))
        .await
        .unwrap()
        .unwrap();
    row.try_get("", "exists").unwrap()
}
