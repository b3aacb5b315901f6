// src/domain/mod.rs
pub mod attendance_model;
pub mod billing_type_model;
pub mod package_model;
pub mod project_model;
pub mod user_model;
