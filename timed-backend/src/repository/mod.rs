// src/repository/mod.rs
pub mod attendance_repository;
pub mod billing_type_repository;
pub mod package_repository;
