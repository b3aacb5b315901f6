// src/service/mod.rs
pub mod attendance_service;
pub mod billing_service;
