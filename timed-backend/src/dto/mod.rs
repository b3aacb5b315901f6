// src/dto/mod.rs
pub mod attendance_dto;
pub mod billing_dto;
