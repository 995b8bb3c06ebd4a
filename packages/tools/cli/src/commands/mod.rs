//! CLI 명령어 모듈

pub mod config;
pub mod register;
pub mod roles;
pub mod schema;
