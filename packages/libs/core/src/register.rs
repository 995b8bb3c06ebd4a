//! 데이터베이스 등록
//!
//! 운영자가 입력한 등록 폼을 검증해 `POST /register` 요청 바디로
//! 변환합니다. 포트는 자유 텍스트로 들어오며, 숫자가 아니면 전송하지
//! 않고 [`ValidationError`]로 차단합니다.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// 지원 데이터베이스 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    Postgres,
    Mysql,
    Mongo,
}

impl DbType {
    /// 문자열에서 파싱
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "postgres" => Some(DbType::Postgres),
            "mysql" => Some(DbType::Mysql),
            "mongo" => Some(DbType::Mongo),
            _ => None,
        }
    }

    /// 문자열로 변환
    pub fn as_str(&self) -> &'static str {
        match self {
            DbType::Postgres => "postgres",
            DbType::Mysql => "mysql",
            DbType::Mongo => "mongo",
        }
    }
}

/// 등록 폼 (검증 전)
///
/// 포트는 운영자 입력 그대로의 자유 텍스트입니다.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub host: String,
    pub port: String,
    pub db_name: String,
    pub username: String,
    pub password: String,
    pub db_type: DbType,
}

impl RegisterForm {
    /// 검증 후 요청 바디로 변환
    ///
    /// 호스트/DB 이름이 비어 있거나 포트가 1..=65535 범위의 숫자가
    /// 아니면 요청을 만들지 않습니다.
    pub fn into_request(self) -> Result<RegisterDbRequest, ValidationError> {
        let host = self.host.trim().to_string();
        if host.is_empty() {
            return Err(ValidationError::EmptyHost);
        }

        let db_name = self.db_name.trim().to_string();
        if db_name.is_empty() {
            return Err(ValidationError::EmptyDbName);
        }

        let port: u16 = self
            .port
            .trim()
            .parse()
            .ok()
            .filter(|p| *p != 0)
            .ok_or(ValidationError::InvalidPort {
                input: self.port.clone(),
            })?;

        Ok(RegisterDbRequest {
            host,
            port,
            db_name,
            username: self.username,
            password: self.password,
            db_type: self.db_type,
        })
    }
}

/// `POST /register` 요청 바디
///
/// 와이어 포맷 `{ host, port, dbName, username, password, dbType }`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterDbRequest {
    pub host: String,
    pub port: u16,
    #[serde(rename = "dbName")]
    pub db_name: String,
    pub username: String,
    pub password: String,
    #[serde(rename = "dbType")]
    pub db_type: DbType,
}
