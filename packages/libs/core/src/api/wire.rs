//! 엔드포인트별 와이어 타입
//!
//! 응답 성공 플래그의 이름이 엔드포인트마다 다릅니다 (`success` vs
//! `/register`의 `isSuccess`). 기존 백엔드 계약의 비일관성이므로
//! 엔드포인트별로 그대로 따르며, 여기서 통일하지 않습니다.

use serde::{Deserialize, Serialize};

use crate::draft::RolePermission;
use crate::schema::TableSchema;

/// `POST /roles` 요청 바디
#[derive(Debug, Clone, Serialize)]
pub struct CreateRoleRequest {
    pub name: String,
    pub permissions: Vec<RolePermission>,
}

/// `GET /db-schema` 응답
#[derive(Debug, Deserialize)]
pub(crate) struct SchemaResponse {
    pub success: bool,
    #[serde(default)]
    pub tables: Vec<TableSchema>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /roles` 응답
#[derive(Debug, Deserialize)]
pub(crate) struct RolesResponse {
    pub success: bool,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /roles` 응답
#[derive(Debug, Deserialize)]
pub(crate) struct CreateRoleResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /register` 응답 (성공 플래그가 `isSuccess`)
#[derive(Debug, Deserialize)]
pub(crate) struct RegisterResponse {
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
    #[serde(default)]
    pub error: Option<String>,
}
