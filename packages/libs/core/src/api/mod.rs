//! 백엔드 API 경계
//!
//! 스키마 추출, 역할 조회/생성, 데이터베이스 등록은 모두 백엔드가
//! 수행합니다. 코어는 이 trait 뒤의 단일 요청/응답만 알면 되고,
//! 테스트는 스텁 구현을 끼워 넣습니다.

mod http;
mod wire;

#[cfg(test)]
pub(crate) mod stub;

pub use http::HttpGateApi;
pub use wire::CreateRoleRequest;

use crate::error::{FetchError, SubmissionError};
use crate::register::RegisterDbRequest;
use crate::schema::TableSchema;

/// 백엔드 API
///
/// 각 메서드는 엔드포인트 하나에 대응하는 단일 요청/응답입니다.
#[allow(async_fn_in_trait)]
pub trait GateApi {
    /// `GET /db-schema` — 현재 등록된 데이터베이스의 스키마
    async fn fetch_schema(&self) -> Result<Vec<TableSchema>, FetchError>;

    /// `GET /roles` — 존재하는 역할 이름 목록
    async fn fetch_roles(&self) -> Result<Vec<String>, FetchError>;

    /// `POST /roles` — 역할 생성
    async fn create_role(&self, req: &CreateRoleRequest) -> Result<(), SubmissionError>;

    /// `POST /register` — 데이터베이스 등록
    async fn register_database(&self, req: &RegisterDbRequest) -> Result<(), SubmissionError>;
}
