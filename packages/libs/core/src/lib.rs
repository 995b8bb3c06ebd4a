//! dg-core: DataGate 핵심 라이브러리
//!
//! 대상 데이터베이스 등록, 스키마 조회, 역할(Role) 권한 작성에 필요한
//! 핵심 타입과 상태 머신을 제공합니다. 실제 스키마 추출과 정책 저장은
//! 백엔드가 수행하며, 코어는 `api::GateApi` 경계 뒤의 단일 요청/응답만
//! 사용합니다.
//!
//! # 모듈 구조
//!
//! - `schema`: 테이블/컬럼 메타데이터 스냅샷 (SchemaCatalog)
//! - `draft`: 작성 중인 역할 권한 초안 (PermissionDraft)
//! - `registry`: 알려진 역할 이름 목록 (RoleRegistry)
//! - `session`: 카탈로그 + 레지스트리 + 초안을 소유하는 작성 세션
//! - `register`: 데이터베이스 등록 폼 검증
//! - `api`: 백엔드 API 경계 (trait + reqwest 구현)
//! - `error`: 에러 타입

pub mod api;
pub mod draft;
pub mod error;
pub mod register;
pub mod registry;
pub mod schema;
pub mod session;

pub use draft::{PermissionDraft, RolePermission};
pub use error::{FetchError, SubmissionError, ValidationError};
pub use registry::RoleRegistry;
pub use schema::{Column, SchemaCatalog, TableSchema};
pub use session::{AuthoringSession, SubmitOutcome};
