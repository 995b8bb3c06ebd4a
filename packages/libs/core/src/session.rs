//! 역할 작성 세션
//!
//! 카탈로그, 레지스트리, 초안을 한 객체가 소유합니다. 페이지 전역
//! 상태 대신 명시적 세션을 넘겨 쓰는 구조이며, 작성자는 세션당 하나
//! 입니다. 토글은 메모리 내 동기 연산이고, 로드와 제출만 네트워크
//! 경계에서 suspend합니다.

use crate::api::{CreateRoleRequest, GateApi};
use crate::draft::PermissionDraft;
use crate::error::{FetchError, SubmissionError, ValidationError};
use crate::registry::RoleRegistry;
use crate::schema::SchemaCatalog;

/// `submit` 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 역할이 생성되고 초안이 비워짐
    Created,

    /// 이름이 비어 있어 아무것도 하지 않음 (네트워크 호출 없음)
    SkippedEmptyName,
}

/// 역할 작성 세션
#[derive(Debug, Default)]
pub struct AuthoringSession {
    catalog: SchemaCatalog,
    registry: RoleRegistry,
    draft: PermissionDraft,
    submitting: bool,
}

impl AuthoringSession {
    /// 빈 세션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 스키마 카탈로그 로드
    ///
    /// 레지스트리 로드와는 독립적입니다. 한쪽의 실패가 다른 쪽을 막지
    /// 않습니다.
    pub async fn load_schema<A: GateApi>(&mut self, api: &A) -> Result<(), FetchError> {
        self.catalog.load(api).await
    }

    /// 역할 목록 로드
    pub async fn load_roles<A: GateApi>(&mut self, api: &A) -> Result<(), FetchError> {
        self.registry.load(api).await
    }

    /// 컬럼 선택 토글
    ///
    /// 현재 카탈로그에 존재하는 테이블/컬럼인지 확인한 뒤 초안에
    /// 위임합니다. 토글 시점의 카탈로그가 기준이며, 이후 스냅샷이
    /// 바뀌어도 이미 선택된 컬럼을 다시 검증하지는 않습니다.
    pub fn toggle_column(&mut self, table: &str, column: &str) -> Result<(), ValidationError> {
        let schema = self
            .catalog
            .find_table(table)
            .ok_or_else(|| ValidationError::UnknownTable {
                table: table.to_string(),
            })?;
        if !schema.has_column(column) {
            return Err(ValidationError::UnknownColumn {
                table: table.to_string(),
                column: column.to_string(),
            });
        }

        self.draft.toggle_column(table, column);
        Ok(())
    }

    /// 행 필터 설정/해제
    pub fn set_row_filter(
        &mut self,
        table: &str,
        filter: Option<String>,
    ) -> Result<(), ValidationError> {
        if self.catalog.find_table(table).is_none() {
            return Err(ValidationError::UnknownTable {
                table: table.to_string(),
            });
        }

        self.draft.set_row_filter(table, filter);
        Ok(())
    }

    /// 역할 제출
    ///
    /// 빈 이름이면 네트워크 호출 없이 no-op으로 끝납니다. 제출이 이미
    /// 진행 중이면 거부합니다 (초안당 최대 한 건).
    ///
    /// 성공: 레지스트리에 이름 추가(정확히 한 번), 초안 비움.
    /// 실패: 초안과 레지스트리를 건드리지 않아 수정 후 재제출할 수
    /// 있습니다. 자동 재시도는 없습니다.
    pub async fn submit<A: GateApi>(
        &mut self,
        api: &A,
        role_name: &str,
    ) -> Result<SubmitOutcome, SubmissionError> {
        if role_name.is_empty() {
            return Ok(SubmitOutcome::SkippedEmptyName);
        }
        if self.submitting {
            return Err(SubmissionError::AlreadyInFlight);
        }

        let req = CreateRoleRequest {
            name: role_name.to_string(),
            permissions: self.draft.to_value(),
        };

        self.submitting = true;
        let result = api.create_role(&req).await;
        self.submitting = false;

        result?;
        self.registry.append(role_name);
        self.draft.reset();
        Ok(SubmitOutcome::Created)
    }

    /// 현재 카탈로그
    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    /// 현재 레지스트리
    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    /// 현재 초안
    pub fn draft(&self) -> &PermissionDraft {
        &self.draft
    }

    /// 제출 진행 중 여부
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}
