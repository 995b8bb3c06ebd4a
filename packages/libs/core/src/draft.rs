//! 역할 권한 초안 (PermissionDraft)
//!
//! 제출 전에 작성 중인 "어떤 테이블의 어떤 컬럼을 볼 수 있는가"의
//! 매핑입니다. 컬럼 선택의 유일한 변경 연산은 toggle이며, 같은 toggle을
//! 두 번 적용하면 원래 상태로 돌아갑니다. 전체 선택/해제 같은 일괄
//! 연산도 모델 차원에서는 toggle의 반복일 뿐입니다.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// 하나의 테이블에 대한 접근 허용 범위
///
/// 와이어 포맷 `{ tableName, columns, rowFilter }`. `rowFilter`는 없으면
/// 직렬화에서 생략됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermission {
    /// 대상 테이블 이름
    #[serde(rename = "tableName")]
    pub table_name: String,

    /// 허용 컬럼 집합 (순서 무관, 중복 없음)
    pub columns: BTreeSet<String>,

    /// 행 필터 (예: `department='HR'`)
    ///
    /// 코어는 이 문자열을 파싱/검증하지 않고 그대로 전달합니다.
    #[serde(rename = "rowFilter", skip_serializing_if = "Option::is_none")]
    pub row_filter: Option<String>,
}

impl RolePermission {
    fn new(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            columns: BTreeSet::new(),
            row_filter: None,
        }
    }
}

/// 작성 중인 역할 권한 초안
///
/// 테이블 이름 → [`RolePermission`] 매핑. 테이블 키는 유일하며, 삽입
/// 순서가 보존됩니다. 컬럼이 모두 해제되어 빈 집합이 된 엔트리도
/// 제거하지 않고 남겨 둡니다. 따라서 제출 페이로드에 허용 컬럼이 없는
/// 테이블 엔트리가 포함될 수 있습니다 (DESIGN.md의 미해결 질문 참고).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionDraft {
    entries: Vec<RolePermission>,
}

impl PermissionDraft {
    /// 빈 초안 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 컬럼 선택 토글
    ///
    /// 유일한 컬럼 변경 연산입니다. 테이블 엔트리가 없으면 해당 컬럼
    /// 하나로 새로 만들고, 이미 선택된 컬럼이면 해제, 아니면 추가합니다.
    /// 같은 토글 두 번은 항등이며, 서로 다른 컬럼 토글은 순서를 바꿔도
    /// 결과가 같습니다.
    pub fn toggle_column(&mut self, table: &str, column: &str) {
        let entry = self.entry_mut(table);
        if !entry.columns.remove(column) {
            entry.columns.insert(column.to_string());
        }
    }

    /// 행 필터 설정/해제
    ///
    /// 테이블 엔트리가 없으면 (컬럼이 빈) 엔트리를 만들어 설정합니다.
    pub fn set_row_filter(&mut self, table: &str, filter: Option<String>) {
        self.entry_mut(table).row_filter = filter;
    }

    /// 제출용 스냅샷
    ///
    /// 테이블 삽입 순서를 유지한 목록을 반환합니다. 빈 컬럼 집합의
    /// 엔트리도 그대로 포함됩니다.
    pub fn to_value(&self) -> Vec<RolePermission> {
        self.entries.clone()
    }

    /// 초안 비우기 (제출 성공 후 호출)
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// 엔트리가 하나도 없는지
    ///
    /// 빈 컬럼 집합의 엔트리도 엔트리로 칩니다.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 테이블 엔트리 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 해당 컬럼이 현재 선택되어 있는지
    pub fn contains(&self, table: &str, column: &str) -> bool {
        self.get(table)
            .map(|e| e.columns.contains(column))
            .unwrap_or(false)
    }

    /// 테이블 엔트리 조회
    pub fn get(&self, table: &str) -> Option<&RolePermission> {
        self.entries.iter().find(|e| e.table_name == table)
    }

    fn entry_mut(&mut self, table: &str) -> &mut RolePermission {
        let idx = match self.entries.iter().position(|e| e.table_name == table) {
            Some(idx) => idx,
            None => {
                self.entries.push(RolePermission::new(table));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx]
    }
}
