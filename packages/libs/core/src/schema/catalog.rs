//! 스키마 카탈로그
//!
//! 세션 시작 시 로드되는 테이블/컬럼 메타데이터의 스냅샷입니다.
//! 로드는 전체 교체만 지원합니다. 세션 도중의 스키마 변경은 다시
//! 로드해야만 반영됩니다.

use crate::api::GateApi;
use crate::error::FetchError;

use super::table::TableSchema;

/// 스키마 스냅샷
///
/// 마지막으로 완전히 로드된 테이블 목록이거나 빈 목록, 둘 중
/// 하나입니다. 부분/불완전 스냅샷은 노출되지 않습니다.
#[derive(Debug, Default)]
pub struct SchemaCatalog {
    tables: Vec<TableSchema>,
}

impl SchemaCatalog {
    /// 빈 카탈로그 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 스냅샷 전체 교체 로드
    ///
    /// 실패하면 기존 스냅샷(최초에는 빈 목록)이 그대로 유지되고 에러가
    /// 반환됩니다. 자동 재시도는 없습니다.
    pub async fn load<A: GateApi>(&mut self, api: &A) -> Result<(), FetchError> {
        match api.fetch_schema().await {
            Ok(tables) => {
                self.tables = tables;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("schema load failed: {}", e);
                Err(e)
            }
        }
    }

    /// 현재 스냅샷의 테이블 목록
    pub fn tables(&self) -> &[TableSchema] {
        &self.tables
    }

    /// 스냅샷이 비어 있는지
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// 이름으로 테이블 조회
    pub fn find_table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.table_name == name)
    }

    /// 해당 테이블에 해당 컬럼이 존재하는지
    pub fn has_column(&self, table: &str, column: &str) -> bool {
        self.find_table(table)
            .map(|t| t.has_column(column))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::stub::StubApi;

    #[tokio::test]
    async fn test_load_replaces_snapshot() {
        let api = StubApi::with_employees();
        let mut catalog = SchemaCatalog::new();
        assert!(catalog.is_empty());

        catalog.load(&api).await.unwrap();
        assert_eq!(catalog.tables().len(), 1);
        assert!(catalog.has_column("employees", "salary"));
        assert!(!catalog.has_column("employees", "ssn"));
        assert!(!catalog.has_column("payroll", "salary"));
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_snapshot() {
        let mut api = StubApi::with_employees();
        let mut catalog = SchemaCatalog::new();
        catalog.load(&api).await.unwrap();

        api.fail_fetch = true;
        let err = catalog.load(&api).await.unwrap_err();
        assert!(matches!(err, FetchError::Service { .. }));
        // 실패해도 이전 스냅샷은 그대로
        assert_eq!(catalog.tables().len(), 1);
        assert!(catalog.find_table("employees").is_some());
    }

    #[tokio::test]
    async fn test_first_failed_load_stays_empty() {
        let mut api = StubApi::with_employees();
        api.fail_fetch = true;

        let mut catalog = SchemaCatalog::new();
        assert!(catalog.load(&api).await.is_err());
        assert!(catalog.is_empty());
    }
}
