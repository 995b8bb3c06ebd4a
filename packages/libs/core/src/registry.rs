//! 역할 레지스트리
//!
//! 서버에 존재한다고 알려진 역할 이름의 목록입니다. 세션 시작 시 한 번
//! 로드되고, 제출 성공 시 로컬에서만 이름이 추가됩니다.

use crate::api::GateApi;
use crate::error::FetchError;

/// 알려진 역할 이름 목록
#[derive(Debug, Default)]
pub struct RoleRegistry {
    roles: Vec<String>,
}

impl RoleRegistry {
    /// 빈 레지스트리 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 역할 목록 전체 교체 로드
    ///
    /// 실패하면 기존 목록이 유지되고 에러가 반환됩니다.
    pub async fn load<A: GateApi>(&mut self, api: &A) -> Result<(), FetchError> {
        match api.fetch_roles().await {
            Ok(roles) => {
                self.roles = roles;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("role list load failed: {}", e);
                Err(e)
            }
        }
    }

    /// 제출 성공 후 로컬 추가
    ///
    /// 서버 재조회 없이 이름만 추가하는 낙관적 갱신입니다. 작성 세션이
    /// 동시에 여러 개 돌면 서버 상태와 어긋날 수 있습니다 (단일 운영자
    /// 도구 전제).
    pub fn append(&mut self, name: &str) {
        self.roles.push(name.to_string());
    }

    /// 현재 알려진 역할 이름 목록
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// 역할 이름 존재 여부
    pub fn contains(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::stub::StubApi;

    #[tokio::test]
    async fn test_load_and_append() {
        let mut api = StubApi::with_employees();
        api.roles = vec!["admin".to_string()];

        let mut registry = RoleRegistry::new();
        registry.load(&api).await.unwrap();
        assert!(registry.contains("admin"));

        registry.append("hr_read");
        assert!(registry.contains("hr_read"));
        assert_eq!(registry.roles().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_list() {
        let mut api = StubApi::with_employees();
        api.roles = vec!["admin".to_string()];

        let mut registry = RoleRegistry::new();
        registry.load(&api).await.unwrap();

        api.fail_fetch = true;
        assert!(registry.load(&api).await.is_err());
        assert!(registry.contains("admin"));
    }
}
