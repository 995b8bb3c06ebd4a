//! 테스트용 GateApi 스텁

use std::cell::Cell;

use crate::error::{FetchError, SubmissionError};
use crate::register::RegisterDbRequest;
use crate::schema::TableSchema;

use super::wire::CreateRoleRequest;
use super::GateApi;

/// 설정 가능한 인메모리 백엔드
#[derive(Debug, Default)]
pub(crate) struct StubApi {
    pub tables: Vec<TableSchema>,
    pub roles: Vec<String>,
    /// 읽기 엔드포인트를 실패시킬지
    pub fail_fetch: bool,
    /// Some이면 역할 생성을 해당 메시지로 거부
    pub reject_create: Option<String>,
    /// `POST /roles` 호출 횟수
    pub create_calls: Cell<usize>,
}

impl StubApi {
    /// employees [id, name, salary, department] 테이블 하나짜리 스텁
    pub fn with_employees() -> Self {
        let table: TableSchema = serde_json::from_str(
            r#"{
                "tableName": "employees",
                "columns": [
                    { "name": "id", "type": "int", "isNullable": false },
                    { "name": "name", "type": "varchar", "isNullable": false },
                    { "name": "salary", "type": "numeric", "isNullable": true },
                    { "name": "department", "type": "varchar", "isNullable": true }
                ]
            }"#,
        )
        .unwrap();

        Self {
            tables: vec![table],
            ..Self::default()
        }
    }
}

impl GateApi for StubApi {
    async fn fetch_schema(&self) -> Result<Vec<TableSchema>, FetchError> {
        if self.fail_fetch {
            Err(FetchError::Service {
                message: "backend unavailable".to_string(),
            })
        } else {
            Ok(self.tables.clone())
        }
    }

    async fn fetch_roles(&self) -> Result<Vec<String>, FetchError> {
        if self.fail_fetch {
            Err(FetchError::Service {
                message: "backend unavailable".to_string(),
            })
        } else {
            Ok(self.roles.clone())
        }
    }

    async fn create_role(&self, _req: &CreateRoleRequest) -> Result<(), SubmissionError> {
        self.create_calls.set(self.create_calls.get() + 1);
        match &self.reject_create {
            Some(message) => Err(SubmissionError::Rejected {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn register_database(&self, _req: &RegisterDbRequest) -> Result<(), SubmissionError> {
        Ok(())
    }
}
