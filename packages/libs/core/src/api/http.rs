//! reqwest 기반 GateApi 구현

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{FetchError, SubmissionError};
use crate::register::RegisterDbRequest;
use crate::schema::TableSchema;

use super::wire::{
    CreateRoleRequest, CreateRoleResponse, RegisterResponse, RolesResponse, SchemaResponse,
};
use super::GateApi;

/// 백엔드 HTTP 클라이언트
#[derive(Debug, Clone)]
pub struct HttpGateApi {
    base_url: String,
    client: Client,
}

impl HttpGateApi {
    /// 주어진 base URL에 대한 클라이언트 생성
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET 후 JSON 파싱
    ///
    /// 실패 응답도 계약상 JSON 바디를 갖습니다. 바디가 파싱되지 않는
    /// 비성공 상태는 상태 코드만 보고합니다.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(FetchError::Transport)?;
        let status = resp.status();
        match resp.json::<T>().await {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => Err(FetchError::Status {
                status: status.as_u16(),
            }),
            Err(e) => Err(FetchError::InvalidBody(e)),
        }
    }

    /// POST 후 JSON 파싱 (쓰기 엔드포인트)
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, SubmissionError> {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(SubmissionError::Transport)?;
        let status = resp.status();
        match resp.json::<T>().await {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => Err(SubmissionError::Status {
                status: status.as_u16(),
            }),
            Err(e) => Err(SubmissionError::InvalidBody(e)),
        }
    }
}

impl GateApi for HttpGateApi {
    async fn fetch_schema(&self) -> Result<Vec<TableSchema>, FetchError> {
        let body: SchemaResponse = self.get_json("/db-schema").await?;
        if body.success {
            Ok(body.tables)
        } else {
            Err(FetchError::Service {
                message: body
                    .error
                    .unwrap_or_else(|| "schema fetch failed".to_string()),
            })
        }
    }

    async fn fetch_roles(&self) -> Result<Vec<String>, FetchError> {
        let body: RolesResponse = self.get_json("/roles").await?;
        if body.success {
            Ok(body.roles)
        } else {
            Err(FetchError::Service {
                message: body
                    .error
                    .unwrap_or_else(|| "role list fetch failed".to_string()),
            })
        }
    }

    async fn create_role(&self, req: &CreateRoleRequest) -> Result<(), SubmissionError> {
        let body: CreateRoleResponse = self.post_json("/roles", req).await?;
        if body.success {
            Ok(())
        } else {
            Err(SubmissionError::Rejected {
                message: body
                    .error
                    .unwrap_or_else(|| "role creation failed".to_string()),
            })
        }
    }

    async fn register_database(&self, req: &RegisterDbRequest) -> Result<(), SubmissionError> {
        let body: RegisterResponse = self.post_json("/register", req).await?;
        if body.is_success {
            Ok(())
        } else {
            Err(SubmissionError::Rejected {
                message: body
                    .error
                    .unwrap_or_else(|| "database registration failed".to_string()),
            })
        }
    }
}
