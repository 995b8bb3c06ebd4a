//! 공통 에러 타입
//!
//! DataGate 코어의 에러는 세 갈래로 나뉩니다.
//!
//! - `FetchError`: 읽기 엔드포인트(스키마/역할 목록) 호출 실패
//! - `ValidationError`: 디스패치 전에 차단되는 클라이언트 측 검증 실패
//! - `SubmissionError`: 역할 생성 제출 실패
//!
//! 어떤 에러도 세션을 중단시키지 않으며, 어느 계층에서도 자동 재시도는
//! 하지 않습니다.

use thiserror::Error;

/// 읽기 엔드포인트 호출 실패
///
/// 호출자는 이전 스냅샷(최초에는 빈 목록)을 유지한 채 진단만 표시합니다.
#[derive(Debug, Error)]
pub enum FetchError {
    /// 전송 계층 실패 (응답 자체가 없음)
    #[error("unable to reach backend server")]
    Transport(#[source] reqwest::Error),

    /// 에러 바디 없이 비성공 상태 코드만 돌아온 경우
    #[error("backend returned HTTP {status}")]
    Status { status: u16 },

    /// `success: false` 응답. 서버 메시지를 그대로 전달합니다.
    #[error("{message}")]
    Service { message: String },

    /// 응답 바디가 계약된 형태가 아님
    #[error("invalid response body")]
    InvalidBody(#[source] reqwest::Error),
}

/// 클라이언트 측 사전 검증 실패
///
/// 네트워크 호출 전에 차단되므로 요청은 발생하지 않습니다.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("unknown table: {table}")]
    UnknownTable { table: String },

    #[error("unknown column: {table}.{column}")]
    UnknownColumn { table: String, column: String },

    /// 포트 입력이 숫자가 아니거나 범위를 벗어남
    #[error("invalid port: '{input}'")]
    InvalidPort { input: String },

    #[error("host is required")]
    EmptyHost,

    #[error("database name is required")]
    EmptyDbName,
}

/// 역할 생성 제출 실패
///
/// 어느 경우에도 초안과 레지스트리는 그대로 남아, 운영자가 수정 후
/// 재제출할 수 있습니다.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// 서버가 생성을 거부. 서버 메시지를 그대로 전달합니다.
    #[error("{message}")]
    Rejected { message: String },

    /// 전송 계층 실패 (일반 연결 오류 메시지로 표시)
    #[error("unable to reach backend server")]
    Transport(#[source] reqwest::Error),

    /// 에러 바디 없이 비성공 상태 코드만 돌아온 경우
    #[error("backend returned HTTP {status}")]
    Status { status: u16 },

    /// 응답 바디가 계약된 형태가 아님
    #[error("invalid response body")]
    InvalidBody(#[source] reqwest::Error),

    /// 초안 하나당 제출은 동시에 한 건만 허용
    #[error("a submission is already in flight")]
    AlreadyInFlight,
}
