//! Register 명령어

use dg_core::api::{GateApi, HttpGateApi};
use dg_core::register::{DbType, RegisterForm};

pub async fn register(
    backend: &str,
    host: String,
    port: String,
    db_name: String,
    username: String,
    password: String,
    db_type: &str,
) -> anyhow::Result<()> {
    let db_type = DbType::from_str(db_type).ok_or_else(|| {
        anyhow::anyhow!("Unknown db type '{}'. Use one of: postgres, mysql, mongo", db_type)
    })?;

    let form = RegisterForm {
        host,
        port,
        db_name,
        username,
        password,
        db_type,
    };
    // 검증 실패(비숫자 포트 등)는 요청 없이 여기서 끝납니다
    let req = form.into_request()?;

    let api = HttpGateApi::new(backend);
    api.register_database(&req).await?;

    println!(
        "Database '{}' registered ({}://{}:{})",
        req.db_name,
        req.db_type.as_str(),
        req.host,
        req.port
    );
    Ok(())
}
