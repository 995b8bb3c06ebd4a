//! Roles 명령어

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use dg_core::api::HttpGateApi;
use dg_core::{AuthoringSession, RoleRegistry, SubmitOutcome};

/// 선언형 역할 파일 (`--file`)
///
/// ```yaml
/// name: hr_read
/// grants:
///   employees: [name, department]
///   departments: ["*"]
/// row_filters:
///   employees: "department='HR'"
/// ```
#[derive(Debug, Deserialize)]
struct RoleFile {
    name: String,

    /// 테이블 → 허용 컬럼 목록 (`"*"`는 모든 컬럼)
    #[serde(default)]
    grants: BTreeMap<String, Vec<String>>,

    /// 테이블 → 행 필터
    #[serde(default)]
    row_filters: BTreeMap<String, String>,
}

pub async fn list(backend: &str) -> anyhow::Result<()> {
    let api = HttpGateApi::new(backend);

    let mut registry = RoleRegistry::new();
    registry.load(&api).await?;

    if registry.roles().is_empty() {
        println!("No roles.");
        return Ok(());
    }
    for role in registry.roles() {
        println!("- {}", role);
    }
    Ok(())
}

pub async fn create(
    backend: &str,
    name: Option<String>,
    grants: Vec<String>,
    row_filters: Vec<String>,
    file: Option<PathBuf>,
) -> anyhow::Result<()> {
    // --file과 개별 플래그 병합 (--name이 파일의 name보다 우선)
    let mut grant_specs: Vec<(String, Vec<String>)> = Vec::new();
    let mut filters: Vec<(String, String)> = Vec::new();
    let mut role_name = name;

    if let Some(path) = file {
        let content = std::fs::read_to_string(&path)?;
        let role_file: RoleFile = serde_yaml::from_str(&content)?;
        if role_name.is_none() {
            role_name = Some(role_file.name);
        }
        grant_specs.extend(role_file.grants);
        filters.extend(role_file.row_filters);
    }
    for spec in &grants {
        grant_specs.push(parse_grant(spec)?);
    }
    for spec in &row_filters {
        filters.push(parse_row_filter(spec)?);
    }

    let role_name =
        role_name.ok_or_else(|| anyhow::anyhow!("Role name required. Use --name or --file"))?;

    let api = HttpGateApi::new(backend);
    let mut session = AuthoringSession::new();
    session.load_schema(&api).await?;
    if let Err(e) = session.load_roles(&api).await {
        // 역할 목록은 중복 경고에만 쓰이므로 로드 실패가 작성을 막지 않음
        tracing::warn!("could not load existing roles: {}", e);
    }

    if session.registry().contains(&role_name) {
        println!("Warning: role '{}' already exists on the server", role_name);
    }

    for (table, columns) in grant_specs {
        if columns.iter().any(|c| c == "*") {
            // 전체 선택도 컬럼별 토글의 반복일 뿐
            let all: Vec<String> = session
                .catalog()
                .find_table(&table)
                .ok_or_else(|| anyhow::anyhow!("unknown table: {}", table))?
                .column_names()
                .map(|s| s.to_string())
                .collect();
            for col in all {
                session.toggle_column(&table, &col)?;
            }
        } else {
            for col in columns {
                session.toggle_column(&table, &col)?;
            }
        }
    }

    for (table, filter) in filters {
        session.set_row_filter(&table, Some(filter))?;
    }

    if session.draft().is_empty() {
        anyhow::bail!("Nothing selected. Use --grant table:col1,col2");
    }

    match session.submit(&api, &role_name).await? {
        SubmitOutcome::Created => println!("Role '{}' created", role_name),
        SubmitOutcome::SkippedEmptyName => println!("Role name is empty. Nothing submitted."),
    }
    Ok(())
}

/// `table:col1,col2` 파싱
fn parse_grant(spec: &str) -> anyhow::Result<(String, Vec<String>)> {
    let (table, cols) = spec
        .split_once(':')
        .ok_or_else(|| anyhow::anyhow!("Invalid grant '{}'. Expected table:col1,col2", spec))?;

    let table = table.trim();
    let cols: Vec<String> = cols
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    if table.is_empty() || cols.is_empty() {
        anyhow::bail!("Invalid grant '{}'. Expected table:col1,col2", spec);
    }
    Ok((table.to_string(), cols))
}

/// `table=predicate` 파싱 (첫 `=` 기준이므로 predicate에 `=`가 있어도 됨)
fn parse_row_filter(spec: &str) -> anyhow::Result<(String, String)> {
    let (table, filter) = spec
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Invalid row filter '{}'. Expected table=predicate", spec))?;

    let table = table.trim();
    if table.is_empty() || filter.is_empty() {
        anyhow::bail!("Invalid row filter '{}'. Expected table=predicate", spec);
    }
    Ok((table.to_string(), filter.to_string()))
}
