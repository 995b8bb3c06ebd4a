//! 테이블 메타데이터

use serde::{Deserialize, Serialize};

use super::column::Column;

/// 테이블 메타데이터
///
/// 와이어 포맷 `{ tableName, columns }`. 하나의 스냅샷 안에서
/// `table_name`은 유일합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// 테이블 이름
    #[serde(rename = "tableName")]
    pub table_name: String,

    /// 컬럼 목록
    pub columns: Vec<Column>,
}

impl TableSchema {
    /// 이름으로 컬럼 조회
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// 컬럼 존재 여부
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// 컬럼 이름 나열
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employees() -> TableSchema {
        serde_json::from_str(
            r#"{
                "tableName": "employees",
                "columns": [
                    { "name": "id", "type": "int", "isNullable": false },
                    { "name": "name", "type": "varchar", "isNullable": false }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_table_wire_names() {
        let table = employees();
        assert_eq!(table.table_name, "employees");
        assert_eq!(table.columns.len(), 2);
    }

    #[test]
    fn test_column_lookup() {
        let table = employees();
        assert!(table.has_column("id"));
        assert!(!table.has_column("salary"));
        assert_eq!(table.column("name").unwrap().column_type, "varchar");
    }
}
