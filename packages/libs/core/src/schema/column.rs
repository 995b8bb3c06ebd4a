//! 컬럼 메타데이터

use serde::{Deserialize, Serialize};

/// 컬럼 메타데이터
///
/// 백엔드 와이어 포맷 `{ name, type, isNullable }`을 그대로 따릅니다.
/// 타입 문자열은 백엔드가 보고하는 값 그대로이며 코어는 해석하지
/// 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// 컬럼 이름
    pub name: String,

    /// 컬럼 타입
    #[serde(rename = "type")]
    pub column_type: String,

    /// NULL 허용 여부
    #[serde(rename = "isNullable")]
    pub is_nullable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_wire_names() {
        let json = r#"{ "name": "salary", "type": "numeric", "isNullable": true }"#;
        let col: Column = serde_json::from_str(json).unwrap();
        assert_eq!(col.name, "salary");
        assert_eq!(col.column_type, "numeric");
        assert!(col.is_nullable);

        let back = serde_json::to_value(&col).unwrap();
        assert_eq!(back["type"], "numeric");
        assert_eq!(back["isNullable"], true);
    }
}
