//! 테이블/컬럼 메타데이터 스냅샷
//!
//! # 개요
//!
//! 스키마는 백엔드가 대상 데이터베이스에서 추출해 `GET /db-schema`로
//! 내려 줍니다. 이 모듈은 그 결과를 세션 단위 불변 스냅샷으로 보관할
//! 뿐, 스키마를 직접 해석하거나 변환하지 않습니다.
//!
//! # 모듈 구조
//!
//! - `column`: 컬럼 메타데이터
//! - `table`: 테이블 메타데이터
//! - `catalog`: 세션 단위 스냅샷 (SchemaCatalog)

mod catalog;
mod column;
mod table;

pub use catalog::SchemaCatalog;
pub use column::Column;
pub use table::TableSchema;
