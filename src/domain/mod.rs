// ==========================================
// 产品数据导入 - 领域模型层
// ==========================================
// 职责: 定义导入管道的数据结构与类型
// 红线: 不含数据访问逻辑,不含校验逻辑
// ==========================================

pub mod product;
pub mod types;

// 重导出核心类型
pub use product::{
    columns, FailedRow, Header, ImportReport, NamedRecord, ProductRecord, RawRow,
    ValidationOutcome,
};
pub use types::{RowErrorKind, ValidationFailure};
