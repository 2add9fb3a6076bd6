// ==========================================
// 产品数据导入 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分层: ImportError（运行级，中止导入）/ RowError（行级，记录后继续）
// ==========================================

use crate::domain::types::{RowErrorKind, ValidationFailure};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 导入模块错误类型（运行级）
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件不可读 ({path}): {message}")]
    FileUnavailable { path: String, message: String },

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),
}

impl ImportError {
    /// 文件级不可用（未开始处理任何行）
    pub fn is_file_unavailable(&self) -> bool {
        matches!(
            self,
            ImportError::FileNotFound(_) | ImportError::FileUnavailable { .. }
        )
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            ImportError::FileReadError(err.to_string())
        } else {
            ImportError::CsvParseError(err.to_string())
        }
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

/// 行级错误（记录到错误行列表，不中止导入）
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowError {
    #[error("字段数量不匹配: 期望 {expected}，实际 {actual}")]
    FieldCountMismatch { expected: usize, actual: usize },

    #[error("校验未通过: {reason}")]
    Validation { reason: ValidationFailure },

    #[error("写入失败: {message}")]
    InsertFailed { message: String },
}

impl RowError {
    pub fn kind(&self) -> RowErrorKind {
        match self {
            RowError::FieldCountMismatch { .. } => RowErrorKind::Structure,
            RowError::Validation { .. } => RowErrorKind::Validation,
            RowError::InsertFailed { .. } => RowErrorKind::Persistence,
        }
    }

    /// 机器可读原因代码
    pub fn code(&self) -> &'static str {
        match self {
            RowError::FieldCountMismatch { .. } => "fieldCountMismatch",
            RowError::Validation { reason } => reason.code(),
            RowError::InsertFailed { .. } => "insertFailed",
        }
    }
}

impl From<ValidationFailure> for RowError {
    fn from(reason: ValidationFailure) -> Self {
        RowError::Validation { reason }
    }
}
