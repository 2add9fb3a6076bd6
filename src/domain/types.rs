// ==========================================
// 产品数据导入 - 领域类型定义
// ==========================================
// 职责: 行级拒绝原因 / 错误分类
// 红线: 一行最多一个拒绝原因（首个失败规则生效）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 校验失败原因 (Validation Failure)
// ==========================================
// 与校验规则一一对应,顺序即规则评估顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationFailure {
    MissingRequiredField, // 必填字段缺失
    LowValueLowStock,     // 价格 < 5 且库存 < 10
    CostTooHigh,          // 价格 > 1000
    InvalidStockFormat,   // 库存格式非法
}

impl ValidationFailure {
    /// 稳定的机器可读代码（日志 / JSON 报告使用）
    pub fn code(&self) -> &'static str {
        match self {
            ValidationFailure::MissingRequiredField => "missingRequiredField",
            ValidationFailure::LowValueLowStock => "lowValueLowStock",
            ValidationFailure::CostTooHigh => "costTooHigh",
            ValidationFailure::InvalidStockFormat => "invalidStockFormat",
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::MissingRequiredField => write!(f, "必填字段缺失"),
            ValidationFailure::LowValueLowStock => {
                write!(f, "价格低于 5 且库存少于 10")
            }
            ValidationFailure::CostTooHigh => write!(f, "价格超过 1000"),
            ValidationFailure::InvalidStockFormat => write!(f, "库存格式错误"),
        }
    }
}

// ==========================================
// 行级错误分类 (Row Error Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowErrorKind {
    Structure,   // 字段数量与表头不一致
    Validation,  // 业务规则校验未通过
    Persistence, // 校验通过但写入失败
}

impl fmt::Display for RowErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowErrorKind::Structure => write!(f, "STRUCTURE"),
            RowErrorKind::Validation => write!(f, "VALIDATION"),
            RowErrorKind::Persistence => write!(f, "PERSISTENCE"),
        }
    }
}
