// ==========================================
// 产品数据导入 - 产品领域模型
// ==========================================
// 用途: 导入管道各阶段的数据结构
// 流程: RawRow → NamedRecord → ProductRecord → ImportReport
// ==========================================

use crate::importer::error::RowError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// 识别的列名（CSV 表头）
// ==========================================
pub mod columns {
    pub const PRODUCT_CODE: &str = "Product Code";
    pub const PRODUCT_NAME: &str = "Product Name";
    pub const PRODUCT_DESCRIPTION: &str = "Product Description";
    pub const STOCK: &str = "Stock";
    pub const COST: &str = "Cost in GBP";
    pub const DISCONTINUED: &str = "Discontinued";

    /// 全部识别列（按文件约定顺序）
    pub const ALL: [&str; 6] = [
        PRODUCT_CODE,
        PRODUCT_NAME,
        PRODUCT_DESCRIPTION,
        STOCK,
        COST,
        DISCONTINUED,
    ];
}

// ==========================================
// RawRow - 原始行
// ==========================================
// 生命周期: 读取 → 分类 → 丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub line_number: usize,  // 源文件行号（1 起）
    pub fields: Vec<String>, // 原始字段值（保持原顺序）
}

impl RawRow {
    pub fn new(line_number: usize, fields: Vec<String>) -> Self {
        Self {
            line_number,
            fields,
        }
    }

    /// 原始文本（字段按原顺序以逗号拼接）
    pub fn raw_text(&self) -> String {
        self.fields.join(",")
    }

    /// 空白行: 所有字段为空或仅含空白
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.trim().is_empty())
    }
}

// ==========================================
// Header - 表头
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(|n| n.into().trim().to_string()).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// 表头中缺失的识别列
    pub fn missing_columns(&self) -> Vec<&'static str> {
        columns::ALL
            .iter()
            .copied()
            .filter(|c| !self.names.iter().any(|n| n == c))
            .collect()
    }
}

// ==========================================
// NamedRecord - 列名 → 原始值
// ==========================================
// 仅在字段数与表头一致时构建
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRecord {
    pub line_number: usize,
    values: HashMap<String, String>,
    raw_text: String,
}

impl NamedRecord {
    pub(crate) fn new(line_number: usize, values: HashMap<String, String>, raw_text: String) -> Self {
        Self {
            line_number,
            values,
            raw_text,
        }
    }

    /// 读取字段原始值（列不存在时视为空串）
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// 原始行文本（用于错误行报告）
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

// ==========================================
// ValidationOutcome - 校验结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid(NamedRecord),
    Rejected {
        reason: crate::domain::types::ValidationFailure,
        raw_row: String,
    },
}

// ==========================================
// ProductRecord - 落库形态（Canonical Record）
// ==========================================
// 对齐: tbl_product_data 表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_code: String,                    // ≤10 字符
    pub product_name: String,                    // ≤50 字符
    pub product_desc: String,                    // ≤255 字符
    pub stock: i64,                              // 库存（非负整数）
    pub cost: Option<f64>,                       // 价格（已去除货币符号，可空）
    pub discontinued_at: Option<DateTime<Utc>>,  // 停产时间（Discontinued=yes 时为处理时刻）
    pub added_at: DateTime<Utc>,                 // 导入时间
}

// ==========================================
// FailedRow - 错误行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedRow {
    pub line_number: usize,
    pub error: RowError,
    pub raw_text: String,
}

// ==========================================
// ImportReport - 导入报告
// ==========================================
// 不变量: processed == success + error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub run_id: String,                // 本次运行 ID（UUID）
    pub file_path: Option<String>,     // 源文件路径
    pub dry_run: bool,                 // 是否测试模式
    pub processed: usize,              // 处理行数（不含空白行）
    pub success: usize,                // 成功行数
    pub error: usize,                  // 错误行数
    pub failed_rows: Vec<FailedRow>,   // 错误行（按出现顺序）
    pub interrupted: bool,             // 是否提前结束（停止信号/读取错误）
    pub elapsed_ms: u128,              // 耗时（毫秒）
}

impl ImportReport {
    pub fn new(run_id: String, file_path: Option<String>, dry_run: bool) -> Self {
        Self {
            run_id,
            file_path,
            dry_run,
            processed: 0,
            success: 0,
            error: 0,
            failed_rows: Vec::new(),
            interrupted: false,
            elapsed_ms: 0,
        }
    }

    pub fn record_success(&mut self) {
        self.processed += 1;
        self.success += 1;
    }

    pub fn record_failure(&mut self, line_number: usize, error: RowError, raw_text: String) {
        self.processed += 1;
        self.error += 1;
        self.failed_rows.push(FailedRow {
            line_number,
            error,
            raw_text,
        });
    }

    /// 错误行原始文本列表（供人工修正后重新提交）
    pub fn failed_raw_rows(&self) -> Vec<&str> {
        self.failed_rows.iter().map(|r| r.raw_text.as_str()).collect()
    }

    pub fn is_balanced(&self) -> bool {
        self.processed == self.success + self.error
    }
}
