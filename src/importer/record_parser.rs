// ==========================================
// 产品数据导入 - 行记录解析器实现
// ==========================================
// 阶段 1: 原始行 → 列名映射记录
// 职责: 按表头位置映射字段 + 字段数量校验
// 红线: 不做类型转换，所有值保持原始字符串
// ==========================================

use crate::domain::product::{Header, NamedRecord, RawRow};
use crate::importer::error::RowError;
use std::collections::HashMap;

pub struct RecordParser {
    header: Header,
}

impl RecordParser {
    pub fn new(header: Header) -> Self {
        Self { header }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// 将原始行映射为 NamedRecord
    ///
    /// # 返回
    /// - Ok(NamedRecord): 字段数与表头一致
    /// - Err(RowError::FieldCountMismatch): 字段数不一致
    pub fn parse(&self, row: &RawRow) -> Result<NamedRecord, RowError> {
        if row.fields.len() != self.header.len() {
            return Err(RowError::FieldCountMismatch {
                expected: self.header.len(),
                actual: row.fields.len(),
            });
        }

        let values: HashMap<String, String> = self
            .header
            .names()
            .iter()
            .cloned()
            .zip(row.fields.iter().cloned())
            .collect();

        Ok(NamedRecord::new(row.line_number, values, row.raw_text()))
    }
}
