// ==========================================
// 产品数据导入 - 记录转换器实现
// ==========================================
// 阶段 3: 校验通过的记录 → 落库形态
// 职责: 字段截断 / 数值转换 / 派生时间戳
// 前提: 输入已通过全部格式校验，本阶段无失败分支
// ==========================================

use crate::domain::product::{columns, NamedRecord, ProductRecord};
use crate::importer::data_cleaner::{
    is_discontinued, parse_cost, parse_stock, round_cost, truncate_chars,
};
use chrono::{DateTime, Utc};

/// 产品编码最大长度
pub const MAX_CODE_CHARS: usize = 10;
/// 产品名称最大长度
pub const MAX_NAME_CHARS: usize = 50;
/// 产品描述最大长度
pub const MAX_DESC_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, Default)]
pub struct RecordTransformer;

impl RecordTransformer {
    /// 转换为 ProductRecord
    ///
    /// # 规则
    /// - 编码/名称/描述按字符静默截断
    /// - discontinued_at = now 当且仅当 Discontinued 为 "yes"
    /// - 价格保留两位小数（校验已在舍入前完成）
    /// - added_at = now
    pub fn transform(&self, record: &NamedRecord, now: DateTime<Utc>) -> ProductRecord {
        ProductRecord {
            product_code: truncate_chars(record.get(columns::PRODUCT_CODE), MAX_CODE_CHARS),
            product_name: truncate_chars(record.get(columns::PRODUCT_NAME), MAX_NAME_CHARS),
            product_desc: truncate_chars(
                record.get(columns::PRODUCT_DESCRIPTION),
                MAX_DESC_CHARS,
            ),
            stock: parse_stock(record.get(columns::STOCK)).unwrap_or_default(),
            cost: parse_cost(record.get(columns::COST)).map(round_cost),
            discontinued_at: is_discontinued(record.get(columns::DISCONTINUED)).then_some(now),
            added_at: now,
        }
    }
}
