// ==========================================
// 产品数据导入 - 校验管道实现
// ==========================================
// 阶段 2: 有序规则链，首个失败规则即短路
// 顺序: 必填字段 → 低价低库存 → 价格上限 → 库存格式
// 红线: 管道无副作用（日志/计数由导入驱动负责）
// ==========================================

use crate::domain::product::{columns, NamedRecord, ValidationOutcome};
use crate::domain::types::ValidationFailure;
use crate::importer::data_cleaner::{is_empty_value, is_valid_stock, parse_cost, parse_stock};

/// 低价阈值（价格 < 该值视为低价）
pub const MIN_COST: f64 = 5.0;
/// 低库存阈值（库存 < 该值视为低库存）
pub const MIN_STOCK: i64 = 10;
/// 价格上限（价格 > 该值拒绝）
pub const MAX_COST: f64 = 1000.0;

// ==========================================
// ValidationRule - 单条规则
// ==========================================
#[derive(Clone, Copy)]
pub struct ValidationRule {
    pub name: &'static str,
    pub reason: ValidationFailure,
    passes: fn(&NamedRecord) -> bool,
}

impl ValidationRule {
    pub fn passes(&self, record: &NamedRecord) -> bool {
        (self.passes)(record)
    }
}

impl std::fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationRule")
            .field("name", &self.name)
            .field("reason", &self.reason)
            .finish()
    }
}

// ==========================================
// ValidationPipeline - 规则链
// ==========================================
#[derive(Debug, Clone)]
pub struct ValidationPipeline {
    rules: Vec<ValidationRule>,
}

impl Default for ValidationPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl ValidationPipeline {
    /// 标准规则链（顺序固定）
    pub fn standard() -> Self {
        Self {
            rules: vec![
                ValidationRule {
                    name: "required_fields",
                    reason: ValidationFailure::MissingRequiredField,
                    passes: has_required_fields,
                },
                ValidationRule {
                    name: "low_value_low_stock",
                    reason: ValidationFailure::LowValueLowStock,
                    passes: passes_low_value_check,
                },
                ValidationRule {
                    name: "cost_ceiling",
                    reason: ValidationFailure::CostTooHigh,
                    passes: passes_cost_ceiling,
                },
                ValidationRule {
                    name: "stock_format",
                    reason: ValidationFailure::InvalidStockFormat,
                    passes: has_valid_stock_format,
                },
            ],
        }
    }

    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// 首个未通过的规则（None 表示全部通过）
    pub fn first_failure(&self, record: &NamedRecord) -> Option<ValidationFailure> {
        self.rules
            .iter()
            .find(|rule| !rule.passes(record))
            .map(|rule| rule.reason)
    }

    /// 执行校验，拒绝时保留原始行文本
    pub fn validate(&self, record: NamedRecord) -> ValidationOutcome {
        match self.first_failure(&record) {
            None => ValidationOutcome::Valid(record),
            Some(reason) => ValidationOutcome::Rejected {
                reason,
                raw_row: record.raw_text().to_string(),
            },
        }
    }
}

// ==========================================
// 规则实现
// ==========================================

/// 规则 1: 编码/名称/描述非空；库存非空（"0" 是合法值，不视为空）
fn has_required_fields(record: &NamedRecord) -> bool {
    let text_fields_present = [
        columns::PRODUCT_CODE,
        columns::PRODUCT_NAME,
        columns::PRODUCT_DESCRIPTION,
    ]
    .iter()
    .all(|c| !is_empty_value(record.get(c)));

    text_fields_present && !is_empty_value(record.get(columns::STOCK))
}

/// 规则 2: 价格 < 5 且库存 < 10 → 拒绝
///
/// 价格缺失按 "< 5" 处理；库存无法解析按 0 处理
fn passes_low_value_check(record: &NamedRecord) -> bool {
    let low_cost = parse_cost(record.get(columns::COST)).map_or(true, |c| c < MIN_COST);
    let stock = parse_stock(record.get(columns::STOCK)).unwrap_or(0);
    !(low_cost && stock < MIN_STOCK)
}

/// 规则 3: 价格 > 1000 → 拒绝（价格缺失不触发）
fn passes_cost_ceiling(record: &NamedRecord) -> bool {
    parse_cost(record.get(columns::COST)).map_or(true, |c| c <= MAX_COST)
}

/// 规则 4: 库存必须为非负整数
fn has_valid_stock_format(record: &NamedRecord) -> bool {
    is_valid_stock(record.get(columns::STOCK))
}
