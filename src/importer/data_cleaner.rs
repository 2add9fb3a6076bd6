// ==========================================
// 产品数据导入 - 数据清洗器实现
// ==========================================
// 职责: 空值判定 / 价格解析 / 库存解析 / 停产标记 / 截断
// 红线: 只接受文档列出的字面值，不做泛化
// ==========================================

/// 价格列允许的前导货币符号
pub const CURRENCY_SYMBOL: char = '$';

/// 停产标记唯一的肯定值（不区分大小写）
pub const DISCONTINUED_YES: &str = "yes";

/// 空值判定（空串或仅含空白）
pub fn is_empty_value(value: &str) -> bool {
    value.trim().is_empty()
}

/// 解析价格
///
/// # 规则
/// - TRIM 后为空 → None（缺失，不是 0）
/// - 去掉一个前导 `$` 后按十进制数解析
/// - 无法解析 / NaN → None
/// - 溢出按无穷大保留（交由价格上限/低价规则判定）
pub fn parse_cost(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let digits = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed).trim();
    digits.parse::<f64>().ok().filter(|c| !c.is_nan())
}

/// 解析库存为整数（允许负数，格式校验由 InvalidStockFormat 规则负责）
pub fn parse_stock(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// 库存格式是否合法（非负整数）
pub fn is_valid_stock(value: &str) -> bool {
    parse_stock(value).is_some_and(|s| s >= 0)
}

/// 价格按两位小数舍入（对齐 DECIMAL(10, 2) 列）
pub fn round_cost(cost: f64) -> f64 {
    (cost * 100.0).round() / 100.0
}

/// 停产标记: 仅 "yes"（不区分大小写）为真
pub fn is_discontinued(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(DISCONTINUED_YES)
}

/// 按字符截断（不会切断多字节字符）
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => value[..idx].to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cost() {
        assert_eq!(parse_cost("399.99"), Some(399.99));
        assert_eq!(parse_cost("$4.00"), Some(4.0));
        assert_eq!(parse_cost(" $ 12 "), Some(12.0));
        assert_eq!(parse_cost("1100"), Some(1100.0));
    }

    #[test]
    fn test_parse_cost_empty_is_absent_not_zero() {
        assert_eq!(parse_cost(""), None);
        assert_eq!(parse_cost("   "), None);
        assert_eq!(parse_cost("$"), None);
        assert_eq!(parse_cost("abc"), None);
        assert_eq!(parse_cost("NaN"), None);
    }

    #[test]
    fn test_parse_cost_overflow_is_infinite() {
        assert_eq!(parse_cost("1e400"), Some(f64::INFINITY));
        assert_eq!(parse_cost("$-1e400"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_round_cost() {
        assert_eq!(round_cost(4.999), 5.0);
        assert_eq!(round_cost(399.99), 399.99);
        assert_eq!(round_cost(12.345_1), 12.35);
        assert_eq!(round_cost(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_parse_cost_only_dollar_symbol() {
        // 仅识别 `$`，其他货币符号视为无法解析
        assert_eq!(parse_cost("£5.00"), None);
        assert_eq!(parse_cost("$$5"), None);
    }

    #[test]
    fn test_stock_parsing_and_format() {
        assert_eq!(parse_stock("10"), Some(10));
        assert_eq!(parse_stock(" 0 "), Some(0));
        assert_eq!(parse_stock("-3"), Some(-3));
        assert_eq!(parse_stock("ten"), None);
        assert_eq!(parse_stock("1.5"), None);

        assert!(is_valid_stock("0"));
        assert!(is_valid_stock("20"));
        assert!(!is_valid_stock("-3"));
        assert!(!is_valid_stock("1.5"));
        assert!(!is_valid_stock("lots"));

        // 超出 u32 范围的整数仍是合法库存
        assert_eq!(parse_stock("5000000000"), Some(5_000_000_000));
        assert!(is_valid_stock("5000000000"));
        assert!(!is_valid_stock("-5000000000"));
        assert!(!is_valid_stock("99999999999999999999"));
    }

    #[test]
    fn test_is_discontinued() {
        assert!(is_discontinued("yes"));
        assert!(is_discontinued("YES"));
        assert!(is_discontinued(" Yes "));
        assert!(!is_discontinued(""));
        assert!(!is_discontinued("y"));
        assert!(!is_discontinued("true"));
        assert!(!is_discontinued("no"));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("P000123456789", 10), "P000123456");
        assert_eq!(truncate_chars("TV", 10), "TV");
        assert_eq!(truncate_chars("32” TV", 3), "32”");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_is_empty_value() {
        assert!(is_empty_value(""));
        assert!(is_empty_value("  "));
        assert!(!is_empty_value("0"));
    }
}
