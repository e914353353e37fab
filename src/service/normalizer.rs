use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::error::ReconcileError;
use crate::models::{FieldMapping, OrderRecord, RawRow, Source};

/// 订单号规范化: 去掉首尾与内部空白
pub fn normalize_order_no(value: &str) -> String {
    value.split_whitespace().collect()
}

/// 单元格取文本: 字符串去首尾空白, 数字按原样转写, null/缺列视为空
pub fn cell_text(value: Option<&serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::String(s)) => s.trim().to_string(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// 宽松数值解析: 剔除货币符号/千分位/空白后解析
///
/// 解析失败不报错, 落到调用方给定的默认值。脏数据静默归零会低估利润,
/// 这是有意的取舍, 由测试钉死。
pub fn to_number(text: &str, default: &BigDecimal) -> BigDecimal {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '¥' | '￥' | ',' | '，'))
        .collect();
    if cleaned.is_empty() {
        return default.clone();
    }
    BigDecimal::from_str(&cleaned).unwrap_or_else(|_| default.clone())
}

/// 映射校验, 在处理任何行之前完成
///
/// 两侧必填 order_no/product_name/sales_amount, 官方侧另须映射 status
/// (清洗阶段按状态过滤)。已映射的列至少要在一行中出现。
pub fn validate_mapping(
    mapping: &FieldMapping,
    source: Source,
    rows: &[RawRow],
) -> Result<(), ReconcileError> {
    let mut missing = mapping.missing_required();
    if source == Source::Official && mapping.status.is_empty() {
        missing.push("status");
    }
    if !missing.is_empty() {
        return Err(ReconcileError::MissingField {
            side: source.display_name(),
            fields: missing.join(", "),
        });
    }

    for (field, column) in mapping.entries() {
        if column.is_empty() || rows.is_empty() {
            continue;
        }
        if !rows.iter().any(|row| row.contains_key(column)) {
            return Err(ReconcileError::UnknownColumn {
                side: source.display_name(),
                field,
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// 按字段映射把原始行规范化为 OrderRecord
///
/// 未映射 cost_amount 时整列取默认成本; 未映射 status 时为 None。
pub fn normalize_rows(
    rows: &[RawRow],
    mapping: &FieldMapping,
    source: Source,
    default_cost: &BigDecimal,
) -> Result<Vec<OrderRecord>, ReconcileError> {
    validate_mapping(mapping, source, rows)?;

    let zero = BigDecimal::from(0);
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let order_no = normalize_order_no(&cell_text(row.get(&mapping.order_no)));
        let product_name = cell_text(row.get(&mapping.product_name));
        let sales_amount = to_number(&cell_text(row.get(&mapping.sales_amount)), &zero);
        let cost_amount = if mapping.cost_amount.is_empty() {
            default_cost.clone()
        } else {
            to_number(&cell_text(row.get(&mapping.cost_amount)), default_cost)
        };
        let status = if mapping.status.is_empty() {
            None
        } else {
            Some(cell_text(row.get(&mapping.status)))
        };

        records.push(OrderRecord {
            order_no,
            status,
            product_name,
            sales_amount,
            cost_amount,
            source,
        });
    }
    Ok(records)
}
