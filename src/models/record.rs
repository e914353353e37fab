use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 原始行: 列名 -> 单元格值 (上游已按列规整, 单元格可能是字符串/数字/null)
pub type RawRow = HashMap<String, serde_json::Value>;

/// 数据来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Official,
    Service,
}

impl Source {
    pub fn display_name(&self) -> &'static str {
        match self {
            Source::Official => "官方订单",
            Source::Service => "客服订单",
        }
    }
}

/// 字段映射: 规范字段名 -> 上传表格列名, 空串视为未映射
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldMapping {
    #[serde(default)]
    pub order_no: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub sales_amount: String,
    #[serde(default)]
    pub cost_amount: String,
}

impl FieldMapping {
    /// 两侧通用必填字段中未映射的字段名
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.order_no.is_empty() {
            missing.push("order_no");
        }
        if self.product_name.is_empty() {
            missing.push("product_name");
        }
        if self.sales_amount.is_empty() {
            missing.push("sales_amount");
        }
        missing
    }

    /// 按 (字段名, 列名) 枚举全部映射项
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("order_no", self.order_no.as_str()),
            ("status", self.status.as_str()),
            ("product_name", self.product_name.as_str()),
            ("sales_amount", self.sales_amount.as_str()),
            ("cost_amount", self.cost_amount.as_str()),
        ]
    }
}

/// 规范化后的订单记录
///
/// 清洗之后每个 order_no 两侧各至多一条 (去重保证)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_no: String,
    pub status: Option<String>, // 仅官方侧映射交易状态
    pub product_name: String,
    pub sales_amount: BigDecimal,
    pub cost_amount: BigDecimal, // 未映射/无法解析时已落到默认成本
    pub source: Source,
}
