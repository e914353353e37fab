use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Summary;

/// 比对结果分类 (内部闭集, 展示标签只在序列化边界出现)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchKind {
    /// 两侧均存在
    Matched,
    /// 仅官方存在, 客服漏记
    ServiceMissing,
    /// 仅客服存在, 无官方对应记录
    Abnormal,
}

impl MatchKind {
    pub fn label(&self) -> &'static str {
        match self {
            MatchKind::Matched => "匹配",
            MatchKind::ServiceMissing => "客服漏记",
            MatchKind::Abnormal => "异常订单",
        }
    }
}

/// 对账结果行, 匹配阶段一次生成, 此后不可变
#[derive(Debug, Clone, Serialize)]
pub struct ReconciledRow {
    /// 1 起始, 按合并遍历首见顺序递增
    pub sequence_no: usize,
    pub order_no: String,
    pub product_name: String,
    pub sales_amount: BigDecimal,
    pub cost_amount: BigDecimal,
    pub profit: BigDecimal,
    pub kind: MatchKind,
    /// 交易状态原文 (匹配行透传官方状态)
    pub tx_status: String,
    /// 亏损标记, 独立于分类
    pub is_loss: bool,
}

impl ReconciledRow {
    /// 状态列展示值: 匹配行优先官方交易状态, 未匹配行用分类标签
    pub fn status_label(&self) -> &str {
        match self.kind {
            MatchKind::Matched if !self.tx_status.is_empty() => &self.tx_status,
            _ => self.kind.label(),
        }
    }

    pub fn view(&self) -> RowView {
        RowView {
            sequence_no: self.sequence_no,
            order_no: self.order_no.clone(),
            product_name: self.product_name.clone(),
            sales_amount: self.sales_amount.clone(),
            cost_amount: self.cost_amount.clone(),
            profit: self.profit.clone(),
            status: self.status_label().to_string(),
            is_loss: self.is_loss,
        }
    }
}

/// 行的对外形态, 分页 JSON 与 CSV 导出共用
#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    pub sequence_no: usize,
    pub order_no: String,
    pub product_name: String,
    pub sales_amount: BigDecimal,
    pub cost_amount: BigDecimal,
    pub profit: BigDecimal,
    pub status: String,
    pub is_loss: bool,
}

/// 报告: 有序结果行 + 汇总, 以不透明 ID 寻址
///
/// 生成后不可变, 重新比对永远产生新报告而非原地更新
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub rows: Vec<ReconciledRow>,
    pub summary: Summary,
    pub created_at: DateTime<Utc>,
}
