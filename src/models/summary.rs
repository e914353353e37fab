use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 单侧清洗计数, 清洗完成后不再变更
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningStats {
    pub source: String,
    pub total_rows: usize,
    pub empty_order_removed: usize,
    pub duplicate_rows: usize,
    pub status_filtered_rows: usize,
    pub kept_rows: usize,
}

/// 全量结果行的汇总统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_sales: BigDecimal,
    pub total_cost: BigDecimal,
    pub total_profit: BigDecimal,
    pub order_count: usize,
    pub matched_count: usize,
    pub missing_count: usize,
    pub abnormal_count: usize,
    /// 亏损行数, 与分类正交 (匹配行也可能亏损)
    pub loss_count: usize,
    pub official_stats: CleaningStats,
    pub service_stats: CleaningStats,
}
