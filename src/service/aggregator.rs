use bigdecimal::{BigDecimal, Zero};

use super::matcher::round2;
use crate::models::{CleaningStats, MatchKind, ReconciledRow, Summary};

/// 对结果行做一次从左到右的线性归约
///
/// 亏损计数独立于分类统计: 匹配行可以状态正常同时利润为负。
pub fn build_summary(
    rows: &[ReconciledRow],
    official_stats: CleaningStats,
    service_stats: CleaningStats,
) -> Summary {
    let mut total_sales = BigDecimal::zero();
    let mut total_cost = BigDecimal::zero();
    let mut total_profit = BigDecimal::zero();
    let mut matched_count = 0;
    let mut missing_count = 0;
    let mut abnormal_count = 0;
    let mut loss_count = 0;

    for row in rows {
        total_sales += &row.sales_amount;
        total_cost += &row.cost_amount;
        total_profit += &row.profit;

        match row.kind {
            MatchKind::Matched => matched_count += 1,
            MatchKind::ServiceMissing => missing_count += 1,
            MatchKind::Abnormal => abnormal_count += 1,
        }
        if row.is_loss {
            loss_count += 1;
        }
    }

    Summary {
        total_sales: round2(&total_sales),
        total_cost: round2(&total_cost),
        total_profit: round2(&total_profit),
        order_count: rows.len(),
        matched_count,
        missing_count,
        abnormal_count,
        loss_count,
        official_stats,
        service_stats,
    }
}
