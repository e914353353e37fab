use bigdecimal::{BigDecimal, RoundingMode, Zero};
use indexmap::{IndexMap, IndexSet};

use crate::models::{MatchKind, OrderRecord, ReconciledRow};

/// 金额统一保留两位小数, 四舍五入
pub(crate) fn round2(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

/// 匹配 + 分类
///
/// 1. 官方记录按订单号建保序索引
/// 2. 按原始次序遍历客服记录: 命中即配对并消费官方键, 未命中为异常订单
/// 3. 遍历结束后按原始次序补入未被消费的官方记录 (客服漏记)
///
/// 序号按该合并遍历的首见顺序从 1 递增, 下游依赖这一行序。
/// 任一侧为空集时退化为全部漏记/全部异常, 无需特判。
pub fn match_and_classify(
    official: Vec<OrderRecord>,
    service: Vec<OrderRecord>,
) -> Vec<ReconciledRow> {
    let official_index: IndexMap<String, OrderRecord> = official
        .into_iter()
        .map(|record| (record.order_no.clone(), record))
        .collect();

    let mut consumed: IndexSet<String> = IndexSet::with_capacity(official_index.len());
    let mut rows = Vec::with_capacity(official_index.len() + service.len());

    for svc in &service {
        let sequence_no = rows.len() + 1;
        match official_index.get(&svc.order_no) {
            Some(off) => {
                consumed.insert(svc.order_no.clone());
                rows.push(matched_row(sequence_no, off, svc));
            }
            None => rows.push(single_row(sequence_no, svc, MatchKind::Abnormal)),
        }
    }

    for (order_no, off) in &official_index {
        if consumed.contains(order_no) {
            continue;
        }
        let sequence_no = rows.len() + 1;
        rows.push(single_row(sequence_no, off, MatchKind::ServiceMissing));
    }

    rows
}

/// 双侧命中时的取值优先级: 官方非空/非零优先, 客服侧兜底
fn matched_row(sequence_no: usize, official: &OrderRecord, service: &OrderRecord) -> ReconciledRow {
    let sales = if official.sales_amount.is_zero() {
        &service.sales_amount
    } else {
        &official.sales_amount
    };
    let cost = if official.cost_amount.is_zero() {
        &service.cost_amount
    } else {
        &official.cost_amount
    };
    let product_name = if official.product_name.is_empty() {
        &service.product_name
    } else {
        &official.product_name
    };
    let tx_status = official
        .status
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_default();

    build_row(
        sequence_no,
        official.order_no.clone(),
        product_name.clone(),
        sales,
        cost,
        MatchKind::Matched,
        tx_status,
    )
}

fn single_row(sequence_no: usize, record: &OrderRecord, kind: MatchKind) -> ReconciledRow {
    build_row(
        sequence_no,
        record.order_no.clone(),
        record.product_name.clone(),
        &record.sales_amount,
        &record.cost_amount,
        kind,
        record.status.clone().unwrap_or_default(),
    )
}

fn build_row(
    sequence_no: usize,
    order_no: String,
    product_name: String,
    sales: &BigDecimal,
    cost: &BigDecimal,
    kind: MatchKind,
    tx_status: String,
) -> ReconciledRow {
    let sales_amount = round2(sales);
    let cost_amount = round2(cost);
    // 两位小数之差, 汇总守恒在该精度下精确成立
    let profit = &sales_amount - &cost_amount;
    let is_loss = profit < BigDecimal::zero();

    ReconciledRow {
        sequence_no,
        order_no,
        product_name,
        sales_amount,
        cost_amount,
        profit,
        kind,
        tx_status,
        is_loss,
    }
}
