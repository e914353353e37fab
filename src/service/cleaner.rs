use indexmap::IndexSet;

use crate::models::{CleaningStats, OrderRecord};

/// 交易状态保留名单, 仅对官方侧生效
#[derive(Debug, Clone)]
pub struct StatusFilter {
    allowed: IndexSet<String>,
}

impl StatusFilter {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn retains(&self, status: Option<&str>) -> bool {
        status.is_some_and(|s| self.allowed.contains(s))
    }
}

/// 单侧清洗: 空单号剔除 -> 按单号去重 -> 状态过滤(仅官方侧传入名单)
///
/// 三步顺序固定, 计数依赖该顺序。去重严格首见保留, 不做字段合并。
/// 幸存行保持原有次序, 对同一输出重复清洗不产生任何新计数。
pub fn clean(
    records: Vec<OrderRecord>,
    status_filter: Option<&StatusFilter>,
    source_name: &str,
) -> (Vec<OrderRecord>, CleaningStats) {
    let total_rows = records.len();
    let mut empty_order_removed = 0;
    let mut duplicate_rows = 0;
    let mut status_filtered_rows = 0;

    let mut seen: IndexSet<String> = IndexSet::with_capacity(total_rows);
    let mut kept = Vec::with_capacity(total_rows);

    for record in records {
        // 1. 空单号剔除
        if record.order_no.trim().is_empty() {
            empty_order_removed += 1;
            continue;
        }
        // 2. 按单号去重, 只有后续重复行计数
        if !seen.insert(record.order_no.clone()) {
            duplicate_rows += 1;
            continue;
        }
        // 3. 状态过滤
        if let Some(filter) = status_filter {
            if !filter.retains(record.status.as_deref()) {
                status_filtered_rows += 1;
                continue;
            }
        }
        kept.push(record);
    }

    let stats = CleaningStats {
        source: source_name.to_string(),
        total_rows,
        empty_order_removed,
        duplicate_rows,
        status_filtered_rows,
        kept_rows: kept.len(),
    };
    (kept, stats)
}
