use std::sync::Arc;

use bigdecimal::BigDecimal;
use serde::Serialize;
use tracing::info;

use super::cleaner::{self, StatusFilter};
use super::store::{PageResult, ReportStore};
use super::{aggregator, matcher, normalizer};
use crate::config::ReconcileConfig;
use crate::error::ReconcileError;
use crate::models::{FieldMapping, RawRow, Report, Source, Summary};

/// 比对完成后的回执
#[derive(Debug, Clone, Serialize)]
pub struct CompareOutcome {
    pub report_id: String,
    pub summary: Summary,
    pub total_rows: usize,
}

/// 对账服务: 规范化 -> 清洗 -> 匹配分类 -> 汇总 -> 入库
///
/// 管线本身是纯的单线程计算, 不同上传互不相干,
/// 唯一共享状态是报告仓库。
pub struct ReconcileService {
    status_filter: StatusFilter,
    store: ReportStore,
}

impl ReconcileService {
    pub fn new(config: &ReconcileConfig) -> Self {
        Self {
            status_filter: StatusFilter::new(config.allowed_status.iter().cloned()),
            store: ReportStore::new(),
        }
    }

    pub fn compare(
        &self,
        official_rows: &[RawRow],
        service_rows: &[RawRow],
        official_mapping: &FieldMapping,
        service_mapping: &FieldMapping,
        default_cost: BigDecimal,
    ) -> Result<CompareOutcome, ReconcileError> {
        // 1. 规范化, 映射缺失在此处即被拒绝
        let official = normalizer::normalize_rows(
            official_rows,
            official_mapping,
            Source::Official,
            &default_cost,
        )?;
        let service = normalizer::normalize_rows(
            service_rows,
            service_mapping,
            Source::Service,
            &default_cost,
        )?;

        // 2. 清洗, 官方侧按状态保留名单过滤 (名单为空则关闭)
        let filter = (!self.status_filter.is_empty()).then_some(&self.status_filter);
        let (official, official_stats) =
            cleaner::clean(official, filter, Source::Official.display_name());
        let (service, service_stats) =
            cleaner::clean(service, None, Source::Service.display_name());
        info!(
            "清洗完成: 官方 {}/{} 行保留, 客服 {}/{} 行保留",
            official_stats.kept_rows,
            official_stats.total_rows,
            service_stats.kept_rows,
            service_stats.total_rows
        );

        // 3. 匹配 + 分类
        let rows = matcher::match_and_classify(official, service);

        // 4. 汇总
        let summary = aggregator::build_summary(&rows, official_stats, service_stats);
        info!(
            "比对完成: 订单总数 {}, 匹配 {}, 客服漏记 {}, 异常 {}, 亏损 {}",
            summary.order_count,
            summary.matched_count,
            summary.missing_count,
            summary.abnormal_count,
            summary.loss_count
        );

        // 5. 入库
        let total_rows = rows.len();
        let report_id = self.store.create(rows, summary.clone());
        info!("报告已生成: {}", report_id);

        Ok(CompareOutcome {
            report_id,
            summary,
            total_rows,
        })
    }

    pub fn page(
        &self,
        report_id: &str,
        page: usize,
        page_size: usize,
    ) -> Result<PageResult, ReconcileError> {
        self.store.page(report_id, page, page_size)
    }

    pub fn export(&self, report_id: &str) -> Result<Arc<Report>, ReconcileError> {
        self.store.export(report_id)
    }
}
