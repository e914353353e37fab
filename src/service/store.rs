use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ReconcileError;
use crate::models::{ReconciledRow, Report, RowView, Summary};

/// 分页每页行数的上下限
const MIN_PAGE_SIZE: usize = 10;
const MAX_PAGE_SIZE: usize = 500;

/// 分页结果
#[derive(Debug, Clone, Serialize)]
pub struct PageResult {
    pub records: Vec<RowView>,
    pub page: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub total_pages: usize,
    pub summary: Summary,
}

/// 报告仓库: 不透明 ID -> 不可变报告
///
/// 新键插入与已发布键读取并发安全 (DashMap 分片锁),
/// 报告入库后不再写入, 读写不会在同一报告上竞争。
#[derive(Debug, Default)]
pub struct ReportStore {
    reports: DashMap<String, Arc<Report>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self {
            reports: DashMap::new(),
        }
    }

    /// 存入报告并返回新生成的 ID; 重新比对永远得到新 ID, 不原地更新
    pub fn create(&self, rows: Vec<ReconciledRow>, summary: Summary) -> String {
        let report_id = Uuid::new_v4().simple().to_string();
        let report = Arc::new(Report {
            rows,
            summary,
            created_at: Utc::now(),
        });
        self.reports.insert(report_id.clone(), report);
        report_id
    }

    fn get(&self, report_id: &str) -> Result<Arc<Report>, ReconcileError> {
        self.reports
            .get(report_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| ReconcileError::ReportNotFound(report_id.to_string()))
    }

    /// 取一页, page 为 1 起始
    ///
    /// page_size 钳制到 [10, 500]; 页码越界直接拒绝而非钳制,
    /// 让客户端状态与服务端保持一致。
    pub fn page(
        &self,
        report_id: &str,
        page: usize,
        page_size: usize,
    ) -> Result<PageResult, ReconcileError> {
        let report = self.get(report_id)?;
        let page_size = page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        let total_rows = report.rows.len();
        let total_pages = std::cmp::max(total_rows.div_ceil(page_size), 1);

        if page < 1 || page > total_pages {
            return Err(ReconcileError::PageOutOfRange { page, total_pages });
        }

        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total_rows);
        let records = report.rows[start..end].iter().map(ReconciledRow::view).collect();

        Ok(PageResult {
            records,
            page,
            page_size,
            total_rows,
            total_pages,
            summary: report.summary.clone(),
        })
    }

    /// 导出用: 完整报告
    pub fn export(&self, report_id: &str) -> Result<Arc<Report>, ReconcileError> {
        self.get(report_id)
    }
}
