use axum::extract::{Json, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use bigdecimal::{BigDecimal, Zero};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ReconcileError;
use crate::models::{FieldMapping, RawRow, Report, Summary};
use crate::service::{normalizer, PageResult, ReconcileService};

/// 比对请求体: 两侧行数据 + 字段映射 + 默认成本
///
/// default_cost 兼容数字与字符串两种写法, 与单元格同样宽松解析
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub official_rows: Vec<RawRow>,
    pub service_rows: Vec<RawRow>,
    pub official_mapping: FieldMapping,
    pub service_mapping: FieldMapping,
    #[serde(default)]
    pub default_cost: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub ok: bool,
    pub report_id: String,
    pub summary: Summary,
    pub total_rows: usize,
}

#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub result: PageResult,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    50
}

fn error_response(err: ReconcileError) -> Response {
    let status = match &err {
        ReconcileError::MissingField { .. }
        | ReconcileError::UnknownColumn { .. }
        | ReconcileError::PageOutOfRange { .. } => StatusCode::BAD_REQUEST,
        ReconcileError::ReportNotFound(_) => StatusCode::NOT_FOUND,
    };
    let body = ErrorBody {
        ok: false,
        message: err.to_string(),
    };
    (status, Json(body)).into_response()
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 比对接口: 生成对账报告并返回汇总与报告 ID
pub async fn compare(
    State(service): State<Arc<ReconcileService>>,
    Json(req): Json<CompareRequest>,
) -> Response {
    let default_cost = normalizer::to_number(
        &normalizer::cell_text(Some(&req.default_cost)),
        &BigDecimal::zero(),
    );

    match service.compare(
        &req.official_rows,
        &req.service_rows,
        &req.official_mapping,
        &req.service_mapping,
        default_cost,
    ) {
        Ok(outcome) => {
            let response = CompareResponse {
                ok: true,
                report_id: outcome.report_id,
                summary: outcome.summary,
                total_rows: outcome.total_rows,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// 分页查询对账结果
pub async fn report_page(
    State(service): State<Arc<ReconcileService>>,
    Path(report_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    match service.page(&report_id, query.page, query.page_size) {
        Ok(result) => {
            let response = PageResponse { ok: true, result };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// 导出对账结果为 CSV 附件
pub async fn export_report(
    State(service): State<Arc<ReconcileService>>,
    Path(report_id): Path<String>,
) -> Response {
    let report = match service.export(&report_id) {
        Ok(report) => report,
        Err(e) => return error_response(e),
    };

    match write_csv(&report) {
        Ok(bytes) => {
            let filename = format!("order_recon_{}.csv", Local::now().format("%Y%m%d"));
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            let body = ErrorBody {
                ok: false,
                message: format!("导出失败：{}", e),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

/// 结果行 + 汇总块写成 CSV, 带 UTF-8 BOM 以便 Excel 正确识别中文表头
fn write_csv(report: &Report) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record([
        "序号", "订单号", "商品名称", "销售额", "成本", "利润", "状态", "亏损",
    ])?;
    for row in &report.rows {
        writer.write_record([
            row.sequence_no.to_string(),
            row.order_no.clone(),
            row.product_name.clone(),
            row.sales_amount.to_string(),
            row.cost_amount.to_string(),
            row.profit.to_string(),
            row.status_label().to_string(),
            if row.is_loss { "是".to_string() } else { String::new() },
        ])?;
    }

    // 汇总块追加在正文之后
    let summary = &report.summary;
    let summary_rows = [
        ("总销售额", summary.total_sales.to_string()),
        ("总成本", summary.total_cost.to_string()),
        ("总利润", summary.total_profit.to_string()),
        ("订单总数", summary.order_count.to_string()),
        ("匹配", summary.matched_count.to_string()),
        ("客服漏记", summary.missing_count.to_string()),
        ("异常订单", summary.abnormal_count.to_string()),
        ("亏损订单", summary.loss_count.to_string()),
    ];
    writer.write_record([""])?;
    writer.write_record(["汇总统计"])?;
    for (name, value) in &summary_rows {
        writer.write_record([*name, value.as_str()])?;
    }

    let data = writer.into_inner()?;
    let mut bytes = Vec::with_capacity(data.len() + 3);
    bytes.extend_from_slice(b"\xEF\xBB\xBF");
    bytes.extend_from_slice(&data);
    Ok(bytes)
}
