use thiserror::Error;

/// 对账服务错误类型
///
/// 全部在纯管线之外产生: 映射错误在处理任何行之前拒绝,
/// 报告/分页错误在查询阶段产生。清洗、匹配、分类、汇总均不会失败。
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// 必填字段未映射
    #[error("{side} 映射缺失字段：{fields}")]
    MissingField { side: &'static str, fields: String },

    /// 已映射的列在上传数据中不存在
    #[error("{side} 映射字段不存在：{field} -> {column}")]
    UnknownColumn {
        side: &'static str,
        field: &'static str,
        column: String,
    },

    /// 报告 ID 未命中 (未生成或已随进程重启失效)
    #[error("报告不存在或已过期：{0}")]
    ReportNotFound(String),

    /// 页码超出范围 (1 起始, 上限 total_pages)
    #[error("页码超出范围：page={page}, total_pages={total_pages}")]
    PageOutOfRange { page: usize, total_pages: usize },
}
