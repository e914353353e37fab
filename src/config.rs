use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub reconcile: ReconcileConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 对账配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// 官方订单状态保留名单, 名单外状态在清洗阶段剔除; 为空则不过滤
    pub allowed_status: Vec<String>,
}

fn default_allowed_status() -> Vec<String> {
    ["交易成功", "已发货", "已收货"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            reconcile: ReconcileConfig {
                allowed_status: default_allowed_status(),
            },
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
            },
            reconcile: ReconcileConfig {
                // ALLOWED_STATUS=交易成功,已发货,已收货; 设为空串可关闭状态过滤
                allowed_status: match std::env::var("ALLOWED_STATUS") {
                    Ok(raw) => raw
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect(),
                    Err(_) => default_allowed_status(),
                },
            },
        }
    }
}
