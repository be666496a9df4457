use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub table: TableConfig,
    pub export: ExportConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 后端接口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64, // 单次请求超时（毫秒），不重试
    pub user_agent: String,
}

/// 会话配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    // 令牌文件路径，为空时使用用户配置目录
    pub token_file: String,
}

/// 表格配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
    pub debounce_ms: u64,
    pub search_key: String,
}

/// 导出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub dir: String, // 下载文件保存目录
}
