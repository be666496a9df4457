use config::{Config, ConfigError, Environment, File};
use std::path::PathBuf;
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，保证没有配置文件时也能运行
            .set_default("app.system_name", "教务管理控制台")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("api.base_url", "http://127.0.0.1:8080/api")?
            .set_default("api.timeout_ms", 30_000)?
            .set_default(
                "api.user_agent",
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("session.token_file", "")?
            .set_default("table.default_page_size", 10)?
            .set_default("table.page_size_options", vec![10, 20, 50, 100])?
            .set_default("table.debounce_ms", 300)?
            .set_default("table.search_key", "keyword")?
            .set_default("export.dir", ".")?
            // 首先加载默认配置文件
            .add_source(File::with_name("console").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "console.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("EDU_CONSOLE")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("api.base_url", std::env::var("API_BASE_URL").ok())?
            .set_override_option("session.token_file", std::env::var("TOKEN_FILE").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 去掉末尾的斜杠，路径统一以 / 开头拼接
        while app_config.api.base_url.ends_with('/') {
            app_config.api.base_url.pop();
        }
        if app_config.table.default_page_size == 0 {
            app_config.table.default_page_size = 10;
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 令牌文件路径
    pub fn token_file_path(&self) -> PathBuf {
        if self.session.token_file.is_empty() {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("edu-console")
                .join("token.json")
        } else {
            PathBuf::from(&self.session.token_file)
        }
    }

    /// 请求超时
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.api.timeout_ms)
    }

    /// 搜索防抖间隔
    pub fn search_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.table.debounce_ms)
    }
}
