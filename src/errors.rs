//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 传输层产生的错误（网络、HTTP 状态、业务码）会由 `HttpClient` 统一提示一次，
//! 其余错误由调用方决定如何提示。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_console_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum ClientError {
            $($variant(String),)*
        }

        impl ClientError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClientError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClientError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClientError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClientError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClientError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_console_errors! {
    Network("C001", "Network Error"),
    Timeout("C002", "Request Timeout"),
    Unauthorized("C003", "Unauthorized"),
    Forbidden("C004", "Forbidden"),
    NotFound("C005", "Resource Not Found"),
    Server("C006", "Server Error"),
    Http("C007", "HTTP Error"),
    Business("C008", "Business Error"),
    Validation("C009", "Validation Error"),
    Serialization("C010", "Serialization Error"),
    FileOperation("C011", "File Operation Error"),
    Export("C012", "Export Error"),
    Cancelled("C013", "Request Cancelled"),
    Config("C014", "Configuration Error"),
    InvalidState("C015", "Invalid State"),
    Decode("C016", "Response Decode Error"),
}

impl ClientError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 面向用户的提示文案
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) => "网络错误，请检查网络连接".to_string(),
            ClientError::Timeout(_) => "请求超时，请稍后重试".to_string(),
            ClientError::Unauthorized(_) => "登录已过期，请重新登录".to_string(),
            ClientError::Forbidden(_) => "没有权限执行此操作".to_string(),
            ClientError::NotFound(_) => "请求的资源不存在".to_string(),
            ClientError::Server(_) => "服务器内部错误".to_string(),
            ClientError::Http(msg) => format!("请求失败: {msg}"),
            ClientError::Decode(_) => "服务器响应格式错误".to_string(),
            ClientError::Business(msg) | ClientError::Validation(msg) => msg.clone(),
            _ => self.format_simple(),
        }
    }

    /// 是否已经由 HTTP 层提示过用户
    pub fn is_surfaced(&self) -> bool {
        matches!(
            self,
            ClientError::Network(_)
                | ClientError::Timeout(_)
                | ClientError::Unauthorized(_)
                | ClientError::Forbidden(_)
                | ClientError::NotFound(_)
                | ClientError::Server(_)
                | ClientError::Http(_)
                | ClientError::Business(_)
                | ClientError::Decode(_)
        )
    }

    /// 根据 HTTP 状态码构造错误
    pub fn from_status(status: u16, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        match status {
            401 => ClientError::Unauthorized(detail),
            403 => ClientError::Forbidden(detail),
            404 => ClientError::NotFound(detail),
            500 => ClientError::Server(detail),
            _ => ClientError::Http(format!("HTTP {status}: {detail}")),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClientError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err.to_string())
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::from_status(status.as_u16(), err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ClientError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ClientError::Export(err.to_string())
    }
}

impl From<csv::Error> for ClientError {
    fn from(err: csv::Error) -> Self {
        ClientError::Export(err.to_string())
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClientError::network("test").code(), "C001");
        assert_eq!(ClientError::unauthorized("test").code(), "C003");
        assert_eq!(ClientError::business("test").code(), "C008");
        assert_eq!(ClientError::validation("test").code(), "C009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(ClientError::timeout("test").error_type(), "Request Timeout");
        assert_eq!(
            ClientError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            ClientError::from_status(401, "x"),
            ClientError::Unauthorized(_)
        ));
        assert!(matches!(
            ClientError::from_status(403, "x"),
            ClientError::Forbidden(_)
        ));
        assert!(matches!(
            ClientError::from_status(404, "x"),
            ClientError::NotFound(_)
        ));
        assert!(matches!(
            ClientError::from_status(500, "x"),
            ClientError::Server(_)
        ));
        let other = ClientError::from_status(502, "Bad Gateway");
        assert!(matches!(other, ClientError::Http(_)));
        assert!(other.message().contains("502"));
    }

    #[test]
    fn test_user_message_uses_server_text_for_business_errors() {
        let err = ClientError::business("学员手机号已存在");
        assert_eq!(err.user_message(), "学员手机号已存在");
        assert_eq!(
            ClientError::unauthorized("expired").user_message(),
            "登录已过期，请重新登录"
        );
    }

    #[test]
    fn test_surfaced_classification() {
        assert!(ClientError::business("x").is_surfaced());
        assert!(ClientError::timeout("x").is_surfaced());
        assert!(!ClientError::validation("x").is_surfaced());
        assert!(!ClientError::cancelled("x").is_surfaced());
        assert!(ClientError::decode("x").is_surfaced());
        assert!(!ClientError::serialization("x").is_surfaced());
    }

    #[test]
    fn test_format_simple() {
        let err = ClientError::validation("Invalid phone");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid phone"));
    }
}
