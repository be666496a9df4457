//! 全局提示与页面跳转
//!
//! 浏览器端的 toast 与路由跳转在这里抽象为 `Notifier`。
//! 命令行使用 [`ConsoleNotifier`]，测试使用 [`RecordingNotifier`]。

use std::sync::Mutex;
use tracing::{error, info, warn};

/// 登录页路由
pub const LOGIN_ROUTE: &str = "/login";

/// 提示级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// 一条提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

pub trait Notifier: Send + Sync {
    /// 展示一条短暂提示
    fn notify(&self, notice: Notice);

    /// 跳转到指定路由
    fn navigate(&self, route: &str);
}

/// 输出到标准错误的提示器
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success | NoticeLevel::Info => info!("{}", notice.message),
            NoticeLevel::Warning => warn!("{}", notice.message),
            NoticeLevel::Error => error!("{}", notice.message),
        }
        let tag = match notice.level {
            NoticeLevel::Success => "✔",
            NoticeLevel::Info => "i",
            NoticeLevel::Warning => "!",
            NoticeLevel::Error => "✘",
        };
        eprintln!("[{tag}] {}", notice.message);
    }

    fn navigate(&self, route: &str) {
        if route == LOGIN_ROUTE {
            eprintln!("请先执行 `edu-console login` 重新登录");
        } else {
            info!("Navigate to {}", route);
        }
    }
}

/// 记录所有提示和跳转，便于断言
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
    routes: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|n| n.level == NoticeLevel::Error)
            .map(|n| n.message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut guard) = self.notices.lock() {
            guard.push(notice);
        }
    }

    fn navigate(&self, route: &str) {
        if let Ok(mut guard) = self.routes.lock() {
            guard.push(route.to_string());
        }
    }
}
