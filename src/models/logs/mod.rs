use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{PageQuery, impl_has_id};

/// 日志种类，对应 `/logs/{kind}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Operation,
    Login,
}

impl LogKind {
    pub fn path(&self) -> &'static str {
        match self {
            LogKind::Operation => "/logs/operation",
            LogKind::Login => "/logs/login",
        }
    }
}

// 操作日志
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationLog {
    pub id: i64,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub operator_name: Option<String>,
    #[serde(default)]
    pub request_method: Option<String>,
    #[serde(default)]
    pub request_url: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    // 耗时（毫秒）
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub success: bool,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
}

// 登录日志
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginLog {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub browser: Option<String>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub login_time: Option<NaiveDateTime>,
}

impl_has_id!(OperationLog, LoginLog);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}
