use serde::de::IgnoredAny;
use std::sync::Arc;
use tracing::info;

use super::crud::{CrudService, ReadOnly, define_resource};
use crate::errors::Result;
use crate::http::HttpClient;
use crate::models::logs::{LogKind, LoginLog, OperationLog};

define_resource! {
    /// 操作日志
    OperationLogResource {
        path: "/logs/operation",
        label: "操作日志",
        entity: OperationLog,
        create: ReadOnly,
        update: ReadOnly,
    }
}

define_resource! {
    /// 登录日志
    LoginLogResource {
        path: "/logs/login",
        label: "登录日志",
        entity: LoginLog,
        create: ReadOnly,
        update: ReadOnly,
    }
}

pub type OperationLogService = CrudService<OperationLogResource>;
pub type LoginLogService = CrudService<LoginLogResource>;

/// 清空指定种类的日志
pub async fn clear_logs(http: &Arc<HttpClient>, kind: LogKind) -> Result<()> {
    let _: IgnoredAny = http.delete(&format!("{}/clear", kind.path())).await?;
    info!("Logs cleared: {}", kind.path());
    Ok(())
}

impl OperationLogService {
    pub async fn clear(&self) -> Result<()> {
        clear_logs(self.http(), LogKind::Operation).await
    }
}

impl LoginLogService {
    pub async fn clear(&self) -> Result<()> {
        clear_logs(self.http(), LogKind::Login).await
    }
}
