//! 线索分配
//!
//! 从线索表格的选中行发起一次分配请求。成功后清空选择、
//! 按原筛选条件刷新列表并提示成功。

use std::sync::Arc;
use tracing::{info, warn};

use crate::errors::{ClientError, Result};
use crate::models::leads::{AssignRule, Lead};
use crate::notify::{Notice, Notifier};
use crate::services::LeadService;
use crate::table::DataTable;

/// 分配方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignMode {
    /// 全部分给一位顾问
    Manual { advisor_id: i64 },
    /// 由后端按规则分配
    Automatic { campus_id: i64, rule: AssignRule },
}

pub struct LeadAssignment {
    service: LeadService,
    table: DataTable<Lead>,
    notifier: Arc<dyn Notifier>,
}

impl LeadAssignment {
    pub fn new(service: LeadService, table: DataTable<Lead>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            table,
            notifier,
        }
    }

    pub fn table(&self) -> &DataTable<Lead> {
        &self.table
    }

    /// 提交分配
    pub async fn submit(&self, mode: AssignMode) -> Result<()> {
        let lead_ids = self.table.selected_ids();
        if lead_ids.is_empty() {
            let err = ClientError::validation("请先选择要分配的线索");
            self.notifier.notify(Notice::warning(err.user_message()));
            return Err(err);
        }

        match &mode {
            AssignMode::Manual { advisor_id } => {
                self.service.assign(&lead_ids, *advisor_id).await?;
            }
            AssignMode::Automatic { campus_id, rule } => {
                self.service
                    .auto_assign(&lead_ids, *campus_id, rule.clone())
                    .await?;
            }
        }
        info!("Lead assignment finished: {:?}", mode);

        self.table.clear_selection();
        // 刷新失败已由表格提示，不影响分配结果
        if let Err(e) = self.table.refresh().await {
            warn!("Failed to reload leads after assignment: {}", e);
        }
        self.notifier
            .notify(Notice::success(format!("已分配 {} 条线索", lead_ids.len())));
        Ok(())
    }
}
