//! 合同审批对话框
//!
//! 同一个对话框承担三种用途：提交审批、处理审批、查看审批历史。
//! 打开时按用途加载数据，每种操作只在对应用途下可用。

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use crate::errors::{ClientError, Result};
use crate::models::contracts::{
    ApprovalAction, ApprovalRecord, ApprovalStep, ProcessApprovalRequest, SubmitApprovalRequest,
};
use crate::notify::{Notice, Notifier};
use crate::services::ContractService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalMode {
    Submit {
        contract_id: i64,
    },
    Process {
        contract_id: i64,
        approval_id: i64,
        show_flow: bool,
    },
    History {
        contract_id: i64,
    },
}

impl ApprovalMode {
    pub fn contract_id(&self) -> i64 {
        match self {
            ApprovalMode::Submit { contract_id }
            | ApprovalMode::Process { contract_id, .. }
            | ApprovalMode::History { contract_id } => *contract_id,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ApprovalMode::Submit { .. } => "提交审批",
            ApprovalMode::Process { .. } => "审批处理",
            ApprovalMode::History { .. } => "审批记录",
        }
    }
}

pub struct ApprovalDialog {
    service: ContractService,
    notifier: Arc<dyn Notifier>,
    mode: ApprovalMode,
    flow: Vec<ApprovalStep>,
    history: Vec<ApprovalRecord>,
    open: bool,
}

impl ApprovalDialog {
    /// 打开对话框并加载所需数据
    pub async fn open(
        service: ContractService,
        notifier: Arc<dyn Notifier>,
        mode: ApprovalMode,
    ) -> Result<Self> {
        let mut dialog = Self {
            service,
            notifier,
            mode,
            flow: Vec::new(),
            history: Vec::new(),
            open: true,
        };
        dialog.load().await?;
        Ok(dialog)
    }

    async fn load(&mut self) -> Result<()> {
        match self.mode {
            ApprovalMode::Process {
                approval_id,
                show_flow: true,
                ..
            } => {
                self.flow = self.service.approval_flow(approval_id).await?;
            }
            ApprovalMode::History { contract_id } => {
                self.history = self.service.approval_history(contract_id).await?;
            }
            _ => {}
        }
        Ok(())
    }

    pub fn mode(&self) -> ApprovalMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// 多级审批节点（仅处理模式且要求显示流程时加载）
    pub fn flow(&self) -> &[ApprovalStep] {
        &self.flow
    }

    /// 审批时间线（仅历史模式加载）
    pub fn history(&self) -> &[ApprovalRecord] {
        &self.history
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    fn wrong_mode(&self, operation: &str) -> ClientError {
        ClientError::invalid_state(format!(
            "{operation} is not available in {} mode",
            self.mode.title()
        ))
    }

    /// 提交审批，仅提交模式可用
    pub async fn submit(&mut self, remark: Option<String>) -> Result<ApprovalRecord> {
        let ApprovalMode::Submit { contract_id } = self.mode else {
            return Err(self.wrong_mode("submit"));
        };
        let request = SubmitApprovalRequest { remark };
        let record = self.service.submit_approval(contract_id, &request).await?;
        self.notifier.notify(Notice::success("已提交审批"));
        self.close();
        Ok(record)
    }

    /// 审批通过
    pub async fn approve(&mut self, comment: Option<String>) -> Result<()> {
        self.process(ApprovalAction::Approve, comment).await
    }

    /// 驳回，必须填写意见
    pub async fn reject(&mut self, comment: impl Into<String>) -> Result<()> {
        self.process(ApprovalAction::Reject, Some(comment.into())).await
    }

    async fn process(&mut self, action: ApprovalAction, comment: Option<String>) -> Result<()> {
        let ApprovalMode::Process { approval_id, .. } = self.mode else {
            return Err(self.wrong_mode("approve/reject"));
        };
        let request = ProcessApprovalRequest { action, comment };
        if let Err(e) = self.service.process_approval(approval_id, &request).await {
            if matches!(e, ClientError::Validation(_)) {
                self.notifier.notify(Notice::warning(e.user_message()));
            }
            return Err(e);
        }
        let message = match action {
            ApprovalAction::Approve => "审批已通过",
            ApprovalAction::Reject => "审批已驳回",
        };
        self.notifier.notify(Notice::success(message));
        self.close();
        Ok(())
    }

    /// 下载合同打印件到指定目录，任何模式可用
    pub async fn print(&self, dir: &Path) -> Result<PathBuf> {
        let blob = self.service.print(self.mode.contract_id()).await?;
        let path = blob.save_to(dir).await?;
        info!("Contract printout saved to {}", path.display());
        Ok(path)
    }
}
