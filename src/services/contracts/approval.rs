//! 合同审批
//!
//! 审批状态完全由后端决定，这里只负责转发和展示。

use serde::de::IgnoredAny;
use tracing::info;

use super::ContractService;
use crate::errors::Result;
use crate::models::contracts::{
    ApprovalAction, ApprovalRecord, ApprovalStep, ProcessApprovalRequest, SubmitApprovalRequest,
};
use crate::utils::validate::Validate;

impl ContractService {
    /// 提交审批
    pub async fn submit_approval(
        &self,
        contract_id: i64,
        request: &SubmitApprovalRequest,
    ) -> Result<ApprovalRecord> {
        let record: ApprovalRecord = self
            .http()
            .post(&self.sub(format!("{contract_id}/approvals")), request)
            .await?;
        info!("Contract {} submitted for approval ({})", contract_id, record.id);
        Ok(record)
    }

    /// 审批通过或驳回
    pub async fn process_approval(
        &self,
        approval_id: i64,
        request: &ProcessApprovalRequest,
    ) -> Result<()> {
        request.check()?;
        let _: IgnoredAny = self
            .http()
            .put(&self.sub(format!("approvals/{approval_id}")), request)
            .await?;
        let verb = match request.action {
            ApprovalAction::Approve => "approved",
            ApprovalAction::Reject => "rejected",
        };
        info!("Approval {} {}", approval_id, verb);
        Ok(())
    }

    /// 审批时间线
    pub async fn approval_history(&self, contract_id: i64) -> Result<Vec<ApprovalRecord>> {
        self.http()
            .get_json(&self.sub(format!("{contract_id}/approvals")))
            .await
    }

    /// 多级审批节点
    pub async fn approval_flow(&self, approval_id: i64) -> Result<Vec<ApprovalStep>> {
        self.http()
            .get_json(&self.sub(format!("approvals/{approval_id}/flow")))
            .await
    }

    /// 撤回审批
    pub async fn cancel_approval(&self, approval_id: i64) -> Result<()> {
        let _: IgnoredAny = self
            .http()
            .put_empty(&self.sub(format!("approvals/{approval_id}/cancel")))
            .await?;
        info!("Approval {} cancelled", approval_id);
        Ok(())
    }
}
