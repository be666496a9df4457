use chrono::NaiveDate;
use serde::Serialize;

use super::entities::ContractStatus;
use crate::models::common::PageQuery;
use crate::utils::validate::{FieldErrors, Validate, check_order, require_positive};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContractStatus>,
}

// 创建/编辑合同
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractForm {
    pub student_id: i64,
    pub course_package_id: i64,
    pub amount: f64,
    pub total_hours: f64,
    pub sign_date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub remark: Option<String>,
}

impl Validate for ContractForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_positive(&mut errors, "amount", self.amount, "合同金额");
        require_positive(&mut errors, "totalHours", self.total_hours, "合同课时");
        check_order(&mut errors, "endDate", &self.start_date, &self.end_date, false);
        errors.into_result()
    }
}

// 提交审批
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApprovalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalAction {
    Approve,
    Reject,
}

// 审批处理
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessApprovalRequest {
    pub action: ApprovalAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Validate for ProcessApprovalRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        // 驳回必须填写原因
        if self.action == ApprovalAction::Reject
            && self.comment.as_deref().is_none_or(|c| c.trim().is_empty())
        {
            errors.add("comment", "驳回时必须填写审批意见");
        }
        errors.into_result()
    }
}
