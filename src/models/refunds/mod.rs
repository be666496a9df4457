use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{PageQuery, define_status, impl_has_id};
use crate::utils::validate::{FieldErrors, Validate, require_positive, require_text};

define_status! {
    // 退费状态
    RefundStatus {
        Pending => "pending": "待审核",
        Approved => "approved": "已通过",
        Rejected => "rejected": "已驳回",
        Completed => "completed": "已退款",
    }
}

// 退费单
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub id: i64,
    #[serde(default)]
    pub refund_no: String,
    pub contract_id: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub refund_hours: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: RefundStatus,
    #[serde(default)]
    pub review_comment: Option<String>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
}

impl_has_id!(Refund);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RefundStatus>,
}

// 退费试算，金额由后端计算
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundCalculateRequest {
    pub contract_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_hours: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundQuote {
    #[serde(default)]
    pub refundable_amount: f64,
    #[serde(default)]
    pub used_hours: f64,
    #[serde(default)]
    pub remaining_hours: f64,
    // 手续费或违约扣款
    #[serde(default)]
    pub deduction: f64,
}

// 申请退费
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundForm {
    pub contract_id: i64,
    pub amount: f64,
    pub refund_hours: Option<f64>,
    pub reason: String,
}

impl Validate for RefundForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_positive(&mut errors, "amount", self.amount, "退费金额");
        require_text(&mut errors, "reason", &self.reason, "退费原因");
        errors.into_result()
    }
}

// 审核退费
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundReviewRequest {
    pub approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
