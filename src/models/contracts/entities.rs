use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::common::{define_status, impl_has_id};

define_status! {
    // 合同状态
    ContractStatus {
        Draft => "draft": "草稿",
        PendingApproval => "pending_approval": "审批中",
        Active => "active": "执行中",
        Completed => "completed": "已完成",
        Terminated => "terminated": "已终止",
        Rejected => "rejected": "已驳回",
    }
}

// 合同
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: i64,
    pub contract_no: String,
    pub student_id: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub course_package_id: Option<i64>,
    #[serde(default)]
    pub course_package_name: Option<String>,
    // 合同金额与已收金额
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub paid_amount: f64,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub sign_date: Option<NaiveDate>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: ContractStatus,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub update_time: Option<NaiveDateTime>,
}

impl_has_id!(Contract);

impl Contract {
    /// 待收金额
    pub fn outstanding(&self) -> f64 {
        (self.amount - self.paid_amount).max(0.0)
    }
}

/// 审批状态
///
/// 只反映后端返回的字符串，不校验流转是否合法；
/// 未识别的取值保留原文。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Unknown(String),
}

impl ApprovalStatus {
    pub const PENDING: &'static str = "pending";
    pub const APPROVED: &'static str = "approved";
    pub const REJECTED: &'static str = "rejected";
    pub const CANCELLED: &'static str = "cancelled";

    pub fn label(&self) -> &str {
        match self {
            ApprovalStatus::Pending => "待审批",
            ApprovalStatus::Approved => "已通过",
            ApprovalStatus::Rejected => "已驳回",
            ApprovalStatus::Cancelled => "已撤销",
            ApprovalStatus::Unknown(raw) => raw,
        }
    }

    /// 是否已结束
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            ApprovalStatus::Approved | ApprovalStatus::Rejected | ApprovalStatus::Cancelled
        )
    }
}

impl From<&str> for ApprovalStatus {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            ApprovalStatus::PENDING => ApprovalStatus::Pending,
            ApprovalStatus::APPROVED => ApprovalStatus::Approved,
            ApprovalStatus::REJECTED => ApprovalStatus::Rejected,
            ApprovalStatus::CANCELLED | "canceled" => ApprovalStatus::Cancelled,
            _ => ApprovalStatus::Unknown(value.to_string()),
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalStatus::Pending => write!(f, "{}", ApprovalStatus::PENDING),
            ApprovalStatus::Approved => write!(f, "{}", ApprovalStatus::APPROVED),
            ApprovalStatus::Rejected => write!(f, "{}", ApprovalStatus::REJECTED),
            ApprovalStatus::Cancelled => write!(f, "{}", ApprovalStatus::CANCELLED),
            ApprovalStatus::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}

impl Serialize for ApprovalStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ApprovalStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ApprovalStatus::from(s.as_str()))
    }
}

// 审批记录（时间线中的一项）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRecord {
    pub id: i64,
    pub contract_id: i64,
    #[serde(default)]
    pub status: ApprovalStatus,
    #[serde(default)]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub approver_name: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub process_time: Option<NaiveDateTime>,
}

impl_has_id!(ApprovalRecord);

// 多级审批流程中的一个节点
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalStep {
    pub step: u32,
    pub name: String,
    #[serde(default)]
    pub approver_name: Option<String>,
    #[serde(default)]
    pub status: ApprovalStatus,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub process_time: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_approval_status_reflects_backend_strings() {
        let known: ApprovalStatus = serde_json::from_value(json!("APPROVED")).expect("status");
        assert_eq!(known, ApprovalStatus::Approved);
        let unknown: ApprovalStatus = serde_json::from_value(json!("escalated")).expect("status");
        assert_eq!(unknown, ApprovalStatus::Unknown("escalated".to_string()));
        assert_eq!(unknown.label(), "escalated");
        assert_eq!(serde_json::to_value(&unknown).expect("ser"), json!("escalated"));
        assert!(!ApprovalStatus::Pending.is_final());
        assert!(ApprovalStatus::Cancelled.is_final());
    }
}
