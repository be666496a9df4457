use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{PageQuery, define_status, impl_has_id};
use crate::utils::validate::{FieldErrors, Validate, require_text};

// 课时账户
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassHourAccount {
    pub id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub contract_id: Option<i64>,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub used_hours: f64,
    #[serde(default)]
    pub remaining_hours: f64,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub update_time: Option<NaiveDateTime>,
}

impl_has_id!(ClassHourAccount);

impl ClassHourAccount {
    pub fn is_exhausted(&self) -> bool {
        self.remaining_hours <= 0.0
    }
}

define_status! {
    // 课时变动类型
    RecordKind {
        Purchase => "purchase": "购买",
        Consume => "consume": "消课",
        Adjust => "adjust": "调整",
        Refund => "refund": "退费",
    }
}

// 课时变动记录
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassHourRecord {
    pub id: i64,
    pub account_id: i64,
    #[serde(default, rename = "type")]
    pub kind: RecordKind,
    // 正数增加，负数扣减
    pub hours: f64,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub operator_name: Option<String>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
}

impl_has_id!(ClassHourRecord);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassHourListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
}

// 手工调整课时
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustHoursRequest {
    pub hours: f64,
    pub reason: String,
}

impl Validate for AdjustHoursRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if !self.hours.is_finite() || self.hours == 0.0 {
            errors.add("hours", "调整课时不能为 0");
        }
        require_text(&mut errors, "reason", &self.reason, "调整原因");
        errors.into_result()
    }
}
