use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use super::entities::LeadStatus;
use crate::models::common::PageQuery;
use crate::utils::validate::{FieldErrors, Validate, check_optional_phone, require_text};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus_id: Option<i64>,
}

// 新建/编辑线索
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    pub source: Option<String>,
    pub intention_course: Option<String>,
    pub campus_id: Option<i64>,
    pub remark: Option<String>,
}

impl Validate for LeadForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name, "姓名");
        require_text(&mut errors, "phone", &self.phone, "联系电话");
        check_optional_phone(&mut errors, "phone", Some(self.phone.as_str()));
        errors.into_result()
    }
}

// 手动分配：选中的线索全部分给同一位顾问
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualAssignRequest {
    pub lead_ids: Vec<i64>,
    pub advisor_id: i64,
}

/// 自动分配规则，均衡计算在后端完成
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignRule {
    Balanced,
    RoundRobin,
    Custom(String),
}

impl AssignRule {
    pub fn as_str(&self) -> &str {
        match self {
            AssignRule::Balanced => "balanced",
            AssignRule::RoundRobin => "round_robin",
            AssignRule::Custom(name) => name,
        }
    }
}

impl std::str::FromStr for AssignRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("Assign rule cannot be empty".to_string()),
            "balanced" => Ok(AssignRule::Balanced),
            "round_robin" | "round-robin" => Ok(AssignRule::RoundRobin),
            other => Ok(AssignRule::Custom(other.to_string())),
        }
    }
}

impl Serialize for AssignRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// 自动分配
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoAssignRequest {
    pub lead_ids: Vec<i64>,
    pub campus_id: i64,
    pub rule: AssignRule,
}

// 新增跟进
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpForm {
    pub content: String,
    pub method: Option<String>,
    #[serde(with = "crate::utils::datetime::option")]
    pub next_follow_time: Option<NaiveDateTime>,
    // 同时推进线索状态
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
}

impl Validate for FollowUpForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "content", &self.content, "跟进内容");
        errors.into_result()
    }
}

// 转化为正式学员
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertLeadRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_manual_assign_body_shape() {
        let body = ManualAssignRequest {
            lead_ids: vec![1, 2, 3],
            advisor_id: 2,
        };
        assert_eq!(
            serde_json::to_value(body).expect("ser"),
            json!({"leadIds": [1, 2, 3], "advisorId": 2})
        );
    }

    #[test]
    fn test_assign_rule_parsing() {
        assert_eq!("balanced".parse::<AssignRule>(), Ok(AssignRule::Balanced));
        assert_eq!("round-robin".parse::<AssignRule>(), Ok(AssignRule::RoundRobin));
        assert_eq!(
            "by_region".parse::<AssignRule>(),
            Ok(AssignRule::Custom("by_region".to_string()))
        );
        assert!("".parse::<AssignRule>().is_err());
    }
}
