use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::common::{NamedRef, define_status, impl_has_id};

define_status! {
    // 线索跟进阶段：new -> contacted -> converted / lost
    LeadStatus {
        New => "new": "新线索",
        Contacted => "contacted": "已联系",
        Converted => "converted": "已转化",
        Lost => "lost": "已流失",
    }
}

impl LeadStatus {
    /// 是否已离开跟进流程
    pub fn is_closed(&self) -> bool {
        matches!(self, LeadStatus::Converted | LeadStatus::Lost)
    }
}

// 线索
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub intention_course: Option<String>,
    #[serde(default)]
    pub campus_id: Option<i64>,
    #[serde(default)]
    pub status: LeadStatus,
    // 负责顾问，未分配时为空
    #[serde(default)]
    pub assignee: Option<NamedRef>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub next_follow_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub update_time: Option<NaiveDateTime>,
}

impl_has_id!(Lead);

impl Lead {
    pub fn is_assigned(&self) -> bool {
        self.assignee.is_some()
    }
}

// 跟进记录
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
    pub id: i64,
    pub lead_id: i64,
    pub content: String,
    // 电话 / 微信 / 到访
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub next_follow_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
}

impl_has_id!(FollowUp);
