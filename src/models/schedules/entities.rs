use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::common::{define_status, impl_has_id};

define_status! {
    // 排课状态
    ScheduleStatus {
        Scheduled => "scheduled": "待上课",
        Completed => "completed": "已上课",
        Cancelled => "cancelled": "已取消",
    }
}

// 课表条目
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i64,
    pub class_id: i64,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    #[serde(default)]
    pub classroom_id: Option<i64>,
    #[serde(default)]
    pub classroom_name: Option<String>,
    pub date: Option<NaiveDate>,
    // HH:mm
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub status: ScheduleStatus,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
}

impl_has_id!(Schedule);

// 冲突明细，由后端检测
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConflict {
    #[serde(default)]
    pub schedule_id: Option<i64>,
    // teacher / classroom / class
    #[serde(default, rename = "type")]
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictReport {
    #[serde(default)]
    pub has_conflict: bool,
    #[serde(default)]
    pub conflicts: Vec<ScheduleConflict>,
}

// 批量排课结果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResult {
    #[serde(default)]
    pub created: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub conflicts: Vec<ScheduleConflict>,
}
