use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::common::{NamedRef, define_status, impl_has_id};

define_status! {
    // 班级状态
    ClassStatus {
        Pending => "pending": "待开班",
        Ongoing => "ongoing": "开课中",
        Finished => "finished": "已结课",
        Cancelled => "cancelled": "已取消",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub name: String,
    // 课程包
    #[serde(default)]
    pub course_package_id: Option<i64>,
    // 任课教师
    #[serde(default)]
    pub teacher: Option<NamedRef>,
    #[serde(default)]
    pub classroom_id: Option<i64>,
    #[serde(default)]
    pub campus_id: Option<i64>,
    // 容量与当前人数
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub student_count: u32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: ClassStatus,
    // 创建时间
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
    // 更新时间
    #[serde(default, with = "crate::utils::datetime::option")]
    pub update_time: Option<NaiveDateTime>,
}

impl_has_id!(Class);

impl Class {
    /// 剩余名额
    pub fn remaining_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.student_count)
    }
}
