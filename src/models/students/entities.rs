use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::common::{Gender, define_status, impl_has_id};

define_status! {
    // 学员状态
    StudentStatus {
        Reading => "reading": "在读",
        Suspended => "suspended": "停课",
        Graduated => "graduated": "结业",
        Withdrawn => "withdrawn": "退学",
    }
}

// 学员
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    // 家长信息
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub parent_phone: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub campus_id: Option<i64>,
    #[serde(default)]
    pub campus_name: Option<String>,
    #[serde(default)]
    pub status: StudentStatus,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub update_time: Option<NaiveDateTime>,
}

impl_has_id!(Student);
