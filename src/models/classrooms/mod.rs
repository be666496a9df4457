use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{PageQuery, define_status, impl_has_id};
use crate::utils::validate::{FieldErrors, Validate, require_text};

define_status! {
    // 教室状态
    ClassroomStatus {
        Available => "available": "可用",
        Maintenance => "maintenance": "维修中",
        Disabled => "disabled": "停用",
    }
}

// 教室
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub campus_id: Option<i64>,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: ClassroomStatus,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub update_time: Option<NaiveDateTime>,
}

impl_has_id!(Classroom);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClassroomStatus>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomForm {
    pub name: String,
    pub campus_id: Option<i64>,
    pub capacity: u32,
    pub location: Option<String>,
}

impl Validate for ClassroomForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name, "教室名称");
        if self.capacity == 0 || self.capacity > 500 {
            errors.add("capacity", "容纳人数必须在 1 到 500 之间");
        }
        errors.into_result()
    }
}
