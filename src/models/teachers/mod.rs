use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::common::{Gender, PageQuery, define_status, impl_has_id};
use crate::utils::validate::{
    FieldErrors, Validate, check_optional_email, check_optional_phone, require_text,
};

define_status! {
    // 教师状态
    TeacherStatus {
        Active => "active": "在职",
        OnLeave => "on_leave": "休假",
        Resigned => "resigned": "离职",
    }
}

// 教师
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    // 可授科目
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub campus_id: Option<i64>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: TeacherStatus,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub update_time: Option<NaiveDateTime>,
}

impl_has_id!(Teacher);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TeacherStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherForm {
    pub name: String,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub subjects: Vec<String>,
    pub campus_id: Option<i64>,
    pub hire_date: Option<NaiveDate>,
}

impl Validate for TeacherForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name, "教师姓名");
        match self.phone.as_deref() {
            Some(phone) if !phone.trim().is_empty() => {
                check_optional_phone(&mut errors, "phone", Some(phone));
            }
            _ => errors.add("phone", "联系电话不能为空"),
        }
        check_optional_email(&mut errors, "email", self.email.as_deref());
        errors.into_result()
    }
}
