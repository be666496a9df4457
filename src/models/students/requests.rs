use chrono::NaiveDate;
use serde::Serialize;

use super::entities::StudentStatus;
use crate::models::common::{Gender, PageQuery};
use crate::utils::validate::{FieldErrors, Validate, check_optional_phone, require_text};

// 学员列表查询参数
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StudentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus_id: Option<i64>,
}

// 新建学员
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub name: String,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
    pub school: Option<String>,
    pub grade: Option<String>,
    pub campus_id: Option<i64>,
    pub remark: Option<String>,
}

impl Validate for CreateStudentRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name, "学员姓名");
        check_optional_phone(&mut errors, "phone", self.phone.as_deref());
        check_optional_phone(&mut errors, "parentPhone", self.parent_phone.as_deref());
        if self.phone.is_none() && self.parent_phone.is_none() {
            errors.add("parentPhone", "学员电话与家长电话至少填写一个");
        }
        errors.into_result()
    }
}

// 更新学员
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl Validate for UpdateStudentRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Some(name) = &self.name {
            require_text(&mut errors, "name", name, "学员姓名");
        }
        check_optional_phone(&mut errors, "phone", self.phone.as_deref());
        check_optional_phone(&mut errors, "parentPhone", self.parent_phone.as_deref());
        errors.into_result()
    }
}
