use chrono::NaiveDate;
use serde::Serialize;

use super::entities::ClassStatus;
use crate::models::common::PageQuery;
use crate::utils::validate::{FieldErrors, Validate, check_order, require_text};

// 班级查询参数
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClassStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus_id: Option<i64>,
}

// 创建/编辑班级
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassForm {
    pub name: String,
    pub course_package_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub classroom_id: Option<i64>,
    pub campus_id: Option<i64>,
    pub capacity: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Validate for ClassForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name, "班级名称");
        if self.capacity == 0 {
            errors.add("capacity", "班级容量必须大于 0");
        }
        if let (Some(start), Some(end)) = (&self.start_date, &self.end_date) {
            check_order(&mut errors, "endDate", start, end, true);
        }
        errors.into_result()
    }
}

// 批量加入学员
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStudentsRequest {
    pub student_ids: Vec<i64>,
}
