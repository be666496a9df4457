use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{PageQuery, define_status, impl_has_id};
use crate::utils::validate::{FieldErrors, Validate, check_order, require_text};

define_status! {
    // 假期类型：放假或调休上班
    HolidayKind {
        Holiday => "holiday": "放假",
        Workday => "workday": "调休上班",
    }
}

// 节假日
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: i64,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default, rename = "type")]
    pub kind: HolidayKind,
    #[serde(default)]
    pub remark: Option<String>,
}

impl_has_id!(Holiday);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayForm {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
    pub remark: Option<String>,
}

impl Validate for HolidayForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name, "假期名称");
        check_order(&mut errors, "endDate", &self.start_date, &self.end_date, true);
        errors.into_result()
    }
}
