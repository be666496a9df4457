use chrono::NaiveDate;
use serde::Serialize;

use crate::models::common::PageQuery;
use crate::utils::validate::{FieldErrors, Validate, check_order, validate_clock_time};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classroom_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

// 日历视图区间
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classroom_id: Option<i64>,
}

// 单次排课
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleForm {
    pub class_id: i64,
    pub teacher_id: Option<i64>,
    pub classroom_id: Option<i64>,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}

fn check_time_window(errors: &mut FieldErrors, start: &str, end: &str) {
    let start_ok = validate_clock_time(start).is_ok();
    let end_ok = validate_clock_time(end).is_ok();
    if !start_ok {
        errors.add("startTime", "开始时间格式应为 HH:mm");
    }
    if !end_ok {
        errors.add("endTime", "结束时间格式应为 HH:mm");
    }
    // HH:mm 的字典序即时间先后
    if start_ok && end_ok {
        check_order(errors, "endTime", &start, &end, false);
    }
}

impl Validate for ScheduleForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_time_window(&mut errors, &self.start_time, &self.end_time);
        errors.into_result()
    }
}

// 冲突检测请求，原样转发给后端
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictCheckRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_id: Option<i64>,
    pub class_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub classroom_id: Option<i64>,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}

impl Validate for ConflictCheckRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_time_window(&mut errors, &self.start_time, &self.end_time);
        errors.into_result()
    }
}

// 按周期批量生成课表
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScheduleRequest {
    pub class_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    // 1 = 周一 ... 7 = 周日
    pub weekdays: Vec<u8>,
    pub start_time: String,
    pub end_time: String,
    pub skip_holidays: bool,
}

impl Validate for GenerateScheduleRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_order(&mut errors, "endDate", &self.start_date, &self.end_date, true);
        if self.weekdays.is_empty() {
            errors.add("weekdays", "至少选择一个上课日");
        } else if self.weekdays.iter().any(|d| !(1..=7).contains(d)) {
            errors.add("weekdays", "上课日取值为 1 到 7");
        }
        check_time_window(&mut errors, &self.start_time, &self.end_time);
        errors.into_result()
    }
}
