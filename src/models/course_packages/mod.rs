use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{PageQuery, define_status, impl_has_id};
use crate::utils::validate::{FieldErrors, Validate, require_positive, require_text};

define_status! {
    // 课程包上架状态
    PackageStatus {
        OnSale => "on_sale": "在售",
        OffSale => "off_sale": "下架",
    }
}

// 课程包
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePackage {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub price: f64,
    // 有效天数
    #[serde(default)]
    pub validity_days: Option<u32>,
    #[serde(default)]
    pub status: PackageStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub update_time: Option<NaiveDateTime>,
}

impl_has_id!(CoursePackage);

impl CoursePackage {
    /// 课时单价
    pub fn unit_price(&self) -> Option<f64> {
        (self.total_hours > 0.0).then(|| self.price / self.total_hours)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePackageListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PackageStatus>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePackageForm {
    pub name: String,
    pub subject: Option<String>,
    pub total_hours: f64,
    pub price: f64,
    pub validity_days: Option<u32>,
    pub description: Option<String>,
}

impl Validate for CoursePackageForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name, "课程包名称");
        require_positive(&mut errors, "totalHours", self.total_hours, "总课时");
        if !self.price.is_finite() || self.price < 0.0 {
            errors.add("price", "价格不能为负数");
        }
        errors.into_result()
    }
}
