use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{PageQuery, impl_has_id};
use crate::utils::validate::{FieldErrors, Validate, require_text};

// 系统参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    pub id: i64,
    pub config_key: String,
    #[serde(default)]
    pub config_value: String,
    #[serde(default)]
    pub config_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    // 内置参数不可删除
    #[serde(default)]
    pub is_builtin: bool,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub update_time: Option<NaiveDateTime>,
}

impl_has_id!(SystemConfig);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfigListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

// 新增参数
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfigForm {
    pub config_key: String,
    pub config_value: String,
    pub config_name: Option<String>,
    pub description: Option<String>,
}

impl Validate for SystemConfigForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "configKey", &self.config_key, "参数键");
        errors.into_result()
    }
}

// 只修改参数值
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfigValueRequest {
    pub config_value: String,
}
