use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{EnableStatus, PageQuery, impl_has_id};

// 校区
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campus {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: EnableStatus,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
}

impl_has_id!(Campus);

// 校区列表查询
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}
