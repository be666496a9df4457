use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::common::{EnableStatus, impl_has_id};

// 系统用户
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role_ids: Vec<i64>,
    #[serde(default)]
    pub role_names: Vec<String>,
    #[serde(default)]
    pub campus_id: Option<i64>,
    #[serde(default)]
    pub status: EnableStatus,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub last_login_time: Option<NaiveDateTime>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub update_time: Option<NaiveDateTime>,
}

impl_has_id!(User);
