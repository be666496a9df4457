use serde::Serialize;

use crate::models::common::{EnableStatus, PageQuery};
use crate::utils::validate::{
    FieldErrors, Validate, check_optional_email, check_optional_phone, check_password,
    validate_username,
};

// 用户查询参数
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnableStatus>,
}

// 用户创建请求
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub role_ids: Vec<i64>,
    pub campus_id: Option<i64>,
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Err(msg) = validate_username(&self.username) {
            errors.add("username", msg);
        }
        check_password(&mut errors, "password", &self.password);
        check_optional_phone(&mut errors, "phone", self.phone.as_deref());
        check_optional_email(&mut errors, "email", self.email.as_deref());
        if self.role_ids.is_empty() {
            errors.add("roleIds", "至少分配一个角色");
        }
        errors.into_result()
    }
}

// 用户更新请求
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus_id: Option<i64>,
}

impl Validate for UpdateUserRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_optional_phone(&mut errors, "phone", self.phone.as_deref());
        check_optional_email(&mut errors, "email", self.email.as_deref());
        if self.role_ids.as_ref().is_some_and(Vec::is_empty) {
            errors.add("roleIds", "至少分配一个角色");
        }
        errors.into_result()
    }
}

// 管理员重置密码
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

impl Validate for ResetPasswordRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_password(&mut errors, "newPassword", &self.new_password);
        errors.into_result()
    }
}
