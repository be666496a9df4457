use serde::Serialize;

use crate::utils::validate::{FieldErrors, Validate, check_password, require_text};

// 登录表单
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// 用户名
    pub username: String,
    /// 密码
    pub password: String,
    /// 是否记住我
    pub remember_me: bool,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "username", &self.username, "用户名");
        require_text(&mut errors, "password", &self.password, "密码");
        errors.into_result()
    }
}

// 修改密码
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

impl Validate for ChangePasswordRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "oldPassword", &self.old_password, "原密码");
        check_password(&mut errors, "newPassword", &self.new_password);
        if !self.old_password.is_empty() && self.old_password == self.new_password {
            errors.add("newPassword", "新密码不能与原密码相同");
        }
        errors.into_result()
    }
}
