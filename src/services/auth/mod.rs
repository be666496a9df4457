pub mod login;
pub mod logout;
pub mod profile;

use std::sync::Arc;

use crate::errors::Result;
use crate::http::HttpClient;
use crate::models::auth::{ChangePasswordRequest, LoginRequest, LoginResponse, UserInfo};

pub struct AuthService {
    http: Arc<HttpClient>,
}

impl AuthService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    // 登录并保存令牌
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        login::handle_login(self, request).await
    }

    // 退出登录，无论后端是否成功都清除本地会话
    pub async fn logout(&self) -> Result<()> {
        logout::handle_logout(self).await
    }

    // 获取当前用户信息
    pub async fn profile(&self) -> Result<UserInfo> {
        profile::get_profile(self).await
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<()> {
        profile::change_password(self, request).await
    }
}
