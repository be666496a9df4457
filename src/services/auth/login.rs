use tracing::info;

use super::AuthService;
use crate::errors::{ClientError, Result};
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::utils::validate::Validate;

pub async fn handle_login(service: &AuthService, request: &LoginRequest) -> Result<LoginResponse> {
    // 1. 表单校验，失败不发请求
    request.check()?;

    // 2. 请求登录
    let response: LoginResponse = service.http().post("/auth/login", request).await?;
    if response.token.is_empty() {
        return Err(ClientError::business("登录响应缺少令牌"));
    }

    // 3. 先持久化令牌，再返回给调用方
    service
        .http()
        .session()
        .set_login(&response.token, response.user.clone())?;

    info!("User {} logged in", request.username);
    Ok(response)
}
