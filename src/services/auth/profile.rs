use serde::de::IgnoredAny;

use super::AuthService;
use crate::errors::Result;
use crate::models::auth::{ChangePasswordRequest, UserInfo};
use crate::utils::validate::Validate;

pub async fn get_profile(service: &AuthService) -> Result<UserInfo> {
    let user: UserInfo = service.http().get_json("/auth/info").await?;
    service.http().session().set_user(Some(user.clone()))?;
    Ok(user)
}

pub async fn change_password(service: &AuthService, request: &ChangePasswordRequest) -> Result<()> {
    request.check()?;
    let _: IgnoredAny = service.http().put("/auth/password", request).await?;
    Ok(())
}
