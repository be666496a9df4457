use serde::de::IgnoredAny;
use tracing::info;

use super::crud::{CrudService, define_resource};
use crate::errors::Result;
use crate::models::users::{CreateUserRequest, ResetPasswordRequest, UpdateUserRequest, User};
use crate::utils::validate::Validate;

define_resource! {
    /// 系统用户
    UserResource {
        path: "/users",
        label: "用户",
        entity: User,
        create: CreateUserRequest,
        update: UpdateUserRequest,
    }
}

pub type UserService = CrudService<UserResource>;

impl UserService {
    /// 管理员重置密码
    pub async fn reset_password(&self, id: i64, request: &ResetPasswordRequest) -> Result<()> {
        request.check()?;
        let _: IgnoredAny = self
            .http()
            .put(&self.sub(format!("{id}/password/reset")), request)
            .await?;
        info!("Password of user {} reset", id);
        Ok(())
    }
}
