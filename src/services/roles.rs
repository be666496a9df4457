use serde::de::IgnoredAny;
use tracing::info;

use super::crud::{CrudService, define_resource};
use crate::errors::Result;
use crate::models::roles::{AssignPermissionsRequest, PermissionNode, Role, RoleForm};

define_resource! {
    /// 角色
    RoleResource {
        path: "/roles",
        label: "角色",
        entity: Role,
        create: RoleForm,
        update: RoleForm,
    }
}

pub type RoleService = CrudService<RoleResource>;

impl RoleService {
    /// 角色已有的权限 ID
    pub async fn permissions(&self, id: i64) -> Result<Vec<i64>> {
        self.http().get_json(&self.sub(format!("{id}/permissions"))).await
    }

    pub async fn assign_permissions(&self, id: i64, permission_ids: &[i64]) -> Result<()> {
        let body = AssignPermissionsRequest {
            permission_ids: permission_ids.to_vec(),
        };
        let _: IgnoredAny = self
            .http()
            .put(&self.sub(format!("{id}/permissions")), &body)
            .await?;
        info!("Role {} granted {} permissions", id, permission_ids.len());
        Ok(())
    }

    /// 完整权限树
    pub async fn permission_tree(&self) -> Result<Vec<PermissionNode>> {
        self.http().get_json(&self.sub("permission-tree")).await
    }
}
