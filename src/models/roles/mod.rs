use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{EnableStatus, PageQuery, impl_has_id};
use crate::utils::validate::{FieldErrors, Validate, require_text};

// 角色
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: EnableStatus,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
}

impl_has_id!(Role);

// 权限树节点
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionNode {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub children: Vec<PermissionNode>,
}

impl PermissionNode {
    /// 深度优先展开所有节点 ID
    pub fn flatten_ids(&self) -> Vec<i64> {
        let mut ids = vec![self.id];
        for child in &self.children {
            ids.extend(child.flatten_ids());
        }
        ids
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleForm {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
}

impl Validate for RoleForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name, "角色名称");
        require_text(&mut errors, "code", &self.code, "角色编码");
        errors.into_result()
    }
}

// 角色授权
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignPermissionsRequest {
    pub permission_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_ids_depth_first() {
        let tree = PermissionNode {
            id: 1,
            name: "教务".to_string(),
            code: None,
            children: vec![
                PermissionNode {
                    id: 2,
                    name: "学员".to_string(),
                    code: Some("student:list".to_string()),
                    children: vec![PermissionNode {
                        id: 4,
                        name: "导出".to_string(),
                        ..Default::default()
                    }],
                },
                PermissionNode {
                    id: 3,
                    name: "班级".to_string(),
                    ..Default::default()
                },
            ],
        };
        assert_eq!(tree.flatten_ids(), vec![1, 2, 4, 3]);
    }
}
