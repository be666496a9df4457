use serde::de::IgnoredAny;
use tracing::info;

use super::crud::{CrudService, define_resource};
use crate::errors::Result;
use crate::models::system::{SystemConfig, SystemConfigForm, UpdateConfigValueRequest};

define_resource! {
    /// 系统参数
    SystemConfigResource {
        path: "/system/config",
        label: "系统参数",
        entity: SystemConfig,
        create: SystemConfigForm,
        update: SystemConfigForm,
    }
}

pub type SystemConfigService = CrudService<SystemConfigResource>;

impl SystemConfigService {
    pub async fn get_by_key(&self, key: &str) -> Result<SystemConfig> {
        self.http().get_json(&self.sub(format!("key/{key}"))).await
    }

    /// 只修改参数值
    pub async fn update_value(&self, id: i64, value: impl Into<String>) -> Result<()> {
        let body = UpdateConfigValueRequest {
            config_value: value.into(),
        };
        let _: IgnoredAny = self.http().put(&self.sub(id), &body).await?;
        Ok(())
    }

    /// 通知后端刷新参数缓存
    pub async fn refresh_cache(&self) -> Result<()> {
        let _: IgnoredAny = self.http().post_empty(&self.sub("refresh")).await?;
        info!("System config cache refreshed");
        Ok(())
    }
}
