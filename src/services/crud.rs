//! 通用资源服务
//!
//! 后台的大多数业务域都遵循同一组 REST 约定：
//!
//! | 操作 | 请求 |
//! |------|------|
//! | 列表 | `GET /{domain}/list` |
//! | 详情 | `GET /{domain}/{id}` |
//! | 新增 | `POST /{domain}` |
//! | 修改 | `PUT /{domain}/{id}` |
//! | 删除 | `DELETE /{domain}/{id}` |
//! | 批量删除 | `POST /{domain}/batch-delete` |
//! | 状态 | `PUT /{domain}/{id}/status` |
//! | 导出 / 导入 / 模板 | `/{domain}/export`, `/{domain}/import`, `/{domain}/import-template` |
//!
//! 每个业务域只需实现 [`ResourceSpec`]，再在 `CrudService<Spec>` 上补充自己的接口。

use async_trait::async_trait;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Serialize, Serializer};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::info;

use crate::errors::{ClientError, Result};
use crate::http::{Blob, HttpClient};
use crate::models::{IdsRequest, ImportResult, PageResult, StatusRequest};
use crate::table::{RowFetcher, TableQuery};
use crate::utils::validate::{FieldErrors, Validate};

/// 资源描述
pub trait ResourceSpec: Send + Sync + 'static {
    /// 资源路径，例如 `/students`
    const PATH: &'static str;
    /// 中文名称，用于提示和下载文件名
    const LABEL: &'static str;

    type Entity: DeserializeOwned + Send + Sync + 'static;
    type Create: Serialize + Validate + Send + Sync;
    type Update: Serialize + Validate + Send + Sync;
}

/// 只读资源的表单类型，无法构造
#[derive(Debug, Clone, Copy)]
pub enum ReadOnly {}

impl Serialize for ReadOnly {
    fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match *self {}
    }
}

impl Validate for ReadOnly {
    fn validate(&self) -> std::result::Result<(), FieldErrors> {
        match *self {}
    }
}

pub struct CrudService<S: ResourceSpec> {
    http: Arc<HttpClient>,
    path: String,
    _spec: PhantomData<fn() -> S>,
}

impl<S: ResourceSpec> Clone for CrudService<S> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            path: self.path.clone(),
            _spec: PhantomData,
        }
    }
}

impl<S: ResourceSpec> std::fmt::Debug for CrudService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrudService").field("path", &self.path).finish()
    }
}

impl<S: ResourceSpec> CrudService<S> {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self::with_path(http, S::PATH)
    }

    /// 使用运行时指定的路径
    pub fn with_path(http: Arc<HttpClient>, path: impl Into<String>) -> Self {
        let mut path = path.into();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        while path.len() > 1 && path.ends_with('/') {
            path.pop();
        }
        Self {
            http,
            path,
            _spec: PhantomData,
        }
    }

    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 拼接子路径
    pub(crate) fn sub(&self, suffix: impl std::fmt::Display) -> String {
        format!("{}/{}", self.path, suffix)
    }

    // 下载文件名的兜底值
    fn fallback_name(&self, suffix: &str, ext: &str) -> String {
        let stamp = chrono::Local::now().format("%Y%m%d%H%M%S");
        format!("{}{}_{}.{}", S::LABEL, suffix, stamp, ext)
    }

    /// 分页列表
    pub async fn list<Q>(&self, query: &Q) -> Result<PageResult<S::Entity>>
    where
        Q: Serialize + ?Sized + Sync,
    {
        self.http.get(&self.sub("list"), query).await
    }

    pub async fn get(&self, id: i64) -> Result<S::Entity> {
        self.http.get_json(&self.sub(id)).await
    }

    /// 新增，校验失败时不发请求
    pub async fn create(&self, form: &S::Create) -> Result<S::Entity> {
        form.check()?;
        let entity = self.http.post(&self.path, form).await?;
        info!("{} created via {}", S::LABEL, self.path);
        Ok(entity)
    }

    /// 修改，校验失败时不发请求
    pub async fn update(&self, id: i64, form: &S::Update) -> Result<S::Entity> {
        form.check()?;
        let entity = self.http.put(&self.sub(id), form).await?;
        info!("{} {} updated", S::LABEL, id);
        Ok(entity)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let _: IgnoredAny = self.http.delete(&self.sub(id)).await?;
        info!("{} {} deleted", S::LABEL, id);
        Ok(())
    }

    pub async fn batch_delete(&self, ids: &[i64]) -> Result<()> {
        if ids.is_empty() {
            return Err(ClientError::validation("请至少选择一条记录"));
        }
        let body = IdsRequest { ids: ids.to_vec() };
        let _: IgnoredAny = self.http.post(&self.sub("batch-delete"), &body).await?;
        info!("{} batch deleted: {:?}", S::LABEL, ids);
        Ok(())
    }

    /// 修改状态，状态值按后端字符串传输
    pub async fn update_status<St>(&self, id: i64, status: St) -> Result<()>
    where
        St: Serialize + Send + Sync,
    {
        let body = StatusRequest { status };
        let _: IgnoredAny = self.http.put(&self.sub(format!("{id}/status")), &body).await?;
        Ok(())
    }

    /// 后端导出（带当前筛选条件）
    pub async fn export<Q>(&self, query: &Q) -> Result<Blob>
    where
        Q: Serialize + ?Sized + Sync,
    {
        let fallback = self.fallback_name("", "xlsx");
        self.http.download(&self.sub("export"), query, &fallback).await
    }

    /// 上传文件批量导入
    pub async fn import(&self, file_name: &str, bytes: Vec<u8>) -> Result<ImportResult> {
        let result: ImportResult = self.http.upload(&self.sub("import"), file_name, bytes).await?;
        info!(
            "{} import finished: {} succeeded, {} failed",
            S::LABEL,
            result.success_count,
            result.fail_count
        );
        Ok(result)
    }

    /// 下载导入模板
    pub async fn import_template(&self) -> Result<Blob> {
        let fallback = format!("{}导入模板.xlsx", S::LABEL);
        self.http
            .download(&self.sub("import-template"), &(), &fallback)
            .await
    }
}

#[async_trait]
impl<S: ResourceSpec> RowFetcher<S::Entity> for CrudService<S> {
    async fn fetch(&self, query: TableQuery) -> Result<PageResult<S::Entity>> {
        self.list(&query).await
    }
}

/// 声明资源描述类型
macro_rules! define_resource {
    ($(#[$meta:meta])* $name:ident {
        path: $path:literal,
        label: $label:literal,
        entity: $entity:ty,
        create: $create:ty,
        update: $update:ty $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl $crate::services::crud::ResourceSpec for $name {
            const PATH: &'static str = $path;
            const LABEL: &'static str = $label;
            type Entity = $entity;
            type Create = $create;
            type Update = $update;
        }
    };
}
pub(crate) use define_resource;

/// 路径在运行时决定的 JSON 资源，供命令行使用
#[derive(Debug, Clone, Copy)]
pub struct DynamicResource;

impl ResourceSpec for DynamicResource {
    const PATH: &'static str = "/";
    const LABEL: &'static str = "数据";
    type Entity = serde_json::Value;
    type Create = serde_json::Value;
    type Update = serde_json::Value;
}

pub type DynamicService = CrudService<DynamicResource>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::store::{MemoryTokenStorage, SessionStore};
    use std::time::Duration;

    fn http() -> Arc<HttpClient> {
        Arc::new(
            HttpClient::new(
                "http://127.0.0.1:9",
                Duration::from_secs(1),
                "test",
                Arc::new(SessionStore::restore(Box::new(MemoryTokenStorage::new()))),
                Arc::new(RecordingNotifier::new()),
            )
            .expect("client"),
        )
    }

    #[test]
    fn test_with_path_normalizes_slashes() {
        let service = DynamicService::with_path(http(), "students/");
        assert_eq!(service.path(), "/students");
        assert_eq!(service.sub("list"), "/students/list");
        assert_eq!(service.sub(12), "/students/12");
    }

    #[tokio::test]
    async fn test_batch_delete_rejects_empty_ids() {
        let service = DynamicService::with_path(http(), "/students");
        let err = service.batch_delete(&[]).await.expect_err("empty");
        assert!(matches!(err, ClientError::Validation(_)));
    }
}
