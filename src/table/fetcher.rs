use async_trait::async_trait;
use std::future::Future;

use super::query::TableQuery;
use crate::errors::Result;
use crate::models::PageResult;

/// 远程分页数据源
#[async_trait]
pub trait RowFetcher<R>: Send + Sync {
    async fn fetch(&self, query: TableQuery) -> Result<PageResult<R>>;
}

// 任意 async 闭包都可以作为数据源
#[async_trait]
impl<R, F, Fut> RowFetcher<R> for F
where
    R: Send + 'static,
    F: Fn(TableQuery) -> Fut + Send + Sync,
    Fut: Future<Output = Result<PageResult<R>>> + Send + 'static,
{
    async fn fetch(&self, query: TableQuery) -> Result<PageResult<R>> {
        (self)(query).await
    }
}
