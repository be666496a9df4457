use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::column::Column;
use super::export::{ExportHook, export_file_name, write_xlsx};
use super::fetcher::RowFetcher;
use super::query::TableQuery;
use crate::config::TableConfig;
use crate::errors::{ClientError, Result};
use crate::http::Blob;
use crate::models::{HasId, PageResult};
use crate::notify::{Notice, Notifier};

/// 数据来源
pub enum TableSource<R> {
    /// 本地数据，前端分页和搜索
    Static(Vec<R>),
    /// 远程分页
    Remote(Arc<dyn RowFetcher<R>>),
}

/// 表格选项
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub page_size: u32,
    pub debounce: Duration,
    pub search_key: String,
    /// 导出文件名前缀和工作表名
    pub export_name: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size: 10,
            debounce: Duration::from_millis(300),
            search_key: super::query::DEFAULT_SEARCH_KEY.to_string(),
            export_name: "导出数据".to_string(),
        }
    }
}

impl From<&TableConfig> for TableOptions {
    fn from(config: &TableConfig) -> Self {
        Self {
            page_size: config.default_page_size.max(1),
            debounce: Duration::from_millis(config.debounce_ms),
            search_key: config.search_key.clone(),
            ..Self::default()
        }
    }
}

// 加载中途被丢弃时清除 loading 和 in_flight，较新的加载不受影响
struct FetchGuard<'a, R> {
    table: &'a DataTable<R>,
    generation: u64,
    armed: bool,
}

impl<R> Drop for FetchGuard<'_, R> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Ok(mut state) = self.table.inner.state.lock() {
            if state.generation == self.generation {
                state.loading = false;
                state.in_flight = None;
            }
        }
    }
}

// 可变状态，锁不跨越 await
struct TableState<R> {
    rows: Vec<R>,
    total: i64,
    loading: bool,
    query: TableQuery,
    selection: Vec<i64>,
    columns: Vec<Column<R>>,
    generation: u64,
    in_flight: Option<CancellationToken>,
    search_seq: u64,
    pending_search: Option<CancellationToken>,
}

struct Inner<R> {
    source: TableSource<R>,
    notifier: Arc<dyn Notifier>,
    default_columns: Vec<Column<R>>,
    options: TableOptions,
    export_hook: Option<Arc<dyn ExportHook>>,
    state: Mutex<TableState<R>>,
}

/// 通用数据表格
///
/// 克隆得到的是同一个表格的句柄。每次加载都会取消仍在进行的上一次加载，
/// 过期的响应不会覆盖新数据。
pub struct DataTable<R> {
    inner: Arc<Inner<R>>,
}

impl<R> Clone for DataTable<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R> DataTable<R>
where
    R: HasId + Clone + Send + Sync + 'static,
{
    pub fn new(
        source: TableSource<R>,
        columns: Vec<Column<R>>,
        options: TableOptions,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::build(source, columns, options, notifier, None)
    }

    /// 使用自定义导出
    pub fn with_export_hook(
        source: TableSource<R>,
        columns: Vec<Column<R>>,
        options: TableOptions,
        notifier: Arc<dyn Notifier>,
        hook: Arc<dyn ExportHook>,
    ) -> Self {
        Self::build(source, columns, options, notifier, Some(hook))
    }

    fn build(
        source: TableSource<R>,
        columns: Vec<Column<R>>,
        options: TableOptions,
        notifier: Arc<dyn Notifier>,
        export_hook: Option<Arc<dyn ExportHook>>,
    ) -> Self {
        let query = TableQuery::new(options.page_size).with_search_key(options.search_key.clone());
        let state = TableState {
            rows: Vec::new(),
            total: 0,
            loading: false,
            query,
            selection: Vec::new(),
            columns: columns.clone(),
            generation: 0,
            in_flight: None,
            search_seq: 0,
            pending_search: None,
        };
        Self {
            inner: Arc::new(Inner {
                source,
                notifier,
                default_columns: columns,
                options,
                export_hook,
                state: Mutex::new(state),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, TableState<R>>> {
        self.inner
            .state
            .lock()
            .map_err(|_| ClientError::invalid_state("table state lock poisoned"))
    }

    // ---- 读取 ----

    pub fn rows(&self) -> Vec<R> {
        self.lock().map(|s| s.rows.clone()).unwrap_or_default()
    }

    pub fn total(&self) -> i64 {
        self.lock().map(|s| s.total).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().map(|s| s.loading).unwrap_or_default()
    }

    pub fn query(&self) -> TableQuery {
        self.lock()
            .map(|s| s.query.clone())
            .unwrap_or_else(|_| TableQuery::new(self.inner.options.page_size))
    }

    pub fn page(&self) -> u32 {
        self.query().page
    }

    pub fn page_size(&self) -> u32 {
        self.query().page_size
    }

    pub fn columns(&self) -> Vec<Column<R>> {
        self.lock().map(|s| s.columns.clone()).unwrap_or_default()
    }

    /// 当前可见列（按显示顺序）
    pub fn visible_columns(&self) -> Vec<Column<R>> {
        self.columns().into_iter().filter(|c| c.visible).collect()
    }

    // ---- 加载 ----

    /// 按当前条件重新加载
    pub async fn refresh(&self) -> Result<()> {
        let (query, token, generation) = {
            let mut state = self.lock()?;
            if let Some(previous) = state.in_flight.take() {
                previous.cancel();
            }
            let token = CancellationToken::new();
            state.generation += 1;
            state.in_flight = Some(token.clone());
            state.loading = true;
            (state.query.clone(), token, state.generation)
        };
        // 调用方中途放弃时复位加载状态
        let mut guard = FetchGuard {
            table: self,
            generation,
            armed: true,
        };

        let result = match &self.inner.source {
            TableSource::Static(rows) => Ok(self.page_locally(rows, &query)),
            TableSource::Remote(fetcher) => {
                debug!(page = query.page, page_size = query.page_size, "Fetching table rows");
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!(generation, "Table fetch superseded");
                        return Err(ClientError::cancelled("superseded by a newer request"));
                    }
                    result = fetcher.fetch(query) => result,
                }
            }
        };
        guard.armed = false;

        let mut state = self.lock()?;
        if state.generation != generation {
            return Err(ClientError::cancelled("superseded by a newer request"));
        }
        state.in_flight = None;
        state.loading = false;

        match result {
            Ok(page) => {
                state.rows = page.data;
                state.total = page.total;
                Ok(())
            }
            Err(err) => {
                // 保留旧数据；HTTP 层已提示过的错误不再重复提示
                warn!("Table fetch failed: {}", err);
                if !err.is_surfaced() {
                    self.inner.notifier.notify(Notice::error(err.user_message()));
                }
                Err(err)
            }
        }
    }

    // 本地分页，搜索匹配任一可见列
    fn page_locally(&self, rows: &[R], query: &TableQuery) -> PageResult<R> {
        let columns = self.visible_columns();
        let needle = query.search_text().map(str::to_lowercase);
        let matched: Vec<&R> = rows
            .iter()
            .filter(|row| match &needle {
                Some(needle) => columns
                    .iter()
                    .any(|c| c.cell(row).to_string().to_lowercase().contains(needle.as_str())),
                None => true,
            })
            .collect();

        let total = matched.len() as i64;
        let data = matched
            .into_iter()
            .skip(query.pagination().offset())
            .take(query.page_size as usize)
            .cloned()
            .collect();
        PageResult::new(data, total)
    }

    fn update_query(&self, apply: impl FnOnce(&mut TableQuery)) -> Result<()> {
        let mut state = self.lock()?;
        apply(&mut state.query);
        Ok(())
    }

    pub async fn set_page(&self, page: u32) -> Result<()> {
        self.update_query(|q| q.page = page.max(1))?;
        self.refresh().await
    }

    /// 修改每页条数，回到第一页
    pub async fn set_page_size(&self, page_size: u32) -> Result<()> {
        self.update_query(|q| {
            q.page_size = page_size.max(1);
            q.page = 1;
        })?;
        self.refresh().await
    }

    /// 同时修改页码和每页条数
    pub async fn set_pagination(&self, page: u32, page_size: u32) -> Result<()> {
        self.update_query(|q| {
            q.page = page.max(1);
            q.page_size = page_size.max(1);
        })?;
        self.refresh().await
    }

    /// 替换筛选条件，回到第一页
    pub async fn set_filters(&self, filters: BTreeMap<String, String>) -> Result<()> {
        self.update_query(|q| {
            q.filters = filters;
            q.page = 1;
        })?;
        self.refresh().await
    }

    /// 以完整的查询条件加载
    pub async fn load_query(&self, query: TableQuery) -> Result<()> {
        self.update_query(|q| *q = query)?;
        self.refresh().await
    }

    /// 立即应用搜索，回到第一页
    pub async fn apply_search(&self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        self.update_query(|q| {
            q.search = Some(text).filter(|t| !t.trim().is_empty());
            q.page = 1;
        })?;
        self.refresh().await
    }

    /// 防抖搜索
    ///
    /// 静默期内的新输入会取代旧输入。被取代时返回 `Ok(false)`，
    /// 实际发起加载时返回 `Ok(true)`。
    pub async fn search(&self, text: impl Into<String>) -> Result<bool> {
        let text = text.into();
        let (token, seq) = {
            let mut state = self.lock()?;
            if let Some(previous) = state.pending_search.take() {
                previous.cancel();
            }
            let token = CancellationToken::new();
            state.search_seq += 1;
            state.pending_search = Some(token.clone());
            (token, state.search_seq)
        };

        tokio::select! {
            _ = token.cancelled() => return Ok(false),
            _ = tokio::time::sleep(self.inner.options.debounce) => {}
        }

        {
            let mut state = self.lock()?;
            if state.search_seq != seq {
                return Ok(false);
            }
            state.pending_search = None;
        }
        self.apply_search(text).await?;
        Ok(true)
    }

    // ---- 选择 ----

    pub fn select(&self, ids: &[i64]) {
        if let Ok(mut state) = self.lock() {
            for id in ids {
                if !state.selection.contains(id) {
                    state.selection.push(*id);
                }
            }
        }
    }

    /// 切换单行选中状态，返回切换后的状态
    pub fn toggle(&self, id: i64) -> bool {
        let Ok(mut state) = self.lock() else {
            return false;
        };
        if let Some(pos) = state.selection.iter().position(|s| *s == id) {
            state.selection.remove(pos);
            false
        } else {
            state.selection.push(id);
            true
        }
    }

    /// 全选当前页
    pub fn select_page(&self) {
        let ids: Vec<i64> = self.rows().iter().map(HasId::id).collect();
        self.select(&ids);
    }

    pub fn clear_selection(&self) {
        if let Ok(mut state) = self.lock() {
            state.selection.clear();
        }
    }

    pub fn selected_ids(&self) -> Vec<i64> {
        self.lock().map(|s| s.selection.clone()).unwrap_or_default()
    }

    /// 当前页中被选中的行
    pub fn selected_rows(&self) -> Vec<R> {
        self.lock()
            .map(|s| {
                s.rows
                    .iter()
                    .filter(|r| s.selection.contains(&r.id()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    // ---- 列设置 ----

    /// 显示或隐藏列，列不存在时返回 false
    pub fn set_column_visible(&self, key: &str, visible: bool) -> bool {
        let Ok(mut state) = self.lock() else {
            return false;
        };
        match state.columns.iter_mut().find(|c| c.key == key) {
            Some(column) => {
                column.visible = visible;
                true
            }
            None => false,
        }
    }

    /// 调整列顺序
    pub fn move_column(&self, key: &str, to: usize) -> bool {
        let Ok(mut state) = self.lock() else {
            return false;
        };
        let Some(from) = state.columns.iter().position(|c| c.key == key) else {
            return false;
        };
        let column = state.columns.remove(from);
        let to = to.min(state.columns.len());
        state.columns.insert(to, column);
        true
    }

    pub fn reset_columns(&self) {
        if let Ok(mut state) = self.lock() {
            state.columns = self.inner.default_columns.clone();
        }
    }

    // ---- 导出 ----

    /// 导出：有自定义导出时交给它，否则导出当前页可见列
    pub async fn export(&self) -> Result<Blob> {
        if let Some(hook) = &self.inner.export_hook {
            let query = self.query();
            return hook.export(&query).await;
        }
        let (rows, columns) = {
            let state = self.lock()?;
            let columns: Vec<Column<R>> =
                state.columns.iter().filter(|c| c.visible).cloned().collect();
            (state.rows.clone(), columns)
        };
        let name = &self.inner.options.export_name;
        write_xlsx(&rows, &columns, name, &export_file_name(name, "xlsx"))
    }
}

impl<R> DataTable<R>
where
    R: HasId + Clone + Send + Sync + 'static,
{
    /// 远程表格
    pub fn remote<F>(
        fetcher: F,
        columns: Vec<Column<R>>,
        options: TableOptions,
        notifier: Arc<dyn Notifier>,
    ) -> Self
    where
        F: RowFetcher<R> + 'static,
    {
        Self::new(TableSource::Remote(Arc::new(fetcher)), columns, options, notifier)
    }

    /// 本地表格
    pub fn local(
        rows: Vec<R>,
        columns: Vec<Column<R>>,
        options: TableOptions,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::new(TableSource::Static(rows), columns, options, notifier)
    }
}

impl<R> std::fmt::Debug for DataTable<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("DataTable");
        if let Ok(state) = self.inner.state.lock() {
            debug
                .field("query", &state.query)
                .field("rows", &state.rows.len())
                .field("total", &state.total)
                .field("loading", &state.loading)
                .field("selection", &state.selection);
        }
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use serde_json::{Value, json};

    fn local_table(rows: Vec<Value>) -> DataTable<Value> {
        DataTable::local(
            rows,
            vec![Column::json("name", "姓名"), Column::json("phone", "电话")],
            TableOptions {
                page_size: 2,
                ..TableOptions::default()
            },
            Arc::new(RecordingNotifier::new()),
        )
    }

    fn people() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "张三", "phone": "13800000001"}),
            json!({"id": 2, "name": "李四", "phone": "13800000002"}),
            json!({"id": 3, "name": "张伟", "phone": "13800000003"}),
        ]
    }

    #[tokio::test]
    async fn test_local_paging_and_search() {
        let table = local_table(people());
        table.refresh().await.expect("refresh");
        assert_eq!(table.total(), 3);
        assert_eq!(table.rows().len(), 2);

        table.set_page(2).await.expect("page");
        assert_eq!(table.rows().iter().map(HasId::id).collect::<Vec<_>>(), vec![3]);

        table.apply_search("张").await.expect("search");
        assert_eq!(table.page(), 1);
        assert_eq!(table.total(), 2);
    }

    #[tokio::test]
    async fn test_selection_and_columns() {
        let table = local_table(people());
        table.refresh().await.expect("refresh");

        table.select(&[1, 2, 1]);
        assert_eq!(table.selected_ids(), vec![1, 2]);
        assert!(!table.toggle(1));
        assert_eq!(table.selected_rows().len(), 1);
        table.clear_selection();
        assert!(table.selected_ids().is_empty());

        assert!(table.set_column_visible("phone", false));
        assert!(!table.set_column_visible("missing", false));
        assert_eq!(table.visible_columns().len(), 1);
        assert!(table.move_column("phone", 0));
        assert_eq!(table.columns()[0].key, "phone");
        table.reset_columns();
        assert_eq!(table.columns()[0].key, "name");
        assert!(table.columns().iter().all(|c| c.visible));
    }
}
