//! 通用数据表格
//!
//! 分页、防抖搜索、筛选、行选择、列显隐与排序以及导出。
//! 数据既可以来自本地列表，也可以来自任意 [`RowFetcher`]。

pub mod column;
pub mod controller;
pub mod export;
pub mod fetcher;
pub mod query;

pub use column::{CellValue, Column};
pub use controller::{DataTable, TableOptions, TableSource};
pub use export::ExportHook;
pub use fetcher::RowFetcher;
pub use query::TableQuery;
