use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

use crate::models::PageQuery;

pub const DEFAULT_SEARCH_KEY: &str = "keyword";

/// 表格当前查询条件
///
/// 序列化时展开为一层：`page`、`pageSize`、搜索关键字（键名可配置）以及各筛选项。
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub page: u32,
    pub page_size: u32,
    pub filters: BTreeMap<String, String>,
    pub search: Option<String>,
    pub search_key: String,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self::new(10)
    }
}

impl TableQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            filters: BTreeMap::new(),
            search: None,
            search_key: DEFAULT_SEARCH_KEY.to_string(),
        }
    }

    pub fn with_search_key(mut self, key: impl Into<String>) -> Self {
        self.search_key = key.into();
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub fn pagination(&self) -> PageQuery {
        PageQuery::new(self.page, self.page_size)
    }

    /// 非空的搜索关键字
    pub fn search_text(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// 只含搜索和筛选条件，用于后端全量导出
    pub fn without_paging(&self) -> UnpagedQuery<'_> {
        UnpagedQuery(self)
    }

    fn serialize_with<S: Serializer>(&self, serializer: S, paging: bool) -> Result<S::Ok, S::Error> {
        let search = self.search_text();
        let mut map = serializer.serialize_map(None)?;
        if paging {
            map.serialize_entry("page", &self.page)?;
            map.serialize_entry("pageSize", &self.page_size)?;
        }
        if let Some(text) = search {
            map.serialize_entry(&self.search_key, text)?;
        }
        for (key, value) in &self.filters {
            // 保留字段不允许被筛选项覆盖
            if key == "page" || key == "pageSize" || key == &self.search_key {
                continue;
            }
            if value.is_empty() {
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for TableQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize_with(serializer, true)
    }
}

/// 去掉 `page` / `pageSize` 的查询条件
#[derive(Debug, Clone, Copy)]
pub struct UnpagedQuery<'a>(&'a TableQuery);

impl Serialize for UnpagedQuery<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize_with(serializer, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_flat() {
        let mut query = TableQuery::new(20)
            .with_filter("status", "active")
            .with_filter("campusId", "3");
        query.page = 2;
        query.search = Some(" 张 ".to_string());

        assert_eq!(
            serde_json::to_value(&query).expect("ser"),
            json!({
                "page": 2,
                "pageSize": 20,
                "keyword": "张",
                "status": "active",
                "campusId": "3",
            })
        );
    }

    #[test]
    fn test_custom_search_key_and_reserved_filters() {
        let mut query = TableQuery::new(10)
            .with_search_key("name")
            .with_filter("page", "9")
            .with_filter("empty", "");
        query.search = Some("李".to_string());

        assert_eq!(
            serde_json::to_value(&query).expect("ser"),
            json!({"page": 1, "pageSize": 10, "name": "李"})
        );
    }

    #[test]
    fn test_unpaged_keeps_search_and_filters() {
        let mut query = TableQuery::new(20).with_filter("status", "active");
        query.page = 3;
        query.search = Some("王".to_string());

        assert_eq!(
            serde_json::to_value(query.without_paging()).expect("ser"),
            json!({"keyword": "王", "status": "active"})
        );
    }
}
