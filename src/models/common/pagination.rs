use serde::{Deserialize, Serialize};

// 分页查询参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl PageQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// 当前页在全部数据中的起始下标
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.page_size as usize
    }
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    #[serde(
        default = "Vec::new",
        alias = "list",
        alias = "records",
        alias = "rows",
        alias = "items"
    )]
    pub data: Vec<T>,
    #[serde(default, deserialize_with = "deserialize_string_to_i64")]
    pub total: i64,
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

impl<T> PageResult<T> {
    pub fn new(data: Vec<T>, total: i64) -> Self {
        Self { data, total }
    }

    /// 总页数
    pub fn total_pages(&self, page_size: u32) -> i64 {
        if page_size == 0 {
            return 0;
        }
        let size = i64::from(page_size);
        (self.total + size - 1) / size
    }
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            i64::try_from(value).map_err(|_| Error::invalid_value(Unexpected::Unsigned(value), &self))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(0)
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_result_accepts_common_list_keys() {
        for key in ["data", "list", "records", "rows", "items"] {
            let page: PageResult<i64> =
                serde_json::from_value(json!({ key: [1, 2], "total": "12" })).expect("page");
            assert_eq!(page.data, vec![1, 2]);
            assert_eq!(page.total, 12);
        }
    }

    #[test]
    fn test_total_pages() {
        let page = PageResult::new(vec![0u8; 10], 21);
        assert_eq!(page.total_pages(10), 3);
        assert_eq!(page.total_pages(0), 0);
    }

    #[test]
    fn test_page_query_serializes_camel_case() {
        let value = serde_json::to_value(PageQuery::new(2, 20)).expect("serialize");
        assert_eq!(value, json!({"page": 2, "pageSize": 20}));
        assert_eq!(PageQuery::new(3, 20).offset(), 40);
        assert_eq!(PageQuery::new(0, 0), PageQuery { page: 1, page_size: 1 });
    }
}
