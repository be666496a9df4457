use std::fmt;
use std::sync::Arc;

/// 单元格取值
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.is_empty(),
            CellValue::Number(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => write!(f, "{text}"),
            // 整数不带小数点
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => CellValue::Empty,
            Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or(CellValue::Empty),
            Value::String(s) => CellValue::Text(s.clone()),
            Value::Bool(b) => CellValue::Text(if *b { "是" } else { "否" }.to_string()),
            // 嵌套对象优先展示 name 字段
            Value::Object(map) => match map.get("name") {
                Some(name) => CellValue::from(name),
                None => CellValue::Text(value.to_string()),
            },
            Value::Array(_) => CellValue::Text(value.to_string()),
        }
    }
}

type Render<R> = Arc<dyn Fn(&R) -> CellValue + Send + Sync>;

/// 表格列定义
pub struct Column<R> {
    pub key: String,
    pub title: String,
    pub visible: bool,
    render: Render<R>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            visible: self.visible,
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("visible", &self.visible)
            .finish()
    }
}

impl<R> Column<R> {
    pub fn new<F, V>(key: impl Into<String>, title: impl Into<String>, render: F) -> Self
    where
        F: Fn(&R) -> V + Send + Sync + 'static,
        V: Into<CellValue>,
    {
        Self {
            key: key.into(),
            title: title.into(),
            visible: true,
            render: Arc::new(move |row| render(row).into()),
        }
    }

    /// 默认隐藏的列
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn cell(&self, row: &R) -> CellValue {
        (self.render)(row)
    }
}

impl Column<serde_json::Value> {
    /// 按字段名读取 JSON 行，支持 `a.b` 形式的嵌套路径
    pub fn json(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        let path = key.clone();
        Self::new(key, title, move |row: &serde_json::Value| {
            let mut current = row;
            for part in path.split('.') {
                match current.get(part) {
                    Some(next) => current = next,
                    None => return CellValue::Empty,
                }
            }
            CellValue::from(current)
        })
    }
}
