pub mod pagination;
pub mod response;

pub use pagination::{PageQuery, PageResult};
pub use response::{ApiEnvelope, ApiOutcome, SUCCESS_CODE};

use serde::{Deserialize, Serialize};

/// 表格行主键
pub trait HasId {
    fn id(&self) -> i64;
}

impl HasId for serde_json::Value {
    // 长整型主键常以字符串下发
    fn id(&self) -> i64 {
        match self.get("id") {
            Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or_default(),
            Some(value) => value.as_i64().unwrap_or_default(),
            None => 0,
        }
    }
}

/// 为实体实现 `HasId`
macro_rules! impl_has_id {
    ($($entity:ty),* $(,)?) => {
        $(
            impl $crate::models::common::HasId for $entity {
                fn id(&self) -> i64 {
                    self.id
                }
            }
        )*
    };
}
pub(crate) use impl_has_id;

/// 定义后端状态枚举
///
/// 自动生成：
/// - 以字符串传输的 enum，未知取值落入 `Unknown`
/// - as_str() / label() / all()
/// - Display / FromStr
macro_rules! define_status {
    ($(#[$meta:meta])* $name:ident {
        $($variant:ident => $value:literal : $label:literal),* $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $value)] $variant,)*
            #[default]
            #[serde(other, rename = "unknown")]
            Unknown,
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)*
                    $name::Unknown => "unknown",
                }
            }

            /// 中文显示名称
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)*
                    $name::Unknown => "未知",
                }
            }

            pub fn all() -> &'static [$name] {
                &[$($name::$variant),*]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)*
                    _ => Err(format!("Invalid {}: {s}", stringify!($name))),
                }
            }
        }
    };
}
pub(crate) use define_status;

// 批量操作请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdsRequest {
    pub ids: Vec<i64>,
}

// 状态变更请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRequest<S> {
    pub status: S,
}

// 导入失败的行
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRowError {
    pub row: usize,
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
}

// 导入结果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    #[serde(default)]
    pub success_count: u32,
    #[serde(default)]
    pub fail_count: u32,
    #[serde(default)]
    pub errors: Vec<ImportRowError>,
}

// 引用对象（例如线索的负责人）
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NamedRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

// 下拉选项
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionItem {
    pub label: String,
    pub value: i64,
}

define_status! {
    // 性别
    Gender {
        Male => "male": "男",
        Female => "female": "女",
    }
}

define_status! {
    // 通用启用状态
    EnableStatus {
        Enabled => "enabled": "启用",
        Disabled => "disabled": "停用",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_roundtrip_and_unknown_fallback() {
        let status: EnableStatus = serde_json::from_value(json!("disabled")).expect("known");
        assert_eq!(status, EnableStatus::Disabled);
        assert_eq!(status.label(), "停用");

        let status: EnableStatus = serde_json::from_value(json!("archived")).expect("unknown");
        assert_eq!(status, EnableStatus::Unknown);
        assert_eq!(serde_json::to_value(EnableStatus::Enabled).expect("ser"), json!("enabled"));
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
        assert!("x".parse::<Gender>().is_err());
        assert_eq!(Gender::all().len(), 2);
    }

    #[test]
    fn test_value_row_id() {
        assert_eq!(json!({"id": 9, "name": "a"}).id(), 9);
        assert_eq!(json!({"name": "a"}).id(), 0);
        assert_eq!(json!({"id": "1234567890123", "name": "a"}).id(), 1234567890123);
        assert_eq!(json!({"id": "abc"}).id(), 0);
    }
}
