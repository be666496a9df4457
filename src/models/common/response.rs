use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ClientError, Result};

/// 业务成功码
pub const SUCCESS_CODE: i32 = 200;

// 统一的API响应结构 {code, msg, data}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T = Value> {
    pub code: i32,
    #[serde(default, alias = "message")]
    pub msg: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn success(data: T, msg: impl Into<String>) -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: msg.into(),
            data: Some(data),
        }
    }

    pub fn error_empty(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl ApiEnvelope<Value> {
    /// 拆开信封，按目标类型解析 data
    pub fn into_outcome<T: DeserializeOwned>(self) -> Result<ApiOutcome<T>> {
        if !self.is_success() {
            return Ok(ApiOutcome::Failure {
                code: self.code,
                msg: self.msg,
            });
        }
        let data = self.data.unwrap_or(Value::Null);
        Ok(ApiOutcome::Success(serde_json::from_value(data)?))
    }
}

/// 拆开信封后的结果
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    Failure { code: i32, msg: String },
}

impl<T> ApiOutcome<T> {
    pub fn into_result(self) -> Result<T> {
        match self {
            ApiOutcome::Success(data) => Ok(data),
            ApiOutcome::Failure { code, msg } => {
                let msg = if msg.is_empty() {
                    format!("操作失败 (code {code})")
                } else {
                    msg
                };
                Err(ClientError::business(msg))
            }
        }
    }
}
