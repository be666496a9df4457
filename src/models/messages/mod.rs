use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{PageQuery, define_status, impl_has_id};
use crate::utils::validate::{FieldErrors, Validate, require_text};

define_status! {
    // 消息类型
    MessageType {
        System => "system": "系统通知",
        Notice => "notice": "公告",
        Reminder => "reminder": "提醒",
    }
}

// 站内消息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, rename = "type")]
    pub msg_type: MessageType,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
}

impl_has_id!(Message);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    pub msg_type: Option<MessageType>,
}

// 未读数，后端可能直接返回数字或 {count}
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "UnreadCountRepr")]
pub struct UnreadCount {
    pub count: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UnreadCountRepr {
    Plain(u64),
    Wrapped { count: u64 },
}

impl From<UnreadCountRepr> for UnreadCount {
    fn from(repr: UnreadCountRepr) -> Self {
        match repr {
            UnreadCountRepr::Plain(count) | UnreadCountRepr::Wrapped { count } => Self { count },
        }
    }
}

// 发送消息
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub msg_type: MessageType,
    // 为空表示全员
    pub receiver_ids: Vec<i64>,
}

impl Validate for SendMessageRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "title", &self.title, "消息标题");
        require_text(&mut errors, "content", &self.content, "消息内容");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unread_count_accepts_both_shapes() {
        let plain: UnreadCount = serde_json::from_value(json!(5)).expect("plain");
        let wrapped: UnreadCount = serde_json::from_value(json!({"count": 5})).expect("wrapped");
        assert_eq!(plain, wrapped);
        assert_eq!(plain.count, 5);
    }

    #[test]
    fn test_send_requires_title_and_content() {
        let req = SendMessageRequest {
            title: " ".to_string(),
            content: String::new(),
            msg_type: MessageType::Notice,
            receiver_ids: vec![],
        };
        assert_eq!(req.validate().expect_err("invalid").len(), 2);
    }
}
