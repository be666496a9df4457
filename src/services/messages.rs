use serde::de::IgnoredAny;

use super::crud::{CrudService, ReadOnly, define_resource};
use crate::errors::Result;
use crate::models::messages::{Message, SendMessageRequest, UnreadCount};
use crate::utils::validate::Validate;

define_resource! {
    /// 站内消息
    MessageResource {
        path: "/messages",
        label: "消息",
        entity: Message,
        create: SendMessageRequest,
        update: ReadOnly,
    }
}

pub type MessageService = CrudService<MessageResource>;

impl MessageService {
    pub async fn unread_count(&self) -> Result<u64> {
        let count: UnreadCount = self.http().get_json(&self.sub("unread-count")).await?;
        Ok(count.count)
    }

    pub async fn mark_read(&self, id: i64) -> Result<()> {
        let _: IgnoredAny = self.http().put_empty(&self.sub(format!("{id}/read"))).await?;
        Ok(())
    }

    pub async fn mark_all_read(&self) -> Result<()> {
        let _: IgnoredAny = self.http().put_empty(&self.sub("read-all")).await?;
        Ok(())
    }

    /// 发送消息
    pub async fn send(&self, request: &SendMessageRequest) -> Result<()> {
        request.check()?;
        let _: IgnoredAny = self.http().post(self.path(), request).await?;
        Ok(())
    }
}
