use serde::de::IgnoredAny;
use tracing::info;

use super::crud::{CrudService, define_resource};
use crate::errors::Result;
use crate::models::refunds::{
    Refund, RefundCalculateRequest, RefundForm, RefundQuote, RefundReviewRequest,
};

define_resource! {
    /// 退费
    RefundResource {
        path: "/refunds",
        label: "退费记录",
        entity: Refund,
        create: RefundForm,
        update: RefundForm,
    }
}

pub type RefundService = CrudService<RefundResource>;

impl RefundService {
    /// 退费试算，金额完全由后端给出
    pub async fn calculate(&self, request: &RefundCalculateRequest) -> Result<RefundQuote> {
        self.http().post(&self.sub("calculate"), request).await
    }

    pub async fn review(&self, id: i64, request: &RefundReviewRequest) -> Result<()> {
        let _: IgnoredAny = self.http().put(&self.sub(format!("{id}/review")), request).await?;
        info!("Refund {} reviewed: approved = {}", id, request.approved);
        Ok(())
    }
}
