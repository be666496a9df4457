use serde::de::IgnoredAny;
use tracing::info;

use super::crud::{CrudService, define_resource};
use crate::errors::Result;
use crate::models::payments::{Payment, PaymentForm};

define_resource! {
    /// 收款
    PaymentResource {
        path: "/payments",
        label: "收款记录",
        entity: Payment,
        create: PaymentForm,
        update: PaymentForm,
    }
}

pub type PaymentService = CrudService<PaymentResource>;

impl PaymentService {
    /// 财务确认到账
    pub async fn confirm(&self, id: i64) -> Result<()> {
        let _: IgnoredAny = self.http().put_empty(&self.sub(format!("{id}/confirm"))).await?;
        info!("Payment {} confirmed", id);
        Ok(())
    }
}
