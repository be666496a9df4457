use serde::de::IgnoredAny;
use tracing::info;

use super::LeadService;
use crate::errors::{ClientError, Result};
use crate::models::leads::{AssignRule, AutoAssignRequest, ManualAssignRequest};

impl LeadService {
    /// 手动分配给指定顾问
    pub async fn assign(&self, lead_ids: &[i64], advisor_id: i64) -> Result<()> {
        if lead_ids.is_empty() {
            return Err(ClientError::validation("请先选择要分配的线索"));
        }
        let body = ManualAssignRequest {
            lead_ids: lead_ids.to_vec(),
            advisor_id,
        };
        let _: IgnoredAny = self.http().post(&self.sub("assign"), &body).await?;
        info!("{} leads assigned to advisor {}", lead_ids.len(), advisor_id);
        Ok(())
    }

    /// 按规则自动分配，分配结果由后端计算
    pub async fn auto_assign(
        &self,
        lead_ids: &[i64],
        campus_id: i64,
        rule: AssignRule,
    ) -> Result<()> {
        if lead_ids.is_empty() {
            return Err(ClientError::validation("请先选择要分配的线索"));
        }
        let body = AutoAssignRequest {
            lead_ids: lead_ids.to_vec(),
            campus_id,
            rule,
        };
        let _: IgnoredAny = self.http().post(&self.sub("auto-assign"), &body).await?;
        info!(
            "{} leads auto-assigned in campus {} by {}",
            lead_ids.len(),
            campus_id,
            body.rule.as_str()
        );
        Ok(())
    }
}
