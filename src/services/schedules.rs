use serde::de::IgnoredAny;
use tracing::{info, warn};

use super::crud::{CrudService, define_resource};
use crate::errors::Result;
use crate::models::schedules::{
    CalendarParams, ConflictCheckRequest, ConflictReport, GenerateResult, GenerateScheduleRequest,
    Schedule, ScheduleForm,
};
use crate::utils::validate::Validate;

define_resource! {
    /// 排课
    ScheduleResource {
        path: "/schedules",
        label: "课表",
        entity: Schedule,
        create: ScheduleForm,
        update: ScheduleForm,
    }
}

pub type ScheduleService = CrudService<ScheduleResource>;

impl ScheduleService {
    /// 冲突检测，由后端判断
    pub async fn check_conflict(&self, request: &ConflictCheckRequest) -> Result<ConflictReport> {
        request.check()?;
        let report: ConflictReport = self.http().post(&self.sub("check-conflict"), request).await?;
        if report.has_conflict {
            warn!("Schedule conflicts detected: {}", report.conflicts.len());
        }
        Ok(report)
    }

    /// 按周期批量生成
    pub async fn generate(&self, request: &GenerateScheduleRequest) -> Result<GenerateResult> {
        request.check()?;
        let result: GenerateResult = self.http().post(&self.sub("generate"), request).await?;
        info!(
            "Generated {} schedules for class {} ({} skipped)",
            result.created,
            request.class_id,
            result.skipped
        );
        Ok(result)
    }

    /// 日历视图
    pub async fn calendar(&self, params: &CalendarParams) -> Result<Vec<Schedule>> {
        self.http().get(&self.sub("calendar"), params).await
    }

    /// 停课
    pub async fn cancel(&self, id: i64) -> Result<()> {
        let _: IgnoredAny = self.http().put_empty(&self.sub(format!("{id}/cancel"))).await?;
        info!("Schedule {} cancelled", id);
        Ok(())
    }
}
