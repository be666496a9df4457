use tracing::info;

use super::crud::{CrudService, ReadOnly, define_resource};
use crate::errors::Result;
use crate::models::PageQuery;
use crate::models::PageResult;
use crate::models::class_hours::{AdjustHoursRequest, ClassHourAccount, ClassHourRecord};
use crate::utils::validate::Validate;

define_resource! {
    /// 课时账户，由合同生成，不能直接新增
    ClassHourResource {
        path: "/class-hours",
        label: "课时账户",
        entity: ClassHourAccount,
        create: ReadOnly,
        update: ReadOnly,
    }
}

pub type ClassHourService = CrudService<ClassHourResource>;

impl ClassHourService {
    /// 手工调整课时
    pub async fn adjust(&self, id: i64, request: &AdjustHoursRequest) -> Result<ClassHourAccount> {
        request.check()?;
        let account = self.http().post(&self.sub(format!("{id}/adjust")), request).await?;
        info!("Class hours of account {} adjusted by {}", id, request.hours);
        Ok(account)
    }

    /// 课时变动流水
    pub async fn records(&self, id: i64, page: &PageQuery) -> Result<PageResult<ClassHourRecord>> {
        self.http().get(&self.sub(format!("{id}/records")), page).await
    }
}
