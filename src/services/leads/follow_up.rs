use tracing::info;

use super::LeadService;
use crate::errors::Result;
use crate::models::leads::{ConvertLeadRequest, FollowUp, FollowUpForm};
use crate::models::students::Student;
use crate::utils::validate::Validate;

impl LeadService {
    /// 跟进记录
    pub async fn follow_ups(&self, lead_id: i64) -> Result<Vec<FollowUp>> {
        self.http()
            .get_json(&self.sub(format!("{lead_id}/follow-ups")))
            .await
    }

    pub async fn add_follow_up(&self, lead_id: i64, form: &FollowUpForm) -> Result<FollowUp> {
        form.check()?;
        self.http()
            .post(&self.sub(format!("{lead_id}/follow-ups")), form)
            .await
    }

    /// 转化为正式学员
    pub async fn convert(&self, lead_id: i64, request: &ConvertLeadRequest) -> Result<Student> {
        let student: Student = self
            .http()
            .post(&self.sub(format!("{lead_id}/convert")), request)
            .await?;
        info!("Lead {} converted to student {}", lead_id, student.id);
        Ok(student)
    }
}
