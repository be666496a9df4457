use serde::de::IgnoredAny;
use tracing::info;

use super::crud::{CrudService, define_resource};
use crate::errors::{ClientError, Result};
use crate::models::classes::{AddStudentsRequest, Class, ClassForm};
use crate::models::students::Student;

define_resource! {
    /// 班级
    ClassResource {
        path: "/classes",
        label: "班级",
        entity: Class,
        create: ClassForm,
        update: ClassForm,
    }
}

pub type ClassService = CrudService<ClassResource>;

impl ClassService {
    /// 班级学员名单
    pub async fn students(&self, class_id: i64) -> Result<Vec<Student>> {
        self.http()
            .get_json(&self.sub(format!("{class_id}/students")))
            .await
    }

    pub async fn add_students(&self, class_id: i64, student_ids: &[i64]) -> Result<()> {
        if student_ids.is_empty() {
            return Err(ClientError::validation("请至少选择一名学员"));
        }
        let body = AddStudentsRequest {
            student_ids: student_ids.to_vec(),
        };
        let _: IgnoredAny = self
            .http()
            .post(&self.sub(format!("{class_id}/students")), &body)
            .await?;
        info!("Added {} students to class {}", student_ids.len(), class_id);
        Ok(())
    }

    pub async fn remove_student(&self, class_id: i64, student_id: i64) -> Result<()> {
        let _: IgnoredAny = self
            .http()
            .delete(&self.sub(format!("{class_id}/students/{student_id}")))
            .await?;
        info!("Removed student {} from class {}", student_id, class_id);
        Ok(())
    }
}
