use super::crud::{CrudService, define_resource};
use crate::models::students::{CreateStudentRequest, Student, UpdateStudentRequest};

define_resource! {
    /// 学员
    StudentResource {
        path: "/students",
        label: "学员",
        entity: Student,
        create: CreateStudentRequest,
        update: UpdateStudentRequest,
    }
}

pub type StudentService = CrudService<StudentResource>;
