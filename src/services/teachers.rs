use super::crud::{CrudService, define_resource};
use crate::models::teachers::{Teacher, TeacherForm};

define_resource! {
    /// 教师
    TeacherResource {
        path: "/teachers",
        label: "教师",
        entity: Teacher,
        create: TeacherForm,
        update: TeacherForm,
    }
}

pub type TeacherService = CrudService<TeacherResource>;
