use super::crud::{CrudService, define_resource};
use crate::models::classrooms::{Classroom, ClassroomForm};

define_resource! {
    /// 教室
    ClassroomResource {
        path: "/classrooms",
        label: "教室",
        entity: Classroom,
        create: ClassroomForm,
        update: ClassroomForm,
    }
}

pub type ClassroomService = CrudService<ClassroomResource>;
