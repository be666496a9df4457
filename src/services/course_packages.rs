use super::crud::{CrudService, define_resource};
use crate::models::course_packages::{CoursePackage, CoursePackageForm};

define_resource! {
    /// 课程套餐
    CoursePackageResource {
        path: "/course-packages",
        label: "课程套餐",
        entity: CoursePackage,
        create: CoursePackageForm,
        update: CoursePackageForm,
    }
}

pub type CoursePackageService = CrudService<CoursePackageResource>;
