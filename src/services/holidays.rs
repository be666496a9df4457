use super::crud::{CrudService, define_resource};
use crate::models::holidays::{Holiday, HolidayForm};

define_resource! {
    /// 节假日，排课时跳过
    HolidayResource {
        path: "/holidays",
        label: "节假日",
        entity: Holiday,
        create: HolidayForm,
        update: HolidayForm,
    }
}

pub type HolidayService = CrudService<HolidayResource>;
