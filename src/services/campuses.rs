use super::crud::{CrudService, ReadOnly, define_resource};
use crate::errors::Result;
use crate::models::OptionItem;
use crate::models::campuses::Campus;

define_resource! {
    /// 校区
    CampusResource {
        path: "/campuses",
        label: "校区",
        entity: Campus,
        create: ReadOnly,
        update: ReadOnly,
    }
}

pub type CampusService = CrudService<CampusResource>;

impl CampusService {
    /// 下拉选项
    pub async fn options(&self) -> Result<Vec<OptionItem>> {
        self.http().get_json(&self.sub("options")).await
    }
}
