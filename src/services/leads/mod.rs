pub mod assign;
pub mod follow_up;

use super::crud::{CrudService, define_resource};
use crate::models::leads::{Lead, LeadForm};

define_resource! {
    /// 线索
    LeadResource {
        path: "/leads",
        label: "线索",
        entity: Lead,
        create: LeadForm,
        update: LeadForm,
    }
}

pub type LeadService = CrudService<LeadResource>;
