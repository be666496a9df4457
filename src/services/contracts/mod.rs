pub mod approval;
pub mod print;

use super::crud::{CrudService, define_resource};
use crate::models::contracts::{Contract, ContractForm};

define_resource! {
    /// 合同
    ContractResource {
        path: "/contracts",
        label: "合同",
        entity: Contract,
        create: ContractForm,
        update: ContractForm,
    }
}

pub type ContractService = CrudService<ContractResource>;
