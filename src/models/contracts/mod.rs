pub mod entities;
pub mod requests;

pub use entities::{ApprovalRecord, ApprovalStatus, ApprovalStep, Contract, ContractStatus};
pub use requests::{
    ApprovalAction, ContractForm, ContractListParams, ProcessApprovalRequest,
    SubmitApprovalRequest,
};
