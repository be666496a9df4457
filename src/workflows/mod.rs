//! 跨越多个接口的交互流程

pub mod contract_approval;
pub mod lead_assignment;

pub use contract_approval::{ApprovalDialog, ApprovalMode};
pub use lead_assignment::{AssignMode, LeadAssignment};
