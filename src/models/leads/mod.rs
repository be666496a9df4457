pub mod entities;
pub mod requests;

pub use entities::{FollowUp, Lead, LeadStatus};
pub use requests::{
    AssignRule, AutoAssignRequest, ConvertLeadRequest, FollowUpForm, LeadForm, LeadListParams,
    ManualAssignRequest,
};
