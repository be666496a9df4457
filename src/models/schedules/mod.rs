pub mod entities;
pub mod requests;

pub use entities::{ConflictReport, GenerateResult, Schedule, ScheduleConflict, ScheduleStatus};
pub use requests::{
    CalendarParams, ConflictCheckRequest, GenerateScheduleRequest, ScheduleForm,
    ScheduleListParams,
};
