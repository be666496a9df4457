pub mod entities;
pub mod requests;

pub use entities::{Class, ClassStatus};
pub use requests::{AddStudentsRequest, ClassForm, ClassListParams};
