pub mod datetime;
pub mod validate;

pub use validate::{FieldErrors, Validate};
