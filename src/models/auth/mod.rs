pub mod entities;
pub mod requests;

pub use entities::{LoginResponse, UserInfo};
pub use requests::{ChangePasswordRequest, LoginRequest};
