//! 数据模型定义
//!
//! 与后端接口一一对应的请求/响应结构，字段在传输时使用 camelCase。

pub mod auth;
pub mod campuses;
pub mod class_hours;
pub mod classes;
pub mod classrooms;
pub mod common;
pub mod contracts;
pub mod course_packages;
pub mod holidays;
pub mod leads;
pub mod logs;
pub mod messages;
pub mod payments;
pub mod refunds;
pub mod roles;
pub mod schedules;
pub mod students;
pub mod system;
pub mod teachers;
pub mod users;

pub use common::{
    ApiEnvelope, ApiOutcome, EnableStatus, Gender, HasId, IdsRequest, ImportResult,
    ImportRowError, NamedRef, OptionItem, PageQuery, PageResult, SUCCESS_CODE, StatusRequest,
};
