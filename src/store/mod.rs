//! 客户端状态
//!
//! - `session`: 当前用户与令牌，令牌持久化到本地文件
//! - `ui`: 界面折叠状态，仅保存在内存中

pub mod session;
pub mod token;
pub mod ui;

pub use session::SessionStore;
pub use token::{FileTokenStorage, MemoryTokenStorage, TokenStorage};
pub use ui::UiStore;
