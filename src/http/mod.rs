//! HTTP 客户端封装
//!
//! - 为每个请求附加 Bearer 令牌与请求 ID
//! - 拆开 `{code, msg, data}` 信封
//! - 按状态码统一提示，401 时清除令牌并跳转登录页
//! - 文件下载绕过信封，直接返回二进制内容

pub mod blob;
pub mod client;

pub use blob::Blob;
pub use client::HttpClient;
