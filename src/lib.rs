//! EduConsole - 教务管理后台客户端
//!
//! 面向教务管理后端接口的强类型客户端 SDK 和命令行工具。
//!
//! # 架构
//! - `cli`: 命令行参数与命令分发
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `http`: 接口请求层（令牌注入、响应解包、错误提示、文件下载）
//! - `models`: 数据模型定义
//! - `notify`: 提示与跳转通知
//! - `services`: 各业务域接口服务
//! - `store`: 会话和界面状态
//! - `table`: 通用数据表格（分页、搜索、选择、列设置、导出）
//! - `utils`: 工具函数
//! - `workflows`: 线索分配、合同审批等多步操作

pub mod cli;
pub mod config;
pub mod errors;
pub mod http;
pub mod models;
pub mod notify;
pub mod services;
pub mod store;
pub mod table;
pub mod utils;
pub mod workflows;
