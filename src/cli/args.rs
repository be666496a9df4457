use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use super::resource::Resource;

/// 教务管理后台命令行客户端
#[derive(Debug, Parser)]
#[command(name = "edu-console", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// 登录并保存令牌
    Login {
        #[arg(short, long)]
        username: String,

        /// 未提供时从标准输入读取
        #[arg(short, long, env = "EDU_CONSOLE_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// 记住登录
        #[arg(long)]
        remember_me: bool,
    },

    /// 退出登录
    Logout,

    /// 显示当前用户
    Whoami,

    /// 分页列出记录
    List {
        #[arg(value_enum)]
        resource: Resource,

        #[command(flatten)]
        query: QueryArgs,

        /// 显示的列，逗号分隔的字段名
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,
    },

    /// 导出记录
    Export {
        #[arg(value_enum)]
        resource: Resource,

        #[command(flatten)]
        query: QueryArgs,

        /// 使用后端导出接口（全部数据），默认只导出当前页
        #[arg(long)]
        server: bool,

        #[arg(short, long, value_enum, default_value_t = ExportFormat::Xlsx)]
        format: ExportFormat,

        /// 保存目录，默认取配置 export.dir
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 从文件批量导入
    Import {
        #[arg(value_enum)]
        resource: Resource,

        file: PathBuf,
    },

    /// 下载导入模板
    Template {
        #[arg(value_enum)]
        resource: Resource,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 删除记录，多个 ID 时批量删除
    Delete {
        #[arg(value_enum)]
        resource: Resource,

        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// 线索操作
    #[command(subcommand)]
    Leads(LeadsCommand),

    /// 合同审批与打印
    #[command(subcommand)]
    Contracts(ContractsCommand),

    /// 站内消息
    #[command(subcommand)]
    Messages(MessagesCommand),

    /// 侧边栏状态
    #[command(subcommand)]
    Sidebar(SidebarCommand),
}

/// 列表查询参数
#[derive(Debug, Clone, Args)]
pub struct QueryArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// 默认取配置 table.default_page_size
    #[arg(long)]
    pub page_size: Option<u32>,

    /// 搜索关键字
    #[arg(short, long)]
    pub search: Option<String>,

    /// 筛选条件，格式 key=value，可重复
    #[arg(long = "filter", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,
}

#[derive(Debug, Subcommand)]
pub enum LeadsCommand {
    /// 分配线索：指定 --advisor 为手动分配，否则按 --campus 和 --rule 自动分配
    Assign {
        #[arg(required = true)]
        ids: Vec<i64>,

        #[arg(long, conflicts_with_all = ["campus", "rule"])]
        advisor: Option<i64>,

        #[arg(long, required_unless_present = "advisor")]
        campus: Option<i64>,

        /// balanced / round_robin / 自定义规则名
        #[arg(long, default_value = "balanced")]
        rule: String,

        #[command(flatten)]
        query: QueryArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum ContractsCommand {
    /// 提交审批
    Submit {
        contract_id: i64,

        #[arg(long)]
        remark: Option<String>,
    },
    /// 审批通过
    Approve {
        contract_id: i64,
        approval_id: i64,

        #[arg(long)]
        comment: Option<String>,
    },
    /// 审批驳回
    Reject {
        contract_id: i64,
        approval_id: i64,

        #[arg(long)]
        comment: String,
    },
    /// 审批记录
    History { contract_id: i64 },
    /// 审批流程节点
    Flow { contract_id: i64, approval_id: i64 },
    /// 下载打印件
    Print {
        contract_id: i64,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum MessagesCommand {
    /// 未读数量
    Unread,
    /// 标记已读
    Read { id: i64 },
    /// 全部标记已读
    ReadAll,
}

#[derive(Debug, Subcommand)]
pub enum SidebarCommand {
    /// 切换折叠状态
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("invalid filter `{raw}`, expected key=value")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::try_parse_from([
            "edu-console",
            "list",
            "students",
            "--page",
            "2",
            "--filter",
            "status=active",
            "--columns",
            "name,phone",
        ])
        .expect("parse");
        match cli.command {
            Commands::List {
                resource,
                query,
                columns,
            } => {
                assert_eq!(resource, Resource::Students);
                assert_eq!(query.page, 2);
                assert_eq!(query.filters, vec![("status".to_string(), "active".to_string())]);
                assert_eq!(columns, vec!["name", "phone"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_filter_rejects_missing_key() {
        assert!(parse_filter("=x").is_err());
        assert!(parse_filter("status").is_err());
        assert_eq!(parse_filter("a = b"), Ok(("a".to_string(), "b".to_string())));
    }
}
