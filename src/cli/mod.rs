//! 命令行入口
//!
//! 每个子命令对应一次或几次接口调用，结果以制表符分隔的纯文本输出到标准输出。

pub mod args;
pub mod resource;

pub use args::{Cli, Commands};
pub use resource::Resource;

use serde_json::Value;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use args::{
    ContractsCommand, ExportFormat, LeadsCommand, MessagesCommand, QueryArgs, SidebarCommand,
};
use crate::config::AppConfig;
use crate::errors::{ClientError, Result};
use crate::models::auth::LoginRequest;
use crate::models::leads::{AssignRule, Lead};
use crate::notify::Notice;
use crate::services::EduClient;
use crate::table::export::{export_file_name, write_csv};
use crate::table::{
    Column, DataTable, ExportHook, RowFetcher, TableOptions, TableQuery, TableSource,
};
use crate::workflows::{ApprovalDialog, ApprovalMode, AssignMode, LeadAssignment};

/// 执行一条命令
pub async fn run(command: Commands, client: &EduClient, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Login {
            username,
            password,
            remember_me,
        } => login(client, username, password, remember_me).await,
        Commands::Logout => {
            client.auth().logout().await?;
            client.notifier().notify(Notice::success("已退出登录"));
            Ok(())
        }
        Commands::Whoami => whoami(client).await,
        Commands::List {
            resource,
            query,
            columns,
        } => {
            let table = json_table(client, config, resource, &columns);
            table.load_query(build_query(&query, config)).await?;
            print_table(&table);
            Ok(())
        }
        Commands::Export {
            resource,
            query,
            server,
            format,
            output,
        } => export(client, config, resource, &query, server, format, output).await,
        Commands::Import { resource, file } => import(client, resource, &file).await,
        Commands::Template { resource, output } => {
            let blob = client.resource(resource.path()).import_template().await?;
            let path = blob.save_to(&output_dir(output, config)).await?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Delete { resource, ids } => {
            let service = client.resource(resource.path());
            match ids.as_slice() {
                [id] => service.delete(*id).await?,
                _ => service.batch_delete(&ids).await?,
            }
            client
                .notifier()
                .notify(Notice::success(format!("已删除 {} 条{}", ids.len(), resource.label())));
            Ok(())
        }
        Commands::Leads(command) => leads(client, config, command).await,
        Commands::Contracts(command) => contracts(client, config, command).await,
        Commands::Messages(command) => messages(client, command).await,
        Commands::Sidebar(SidebarCommand::Toggle) => {
            let collapsed = client.ui().toggle();
            println!("collapsed\t{collapsed}");
            Ok(())
        }
    }
}

async fn login(
    client: &EduClient,
    username: String,
    password: Option<String>,
    remember_me: bool,
) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => read_password()?,
    };
    let request = LoginRequest {
        username,
        password,
        remember_me,
    };
    let response = client.auth().login(&request).await?;
    let name = response
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or(request.username);
    client
        .notifier()
        .notify(Notice::success(format!("欢迎，{name}")));
    Ok(())
}

fn read_password() -> Result<String> {
    eprint!("密码: ");
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

async fn whoami(client: &EduClient) -> Result<()> {
    if !client.session().is_authenticated() {
        return Err(ClientError::invalid_state("尚未登录，请先执行 login"));
    }
    let user = match client.session().user() {
        Some(user) => user,
        None => client.auth().profile().await?,
    };
    println!("id\t{}", user.id);
    println!("username\t{}", user.username);
    println!("name\t{}", user.display_name());
    println!("roles\t{}", user.roles.join(","));
    Ok(())
}

fn build_query(args: &QueryArgs, config: &AppConfig) -> TableQuery {
    let mut query = TableQuery::new(args.page_size.unwrap_or(config.table.default_page_size))
        .with_search_key(config.table.search_key.clone());
    query.page = args.page.max(1);
    query.search = args.search.clone();
    query.filters = args.filters.iter().cloned().collect::<BTreeMap<_, _>>();
    query
}

fn table_options(config: &AppConfig, resource: Resource) -> TableOptions {
    TableOptions {
        export_name: resource.label().to_string(),
        ..TableOptions::from(&config.table)
    }
}

fn json_table(
    client: &EduClient,
    config: &AppConfig,
    resource: Resource,
    columns: &[String],
) -> DataTable<Value> {
    let fetcher: Arc<dyn RowFetcher<Value>> = Arc::new(client.resource(resource.path()));
    let source = TableSource::Remote(fetcher);
    let columns = resource.columns(columns);
    let options = table_options(config, resource);
    DataTable::new(source, columns, options, client.notifier().clone())
}

fn print_table<R>(table: &DataTable<R>)
where
    R: crate::models::HasId + Clone + Send + Sync + 'static,
{
    let columns = table.visible_columns();
    let header: Vec<&str> = columns.iter().map(|c| c.title.as_str()).collect();
    println!("{}", header.join("\t"));
    for row in table.rows() {
        let cells: Vec<String> = columns.iter().map(|c| c.cell(&row).to_string()).collect();
        println!("{}", cells.join("\t"));
    }
    let query = table.query();
    println!(
        "-- 第 {} 页，每页 {} 条，共 {} 条",
        query.page,
        query.page_size,
        table.total()
    );
}

fn output_dir(output: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(&config.export.dir))
}

async fn export(
    client: &EduClient,
    config: &AppConfig,
    resource: Resource,
    query: &QueryArgs,
    server: bool,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let dir = output_dir(output, config);
    let query = build_query(query, config);

    let blob = if server {
        // 后端全量导出，无需先加载列表
        let hook: Arc<dyn ExportHook> = Arc::new(client.resource(resource.path()));
        hook.export(&query).await?
    } else {
        let table = json_table(client, config, resource, &[]);
        table.load_query(query).await?;
        match format {
            ExportFormat::Xlsx => table.export().await?,
            ExportFormat::Csv => write_csv(
                &table.rows(),
                &table.visible_columns(),
                &export_file_name(resource.label(), "csv"),
            )?,
        }
    };

    let path = blob.save_to(&dir).await?;
    debug!("Exported {} bytes", blob.len());
    println!("{}", path.display());
    Ok(())
}

async fn import(client: &EduClient, resource: Resource, file: &Path) -> Result<()> {
    let bytes = tokio::fs::read(file).await?;
    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ClientError::file_operation(format!("无效的文件名: {}", file.display())))?;

    let result = client.resource(resource.path()).import(file_name, bytes).await?;
    println!("success\t{}", result.success_count);
    println!("failed\t{}", result.fail_count);
    for error in &result.errors {
        println!(
            "row {}\t{}\t{}",
            error.row,
            error.field.as_deref().unwrap_or("-"),
            error.message
        );
    }
    if result.fail_count == 0 {
        client.notifier().notify(Notice::success("导入完成"));
    } else {
        client.notifier().notify(Notice::warning(format!(
            "导入完成，{} 条失败",
            result.fail_count
        )));
    }
    Ok(())
}

async fn leads(client: &EduClient, config: &AppConfig, command: LeadsCommand) -> Result<()> {
    let LeadsCommand::Assign {
        ids,
        advisor,
        campus,
        rule,
        query,
    } = command;

    let mode = match (advisor, campus) {
        (Some(advisor_id), _) => AssignMode::Manual { advisor_id },
        (None, Some(campus_id)) => AssignMode::Automatic {
            campus_id,
            rule: rule.parse::<AssignRule>().map_err(ClientError::validation)?,
        },
        (None, None) => return Err(ClientError::validation("请指定 --advisor 或 --campus")),
    };

    let service = client.leads();
    let columns = vec![
        Column::new("id", "ID", |l: &Lead| l.id),
        Column::new("name", "姓名", |l: &Lead| l.name.clone()),
        Column::new("assignee", "负责顾问", |l: &Lead| {
            l.assignee.as_ref().map(|a| a.name.clone())
        }),
        Column::new("status", "状态", |l: &Lead| l.status.label()),
    ];
    let table = DataTable::remote(
        service.clone(),
        columns,
        table_options(config, Resource::Leads),
        client.notifier().clone(),
    );
    table.load_query(build_query(&query, config)).await?;
    table.select(&ids);

    let workflow = LeadAssignment::new(service, table, client.notifier().clone());
    workflow.submit(mode).await?;
    print_table(workflow.table());
    Ok(())
}

async fn contracts(client: &EduClient, config: &AppConfig, command: ContractsCommand) -> Result<()> {
    let service = client.contracts();
    let notifier = client.notifier().clone();
    match command {
        ContractsCommand::Submit {
            contract_id,
            remark,
        } => {
            let mut dialog =
                ApprovalDialog::open(service, notifier, ApprovalMode::Submit { contract_id })
                    .await?;
            let record = dialog.submit(remark).await?;
            println!("approval\t{}\t{}", record.id, record.status.label());
        }
        ContractsCommand::Approve {
            contract_id,
            approval_id,
            comment,
        } => {
            let mode = ApprovalMode::Process {
                contract_id,
                approval_id,
                show_flow: false,
            };
            let mut dialog = ApprovalDialog::open(service, notifier, mode).await?;
            dialog.approve(comment).await?;
        }
        ContractsCommand::Reject {
            contract_id,
            approval_id,
            comment,
        } => {
            let mode = ApprovalMode::Process {
                contract_id,
                approval_id,
                show_flow: false,
            };
            let mut dialog = ApprovalDialog::open(service, notifier, mode).await?;
            dialog.reject(comment).await?;
        }
        ContractsCommand::History { contract_id } => {
            let dialog =
                ApprovalDialog::open(service, notifier, ApprovalMode::History { contract_id })
                    .await?;
            for record in dialog.history() {
                println!(
                    "{}\t{}\t{}\t{}",
                    record
                        .create_time
                        .map(|t| crate::utils::datetime::format(&t))
                        .unwrap_or_default(),
                    record.status.label(),
                    record.approver_name.as_deref().unwrap_or("-"),
                    record.comment.as_deref().unwrap_or("")
                );
            }
        }
        ContractsCommand::Flow {
            contract_id,
            approval_id,
        } => {
            let mode = ApprovalMode::Process {
                contract_id,
                approval_id,
                show_flow: true,
            };
            let dialog = ApprovalDialog::open(service, notifier, mode).await?;
            for step in dialog.flow() {
                println!(
                    "{}\t{}\t{}\t{}",
                    step.step,
                    step.name,
                    step.approver_name.as_deref().unwrap_or("-"),
                    step.status.label()
                );
            }
        }
        ContractsCommand::Print {
            contract_id,
            output,
        } => {
            let dialog =
                ApprovalDialog::open(service, notifier, ApprovalMode::History { contract_id })
                    .await?;
            let path = dialog.print(&output_dir(output, config)).await?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

async fn messages(client: &EduClient, command: MessagesCommand) -> Result<()> {
    let service = client.messages();
    match command {
        MessagesCommand::Unread => {
            println!("{}", service.unread_count().await?);
        }
        MessagesCommand::Read { id } => {
            service.mark_read(id).await?;
        }
        MessagesCommand::ReadAll => {
            service.mark_all_read().await?;
            client.notifier().notify(Notice::success("已全部标记为已读"));
        }
    }
    Ok(())
}
