mod common;

use clap::Parser;
use common::{Harness, body_of, ok, page, query_value};
use serde_json::{Value, json};
use wiremock::{Mock, ResponseTemplate};
use wiremock::matchers::{method, path};

use rust_edu_console::cli::{self, Cli};
use rust_edu_console::config::AppConfig;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["edu-console"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("valid arguments")
}

fn config() -> AppConfig {
    AppConfig::load().expect("default config")
}

#[tokio::test]
async fn test_list_command_sends_filters() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("GET"))
        .and(path("/teachers/list"))
        .respond_with(page(json!([{"id": 1, "name": "李老师"}]), 1))
        .expect(1)
        .mount(&h.server)
        .await;

    let cli = parse(&[
        "list", "teachers", "--page", "2", "--page-size", "5", "--filter", "campusId=3", "-s", "李",
    ]);
    cli::run(cli.command, &h.client, &config()).await.expect("list");

    let requests = h.requests_to("/teachers/list").await;
    assert_eq!(query_value(&requests[0], "page").as_deref(), Some("2"));
    assert_eq!(query_value(&requests[0], "pageSize").as_deref(), Some("5"));
    assert_eq!(query_value(&requests[0], "campusId").as_deref(), Some("3"));
    assert_eq!(query_value(&requests[0], "keyword").as_deref(), Some("李"));
}

#[tokio::test]
async fn test_csv_export_is_saved_to_output_dir() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("GET"))
        .and(path("/students/list"))
        .respond_with(page(json!([{"id": 1, "name": "张三", "phone": "13800000001"}]), 1))
        .mount(&h.server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().to_string_lossy().to_string();
    let cli = parse(&["export", "students", "--format", "csv", "--output", &output]);
    cli::run(cli.command, &h.client, &config()).await.expect("export");

    let files: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].extension().and_then(|e| e.to_str()), Some("csv"));
    let text = std::fs::read_to_string(&files[0]).expect("read csv");
    assert!(text.contains("张三"));
}

#[tokio::test]
async fn test_server_export_skips_list_and_paging() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("GET"))
        .and(path("/students/export"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Disposition", "attachment; filename=\"students.xlsx\"")
                .set_body_raw(b"PK\x03\x04".to_vec(), "application/octet-stream"),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().to_string_lossy().to_string();
    let cli = parse(&[
        "export", "students", "--server", "--filter", "campusId=3", "--output", &output,
    ]);
    cli::run(cli.command, &h.client, &config()).await.expect("export");

    assert!(h.requests_to("/students/list").await.is_empty());
    let requests = h.requests_to("/students/export").await;
    assert_eq!(query_value(&requests[0], "campusId").as_deref(), Some("3"));
    assert_eq!(query_value(&requests[0], "page"), None);
    assert_eq!(query_value(&requests[0], "pageSize"), None);
    assert!(dir.path().join("students.xlsx").exists());
}

#[tokio::test]
async fn test_leads_assign_command() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("GET"))
        .and(path("/leads/list"))
        .respond_with(page(
            json!([{"id": 7, "name": "线索", "phone": "13900000007", "status": "new"}]),
            1,
        ))
        .mount(&h.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/leads/assign"))
        .respond_with(ok(Value::Null))
        .expect(1)
        .mount(&h.server)
        .await;

    let cli = parse(&["leads", "assign", "7", "--advisor", "2"]);
    cli::run(cli.command, &h.client, &config()).await.expect("assign");

    let posts = h.requests_to("/leads/assign").await;
    assert_eq!(body_of(&posts[0]), json!({"leadIds": [7], "advisorId": 2}));
}

#[tokio::test]
async fn test_sidebar_toggle_flips_state() {
    let h = Harness::start().await;
    assert!(!h.client.ui().is_collapsed());
    let cli = parse(&["sidebar", "toggle"]);
    cli::run(cli.command, &h.client, &config()).await.expect("toggle");
    assert!(h.client.ui().is_collapsed());
}
