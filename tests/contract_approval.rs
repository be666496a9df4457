mod common;

use common::{Harness, body_of, ok};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use rust_edu_console::errors::ClientError;
use rust_edu_console::models::contracts::ApprovalStatus;
use rust_edu_console::notify::NoticeLevel;
use rust_edu_console::workflows::{ApprovalDialog, ApprovalMode};

fn process_mode(show_flow: bool) -> ApprovalMode {
    ApprovalMode::Process {
        contract_id: 8,
        approval_id: 21,
        show_flow,
    }
}

#[tokio::test]
async fn test_process_mode_loads_flow_and_approves() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("GET"))
        .and(path("/contracts/approvals/21/flow"))
        .respond_with(ok(json!([
            {"step": 1, "name": "校区主管", "approverName": "王主管", "status": "approved"},
            {"step": 2, "name": "财务", "status": "pending"},
        ])))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/contracts/approvals/21"))
        .respond_with(ok(Value::Null))
        .expect(1)
        .mount(&h.server)
        .await;

    let mut dialog =
        ApprovalDialog::open(h.client.contracts(), h.notifier.clone(), process_mode(true))
            .await
            .expect("open");
    assert_eq!(dialog.flow().len(), 2);
    assert_eq!(dialog.flow()[0].status, ApprovalStatus::Approved);

    dialog.approve(Some("同意".to_string())).await.expect("approve");
    assert!(!dialog.is_open());

    let puts = h.requests_to("/contracts/approvals/21").await;
    assert_eq!(body_of(&puts[0]), json!({"action": "approve", "comment": "同意"}));
    let notice = h.notifier.notices().pop().expect("notice");
    assert_eq!(notice.level, NoticeLevel::Success);
}

#[tokio::test]
async fn test_reject_requires_comment() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("PUT"))
        .and(path("/contracts/approvals/21"))
        .respond_with(ok(Value::Null))
        .expect(0)
        .mount(&h.server)
        .await;

    let mut dialog =
        ApprovalDialog::open(h.client.contracts(), h.notifier.clone(), process_mode(false))
            .await
            .expect("open");
    let err = dialog.reject("  ").await.expect_err("empty comment");

    assert!(matches!(err, ClientError::Validation(_)));
    assert!(dialog.is_open());
    let notice = h.notifier.notices().pop().expect("notice");
    assert_eq!(notice.level, NoticeLevel::Warning);
}

#[tokio::test]
async fn test_operations_are_limited_to_their_mode() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("GET"))
        .and(path("/contracts/8/approvals"))
        .respond_with(ok(json!([
            {"id": 20, "contractId": 8, "status": "rejected", "comment": "金额有误",
             "createTime": "2024-03-01 10:00:00"},
        ])))
        .mount(&h.server)
        .await;

    let mut dialog = ApprovalDialog::open(
        h.client.contracts(),
        h.notifier.clone(),
        ApprovalMode::History { contract_id: 8 },
    )
    .await
    .expect("open");
    assert_eq!(dialog.history().len(), 1);
    assert_eq!(dialog.history()[0].status, ApprovalStatus::Rejected);

    let err = dialog.approve(None).await.expect_err("not in process mode");
    assert!(matches!(err, ClientError::InvalidState(_)));
    let err = dialog.submit(None).await.expect_err("not in submit mode");
    assert!(matches!(err, ClientError::InvalidState(_)));
}

#[tokio::test]
async fn test_submit_returns_new_approval() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("POST"))
        .and(path("/contracts/8/approvals"))
        .respond_with(ok(json!({"id": 22, "contractId": 8, "status": "pending"})))
        .expect(1)
        .mount(&h.server)
        .await;

    let mut dialog = ApprovalDialog::open(
        h.client.contracts(),
        h.notifier.clone(),
        ApprovalMode::Submit { contract_id: 8 },
    )
    .await
    .expect("open");
    let record = dialog.submit(Some("请审批".to_string())).await.expect("submit");

    assert_eq!(record.id, 22);
    assert_eq!(record.status, ApprovalStatus::Pending);
    let posts = h.requests_to("/contracts/8/approvals").await;
    assert_eq!(body_of(&posts[0]), json!({"remark": "请审批"}));
}

#[tokio::test]
async fn test_print_saves_file() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("GET"))
        .and(path("/contracts/8/print"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"%PDF-1.7".to_vec(), "application/pdf"),
        )
        .mount(&h.server)
        .await;

    let dialog = ApprovalDialog::open(
        h.client.contracts(),
        h.notifier.clone(),
        ApprovalMode::Submit { contract_id: 8 },
    )
    .await
    .expect("open");
    let dir = tempfile::tempdir().expect("tempdir");
    let saved = dialog.print(dir.path()).await.expect("print");

    assert_eq!(saved.file_name().and_then(|n| n.to_str()), Some("合同_8.pdf"));
    assert_eq!(std::fs::read(&saved).expect("read"), b"%PDF-1.7");
}
