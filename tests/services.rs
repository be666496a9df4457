mod common;

use common::{Harness, body_of, ok, page, query_value};
use serde_json::{Value, json};
use wiremock::Mock;
use wiremock::matchers::{method, path};

use rust_edu_console::errors::ClientError;
use rust_edu_console::models::PageQuery;
use rust_edu_console::models::class_hours::AdjustHoursRequest;
use rust_edu_console::models::students::{CreateStudentRequest, StudentListParams};

#[tokio::test]
async fn test_invalid_form_issues_no_request() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("POST"))
        .and(path("/students"))
        .respond_with(ok(json!({"id": 1, "name": "x"})))
        .expect(0)
        .mount(&h.server)
        .await;

    let form = CreateStudentRequest {
        name: "张三".to_string(),
        phone: Some("12345".to_string()),
        ..CreateStudentRequest::default()
    };
    let err = h.client.students().create(&form).await.expect_err("bad phone");
    assert!(matches!(err, ClientError::Validation(_)));
    // 本地校验错误不经过 HTTP 层提示
    assert!(h.notifier.notices().is_empty());
}

#[tokio::test]
async fn test_create_and_list_students() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("POST"))
        .and(path("/students"))
        .respond_with(ok(json!({"id": 31, "name": "张三", "phone": "13800138000"})))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/students/list"))
        .respond_with(page(json!([{"id": 31, "name": "张三"}]), 1))
        .mount(&h.server)
        .await;

    let form = CreateStudentRequest {
        name: "张三".to_string(),
        phone: Some("13800138000".to_string()),
        ..CreateStudentRequest::default()
    };
    let student = h.client.students().create(&form).await.expect("create");
    assert_eq!(student.id, 31);

    let params = StudentListParams {
        pagination: PageQuery::new(2, 20),
        keyword: Some("张".to_string()),
        campus_id: Some(3),
        ..StudentListParams::default()
    };
    let result = h.client.students().list(&params).await.expect("list");
    assert_eq!(result.total, 1);
    assert_eq!(result.data[0].name, "张三");

    let requests = h.requests_to("/students/list").await;
    assert_eq!(query_value(&requests[0], "pageSize").as_deref(), Some("20"));
    assert_eq!(query_value(&requests[0], "campusId").as_deref(), Some("3"));
    assert_eq!(query_value(&requests[0], "status"), None);
}

#[tokio::test]
async fn test_batch_delete_posts_ids() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("POST"))
        .and(path("/teachers/batch-delete"))
        .respond_with(ok(Value::Null))
        .expect(1)
        .mount(&h.server)
        .await;

    h.client.teachers().batch_delete(&[4, 5]).await.expect("delete");
    let requests = h.requests_to("/teachers/batch-delete").await;
    assert_eq!(body_of(&requests[0]), json!({"ids": [4, 5]}));
}

#[tokio::test]
async fn test_adjust_hours_requires_reason() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("POST"))
        .and(path("/class-hours/6/adjust"))
        .respond_with(ok(json!({
            "id": 6,
            "studentId": 2,
            "totalHours": 40,
            "usedHours": 12,
            "remainingHours": 28,
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let missing_reason = AdjustHoursRequest {
        hours: 4.0,
        reason: String::new(),
    };
    let err = h
        .client
        .class_hours()
        .adjust(6, &missing_reason)
        .await
        .expect_err("no reason");
    assert!(matches!(err, ClientError::Validation(_)));

    let request = AdjustHoursRequest {
        hours: -2.0,
        reason: "补课抵扣".to_string(),
    };
    let account = h.client.class_hours().adjust(6, &request).await.expect("adjust");
    assert_eq!(account.remaining_hours, 28.0);
    assert!(!account.is_exhausted());
}

#[tokio::test]
async fn test_unread_count_accepts_both_shapes() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("GET"))
        .and(path("/messages/unread-count"))
        .respond_with(ok(json!(5)))
        .up_to_n_times(1)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/messages/unread-count"))
        .respond_with(ok(json!({"count": 7})))
        .mount(&h.server)
        .await;

    assert_eq!(h.client.messages().unread_count().await.expect("plain"), 5);
    assert_eq!(h.client.messages().unread_count().await.expect("object"), 7);
}

#[tokio::test]
async fn test_class_member_operations() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("POST"))
        .and(path("/classes/3/students"))
        .respond_with(ok(Value::Null))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/classes/3/students/9"))
        .respond_with(ok(Value::Null))
        .expect(1)
        .mount(&h.server)
        .await;

    let classes = h.client.classes();
    assert!(matches!(
        classes.add_students(3, &[]).await,
        Err(ClientError::Validation(_))
    ));
    classes.add_students(3, &[9, 10]).await.expect("add");
    classes.remove_student(3, 9).await.expect("remove");
}

#[tokio::test]
async fn test_permission_tree_and_assignment() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("GET"))
        .and(path("/roles/permission-tree"))
        .respond_with(ok(json!([
            {"id": 1, "name": "教务", "children": [
                {"id": 2, "name": "学员管理"},
                {"id": 3, "name": "排课管理"},
            ]},
        ])))
        .mount(&h.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/roles/4/permissions"))
        .respond_with(ok(Value::Null))
        .expect(1)
        .mount(&h.server)
        .await;

    let roles = h.client.roles();
    let tree = roles.permission_tree().await.expect("tree");
    let ids: Vec<i64> = tree.iter().flat_map(|n| n.flatten_ids()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    roles.assign_permissions(4, &ids).await.expect("assign");
    let requests = h.requests_to("/roles/4/permissions").await;
    assert_eq!(body_of(&requests[0]), json!({"permissionIds": [1, 2, 3]}));
}
