//! Integration tests for the student registry endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_seeded_students_are_listed_in_order() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/students", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let students = response.body.as_array().expect("student array");
    assert_eq!(students.len(), 3);
    assert_eq!(students[0]["name"].as_str(), Some("Ivan"));
    assert_eq!(students[1]["name"].as_str(), Some("Maria"));
    assert_eq!(students[2]["name"].as_str(), Some("Sergey"));
}

#[tokio::test]
async fn test_add_student_continues_id_sequence() {
    let app = helpers::TestApp::new().await;

    let body = json!({ "name": "Olga", "age": 11, "group": "B" });
    let created = app.request("POST", "/students", Some(body), None).await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["id"].as_i64(), Some(4));

    let list = app.request("GET", "/students", None, None).await;
    assert_eq!(list.body.as_array().expect("student array").len(), 4);
}
