use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::shell::http::router;
use crate::tests::fixtures::app::{json_request, make_test_state, send};

fn create_body(project_id: &str, title: &str) -> Value {
    json!({
        "projectId": project_id,
        "title": title,
        "description": "Bathroom refit",
        "amount": 0,
        "items": [{"description": "Labor", "quantity": 2, "unitPrice": 100}]
    })
}

fn revise_body(estimate_id: &str, quantity: i64) -> Value {
    json!({
        "estimateId": estimate_id,
        "items": [{"description": "Labor", "quantity": quantity, "unitPrice": 100}],
        "notes": format!("{quantity} days")
    })
}

fn list_request(project_id: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::get(format!("/projects/{project_id}/estimates"))
        .body(axum::body::Body::empty())
        .unwrap()
}

#[tokio::test]
async fn walks_an_estimate_through_revisions_and_approval() {
    let app = router(make_test_state());

    let (status, created) = send(
        app.clone(),
        json_request("POST", "/estimates", create_body("p-1", "Bathroom")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let estimate_id = created["estimateId"].as_str().unwrap().to_string();

    for quantity in [3, 4] {
        let (status, _) = send(
            app.clone(),
            json_request(
                "POST",
                "/projects/p-1/estimates",
                revise_body(&estimate_id, quantity),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, sent) = send(
        app.clone(),
        json_request(
            "PATCH",
            "/estimates",
            json!({"estimateId": estimate_id, "status": "sent"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sent["status"], "sent");

    let (status, approved) = send(
        app.clone(),
        json_request(
            "PATCH",
            "/estimates",
            json!({"estimateId": estimate_id, "status": "approved", "userId": "u-owner", "projectId": "p-1"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["approvedBy"], "u-owner");
    assert_eq!(approved["amount"].as_f64(), Some(400.0));

    let (status, listed) = send(app.clone(), list_request("p-1")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    let revisions: Vec<(i64, f64)> = listed[0]["revisions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| (r["version"].as_i64().unwrap(), r["amount"].as_f64().unwrap()))
        .collect();
    assert_eq!(revisions, vec![(1, 200.0), (2, 300.0)]);
    assert_eq!(listed[0]["status"], "approved");

    // a revision after approval reopens the estimate
    let (status, reopened) = send(
        app.clone(),
        json_request(
            "POST",
            "/projects/p-1/estimates",
            revise_body(&estimate_id, 5),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reopened["status"], "draft");
    assert_eq!(reopened["approvedBy"], Value::Null);
    assert_eq!(reopened["approvedAt"], Value::Null);
    assert_eq!(reopened["revisions"][2]["amount"].as_f64(), Some(400.0));
}

#[tokio::test]
async fn lists_only_the_requested_project_newest_first() {
    let app = router(make_test_state());
    for (project_id, title) in [("p-1", "First"), ("p-2", "Elsewhere"), ("p-1", "Second")] {
        let (status, _) = send(
            app.clone(),
            json_request("POST", "/estimates", create_body(project_id, title)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, first) = send(app.clone(), list_request("p-1")).await;
    let (_, second) = send(app.clone(), list_request("p-1")).await;
    let titles: Vec<&str> = first
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Second", "First"]);
    assert_eq!(first, second);

    let (_, empty) = send(app, list_request("p-unknown")).await;
    assert_eq!(empty, json!([]));
}

#[tokio::test]
async fn lets_exactly_one_of_two_concurrent_revisions_through() {
    let state = make_test_state();
    let app = router(state.clone());
    let (_, created) = send(
        app.clone(),
        json_request("POST", "/estimates", create_body("p-1", "Contested")),
    )
    .await;
    let estimate_id = created["estimateId"].as_str().unwrap().to_string();
    state.event_store.set_delay_append_ms(20);

    let ((first, _), (second, _)) = tokio::join!(
        send(
            app.clone(),
            json_request("POST", "/projects/p-1/estimates", revise_body(&estimate_id, 3)),
        ),
        send(
            app.clone(),
            json_request("POST", "/projects/p-1/estimates", revise_body(&estimate_id, 4)),
        )
    );

    let mut statuses = vec![first.as_u16(), second.as_u16()];
    statuses.sort_unstable();
    assert_eq!(statuses, vec![200, 409]);

    state.event_store.set_delay_append_ms(0);
    let (_, listed) = send(app, list_request("p-1")).await;
    assert_eq!(listed[0]["revisions"].as_array().map(Vec::len), Some(1));
}
