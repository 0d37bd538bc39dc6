use serde_json::{json, Value};

use crate::support::start_server;

fn ids(body: &Value) -> Vec<String> {
    body["feedback"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_check() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn list_pending_feedback() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/feedback?status=Pending"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let body: Value = resp.json().await.unwrap();
    assert_eq!(ids(&body), ["1", "2", "7", "8"]);
    assert_eq!(
        body["pagination"],
        json!({ "current": 1, "total": 1, "count": 4 })
    );
}

#[tokio::test]
async fn list_paginates_and_tolerates_bad_values() {
    let base = start_server().await;

    let body: Value = reqwest::get(format!("{base}/feedback?page=2&limit=3"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&body), ["4", "5", "6"]);
    assert_eq!(
        body["pagination"],
        json!({ "current": 2, "total": 3, "count": 8 })
    );

    let resp = reqwest::get(format!(
        "{base}/feedback?page=x&limit=y&category=Nope&status=Gone"
    ))
    .await
    .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["pagination"]["count"], 8);
}

#[tokio::test]
async fn list_search_and_sort() {
    let base = start_server().await;
    let body: Value = reqwest::get(format!(
        "{base}/feedback?search=CSV&sort=status&order=desc&limit=2"
    ))
    .await
    .unwrap()
    .json()
    .await
    .unwrap();
    assert_eq!(ids(&body), ["6", "3"]);
    assert_eq!(body["pagination"]["count"], 6);
}

#[tokio::test]
async fn list_accepts_repeated_keys() {
    let base = start_server().await;
    let resp = reqwest::get(format!(
        "{base}/feedback?status=Pending&status=Closed&page=1&page=2&limit=3"
    ))
    .await
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(ids(&body), ["1", "2", "3"]);
    assert_eq!(
        body["pagination"],
        json!({ "current": 1, "total": 3, "count": 8 })
    );
}

#[tokio::test]
async fn get_one_and_not_found() {
    let base = start_server().await;

    let resp = reqwest::get(format!("{base}/feedback/2")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Georgi Georgiev");
    assert_eq!(body["category"], "Feature");

    let resp = reqwest::get(format!("{base}/feedback/999")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Feedback not found" }));
}

#[tokio::test]
async fn create_then_fetch() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/feedback"))
        .json(&json!({
            "name": "Nina Novak",
            "email": "nina@example.com",
            "content": "Please add a printable report view.",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Feedback created successfully");
    assert_eq!(body["feedback"]["id"], "9");
    assert_eq!(body["feedback"]["category"], "Request");
    assert_eq!(body["feedback"]["status"], "Pending");

    let fetched: Value = client
        .get(format!("{base}/feedback/9"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, body["feedback"]);
}

#[tokio::test]
async fn create_validation_failure() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/feedback"))
        .json(&json!({
            "name": "Nina Novak",
            "email": "nina@example.com",
            "content": "Something",
            "category": "Invalid",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "error": "Validation failed",
            "details": ["Category must be one of: Bug, Feature, Request"],
        })
    );

    let list: Value = client
        .get(format!("{base}/feedback"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["pagination"]["count"], 8);
}

#[tokio::test]
async fn update_persists_content_and_status_only() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/feedback/4"))
        .json(&json!({
            "name": "Renamed Person",
            "category": "Bug",
            "status": "Closed",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Feedback updated successfully");
    assert_eq!(body["feedback"]["status"], "Closed");
    assert_eq!(body["feedback"]["name"], "John Doe");
    assert_eq!(body["feedback"]["category"], "Request");

    let resp = client
        .put(format!("{base}/feedback/4"))
        .json(&json!({ "status": "Done" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(
        body["details"],
        json!(["Status must be one of: Pending, Resolved, Closed"])
    );

    let resp = client
        .put(format!("{base}/feedback/404"))
        .json(&json!({ "status": "Closed" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_then_get() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/feedback/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Feedback deleted successfully" }));

    let resp = client.get(format!("{base}/feedback/1")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete(format!("{base}/feedback/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn enumeration_routes() {
    let base = start_server().await;

    let categories: Value = reqwest::get(format!("{base}/feedback/sub/categories"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(categories, json!(["Bug", "Feature", "Request"]));

    let statuses: Value = reqwest::get(format!("{base}/feedback/sub/statuses"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(statuses, json!(["Pending", "Resolved", "Closed"]));
}
