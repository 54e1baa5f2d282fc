use axum::http::StatusCode;
use jw_db::models::Role;
use serde_json::{Value, json};

use crate::common::{TestSession, db};

fn youtube_link() -> String {
    let id: String = db::unique_suffix().chars().take(11).collect();
    format!("https://www.youtube.com/watch?v={id}")
}

#[tokio::test]
async fn test_create_and_list_tutorial() {
    let admin = TestSession::new(Role::Admin).await.unwrap();
    let link = youtube_link();

    let response = admin
        .post(
            "/api/admin/tutorials",
            &json!({ "title": "Hiragana basics", "link": link }),
        )
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Successfully added the tutorial.");

    let learner = TestSession::new(Role::Standard).await.unwrap();
    let response = learner.get("/api/user/tutorials").await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert!(
        body["tutorials"]
            .as_array()
            .unwrap()
            .iter()
            .any(|tutorial| tutorial["link"] == link.as_str())
    );
}

#[tokio::test]
async fn test_tutorial_validation() {
    let admin = TestSession::new(Role::Admin).await.unwrap();

    let response = admin.post("/api/admin/tutorials", &json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Title is required\nLink is required");

    let response = admin
        .post(
            "/api/admin/tutorials",
            &json!({ "title": "Katakana", "link": "https://vimeo.com/123" }),
        )
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Invalid YouTube URL");
}

#[tokio::test]
async fn test_duplicate_tutorial_link() {
    let admin = TestSession::new(Role::Admin).await.unwrap();
    let first = youtube_link();
    let second = youtube_link();

    for link in [&first, &second] {
        admin
            .post("/api/admin/tutorials", &json!({ "title": "Kanji", "link": link }))
            .await
            .assert_status(StatusCode::OK);
    }

    let response = admin
        .post("/api/admin/tutorials", &json!({ "title": "Copy", "link": first }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "A tutorial with this link already exists.");

    let tutorials: Value = admin.get("/api/admin/tutorials").await.json();
    let second_id = tutorials["tutorials"]
        .as_array()
        .unwrap()
        .iter()
        .find(|tutorial| tutorial["link"] == second.as_str())
        .map(|tutorial| tutorial["id"].as_str().unwrap().to_string())
        .unwrap();

    let response = admin
        .patch(
            &format!("/api/admin/tutorials/{second_id}"),
            &json!({ "link": first }),
        )
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "A tutorial with this link already exists.");
}

#[tokio::test]
async fn test_update_and_delete_tutorial() {
    let admin = TestSession::new(Role::Admin).await.unwrap();
    let link = youtube_link();

    let created: Value = admin
        .post("/api/admin/tutorials", &json!({ "title": "Particles", "link": link }))
        .await
        .json();
    let uri = format!(
        "/api/admin/tutorials/{}",
        created["tutorial"]["id"].as_str().unwrap()
    );

    let response = admin.patch(&uri, &json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Either Title or Link must be specified.");

    let response = admin.patch(&uri, &json!({ "title": "Particles: wa and ga" })).await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Tutorial Successfully Updated.");
    assert_eq!(body["tutorial"]["title"], "Particles: wa and ga");
    assert_eq!(body["tutorial"]["link"], link.as_str());

    let response = admin.delete(&uri).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.message(), "Tutorial Successfully Deleted.");

    let response = admin.get(&uri).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "No Tutorial with this ID exists.");
}

#[tokio::test]
async fn test_long_tutorial_title_is_rejected() {
    let admin = TestSession::new(Role::Admin).await.unwrap();

    let response = admin
        .post(
            "/api/admin/tutorials",
            &json!({ "title": "t".repeat(300), "link": youtube_link() }),
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        "Title must be at most 255 characters"
    );
}
