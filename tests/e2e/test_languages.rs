use super::helpers::TestApp;
use axum::http::StatusCode;

#[tokio::test]
async fn it_should_list_languages_in_table_order() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/api/languages").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["French", "English", "German", "Japanese"]);
    assert_eq!(body[0]["code"], "fr");
}
