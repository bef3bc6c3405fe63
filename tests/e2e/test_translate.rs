use super::helpers::{FakeSpeechEngine, TestApp, FAKE_WAV};
use axum::http::StatusCode;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use pretty_assertions::assert_eq;
use serde_json::json;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[tokio::test]
async fn it_should_translate_speak_and_visualize() {
    let app = TestApp::spawn().await;
    app.mock_translation("fr", "Bonjour le monde").await;

    let response = app
        .client
        .post(
            "/api/translate",
            &json!({ "text": "Hello world", "language": "French" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "body: {}", response.text());
    let body = response.json();
    assert_eq!(body["translated_text"], "Bonjour le monde");
    assert_eq!(body["language_code"], "fr");

    assert_eq!(body["audio"]["mime_type"], "audio/wav");
    let file_name = body["audio"]["file_name"].as_str().unwrap();
    assert!(file_name.starts_with("translated_audio_"));
    assert!(file_name.ends_with(".wav"));
    let audio = STANDARD
        .decode(body["audio"]["data_base64"].as_str().unwrap())
        .unwrap();
    assert_eq!(audio, FAKE_WAV);

    assert_eq!(body["word_cloud"]["mime_type"], "image/png");
    let image = STANDARD
        .decode(body["word_cloud"]["data_base64"].as_str().unwrap())
        .unwrap();
    assert_eq!(image[..8], PNG_SIGNATURE);

    if app.uses_real_renderer {
        let decoded = image::load_from_memory(&image).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (800, 400));
    }
}

#[tokio::test]
async fn it_should_draw_cloud_for_plain_english_translation() {
    let app = TestApp::spawn().await;
    app.mock_translation("en", "The ancient castle and the whispering kingdom").await;

    let response = app
        .client
        .post(
            "/api/translate",
            &json!({ "text": "El antiguo castillo y el reino susurrante", "language": "English" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "body: {}", response.text());
    let image = STANDARD
        .decode(response.json()["word_cloud"]["data_base64"].as_str().unwrap())
        .unwrap();
    assert_eq!(image[..8], PNG_SIGNATURE);
}

#[tokio::test]
async fn it_should_pick_second_voice_for_default_preference() {
    let app = TestApp::spawn().await;
    app.mock_translation("de", "Hallo Welt").await;

    let response = app
        .client
        .post(
            "/api/translate",
            &json!({ "text": "Hello world", "language": "German" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        app.speech_engine.rendered_voices(),
        vec![Some("female-1".to_string())]
    );
}

#[tokio::test]
async fn it_should_pick_first_voice_for_male_preference() {
    let app = TestApp::spawn().await;
    app.mock_translation("de", "Hallo Welt").await;

    let response = app
        .client
        .post(
            "/api/translate",
            &json!({ "text": "Hello world", "language": "German", "voice": "male" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        app.speech_engine.rendered_voices(),
        vec![Some("male-1".to_string())]
    );
}

#[tokio::test]
async fn it_should_use_engine_default_when_only_one_voice_exists() {
    let app = TestApp::spawn_with_engine(FakeSpeechEngine::with_voices(&["only"])).await;
    app.mock_translation("fr", "Bonjour").await;

    let response = app
        .client
        .post(
            "/api/translate",
            &json!({ "text": "Hello", "language": "French", "voice": "female" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.speech_engine.rendered_voices(), vec![None]);
}

#[tokio::test]
async fn it_should_remove_audio_artifact_after_responding() {
    let app = TestApp::spawn().await;
    app.mock_translation("fr", "Bonjour le monde").await;

    let response = app
        .client
        .post(
            "/api/translate",
            &json!({ "text": "Hello world", "language": "French" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.artifact_count(), 0);
}

#[tokio::test]
async fn it_should_reject_empty_text_before_translating() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post("/api/translate", &json!({ "text": "   ", "language": "French" }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["stage"], "validation");
    let requests = app.translation_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
    assert_eq!(app.speech_engine.calls(), 0);
}

#[tokio::test]
async fn it_should_return_not_found_for_unknown_language() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(
            "/api/translate",
            &json!({ "text": "Hello world", "language": "Klingon" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let body = response.json();
    assert_eq!(body["stage"], "language");
    assert!(body["message"].as_str().unwrap().contains("Klingon"));
    let requests = app.translation_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn it_should_report_translation_stage_when_upstream_fails() {
    let app = TestApp::spawn().await;
    app.mock_translation_failure(503).await;

    let response = app
        .client
        .post(
            "/api/translate",
            &json!({ "text": "Hello world", "language": "French" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.json()["stage"], "translation");
    assert_eq!(app.speech_engine.calls(), 0);
}

#[tokio::test]
async fn it_should_report_synthesis_stage_when_engine_fails() {
    let app = TestApp::spawn_with_engine(FakeSpeechEngine::failing()).await;
    app.mock_translation("fr", "Bonjour le monde").await;

    let response = app
        .client
        .post(
            "/api/translate",
            &json!({ "text": "Hello world", "language": "French" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    let body = response.json();
    assert_eq!(body["stage"], "synthesis");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("audio driver could not be initialized"));
    assert_eq!(app.artifact_count(), 0);
}

#[tokio::test]
async fn it_should_reject_text_over_the_length_limit() {
    let app = TestApp::spawn().await;
    let text = "a".repeat(5001);

    let response = app
        .client
        .post("/api/translate", &json!({ "text": text, "language": "French" }))
        .await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(response.json().get("stage").is_none());
}

#[tokio::test]
async fn it_should_reject_unknown_voice_preference() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(
            "/api/translate",
            &json!({ "text": "Hello", "language": "French", "voice": "robot" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}
