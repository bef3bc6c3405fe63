use super::helpers::aws_mocks::{create_mock_polly_client, mock_audio_bytes};
use globalize::domain::speech::{
    GenderPreference, SpeechRequest, SpeechService, SpeechServiceApi, VoiceHandle, VoiceSettings,
};
use globalize::infrastructure::repositories::{PollySpeechEngine, SpeechEngine, SynthesisJob};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{
    body_partial_json, body_string_contains, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn voice(id: &str, language: &str) -> serde_json::Value {
    json!({
        "Gender": "Female",
        "Id": id,
        "LanguageCode": language,
        "LanguageName": language,
        "Name": id,
    })
}

/// Two DescribeVoices pages linked by a NextToken
async fn mount_paginated_voices(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .and(query_param("Engine", "standard"))
        .and(query_param_is_missing("NextToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Voices": [
                voice("Joanna", "en-US"),
                voice("Mathieu", "fr-FR"),
                voice("Celine", "fr-FR"),
            ],
            "NextToken": "page-2",
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .and(query_param("NextToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Voices": [
                voice("Hans", "de-DE"),
                voice("Chantal", "fr-CA"),
            ],
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn audio_response(marker: u8) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("Content-Type", "audio/mpeg")
        .set_body_bytes(mock_audio_bytes(marker))
}

#[tokio::test]
async fn it_should_list_voices_across_pages_filtered_by_language() {
    let server = MockServer::start().await;
    mount_paginated_voices(&server).await;
    let engine = PollySpeechEngine::new(create_mock_polly_client(&server), "Joanna".to_string());

    let voices = engine.list_voices("fr").await.unwrap();

    let ids: Vec<&str> = voices.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["Mathieu", "Celine", "Chantal"]);
    assert_eq!(voices[2].language, "fr-CA");
}

#[tokio::test]
async fn it_should_report_describe_voices_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "__type": "InvalidNextTokenException",
            "message": "bad token",
        })))
        .mount(&server)
        .await;
    let engine = PollySpeechEngine::new(create_mock_polly_client(&server), "Joanna".to_string());

    let err = engine.list_voices("fr").await.unwrap_err();

    assert!(err.contains("describe_voices"), "unexpected error: {}", err);
}

#[tokio::test]
async fn it_should_fall_back_to_default_voice_when_none_selected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/speech"))
        .and(body_partial_json(json!({
            "VoiceId": "Joanna",
            "OutputFormat": "mp3",
            "TextType": "ssml",
            "Engine": "standard",
        })))
        .respond_with(audio_response(0x01))
        .expect(1)
        .mount(&server)
        .await;
    let engine = PollySpeechEngine::new(create_mock_polly_client(&server), "Joanna".to_string());
    let output = tempfile::NamedTempFile::new().unwrap();

    let job = SynthesisJob {
        text: "Bonjour le monde",
        language_hint: "fr",
        voice: None,
        settings: VoiceSettings::default(),
    };
    engine.render_to_file(&job, output.path()).await.unwrap();

    assert_eq!(std::fs::read(output.path()).unwrap(), mock_audio_bytes(0x01));
}

#[tokio::test]
async fn it_should_merge_batches_into_one_artifact() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/speech"))
        .and(body_partial_json(json!({ "VoiceId": "Celine" })))
        .and(body_string_contains("aaaaaaaaaa"))
        .respond_with(audio_response(0x0A))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/speech"))
        .and(body_partial_json(json!({ "VoiceId": "Celine" })))
        .and(body_string_contains("bbbbbbbbbb"))
        .respond_with(audio_response(0x0B))
        .expect(1)
        .mount(&server)
        .await;
    let engine = PollySpeechEngine::new(create_mock_polly_client(&server), "Joanna".to_string());
    let output = tempfile::NamedTempFile::new().unwrap();

    // Two 2000 character sentences cannot share a batch
    let text = format!("{}. {}.", "a".repeat(1999), "b".repeat(1999));
    let celine = VoiceHandle {
        id: "Celine".to_string(),
        name: "Celine".to_string(),
        language: "fr-FR".to_string(),
    };
    let job = SynthesisJob {
        text: &text,
        language_hint: "fr",
        voice: Some(&celine),
        settings: VoiceSettings::default(),
    };
    engine.render_to_file(&job, output.path()).await.unwrap();

    let mut expected = mock_audio_bytes(0x0A);
    expected.extend(mock_audio_bytes(0x0B));
    assert_eq!(std::fs::read(output.path()).unwrap(), expected);
}

#[tokio::test]
async fn it_should_speak_with_first_language_voice_for_male_preference() {
    let server = MockServer::start().await;
    mount_paginated_voices(&server).await;
    Mock::given(method("POST"))
        .and(path("/v1/speech"))
        .and(body_partial_json(json!({ "VoiceId": "Mathieu" })))
        .respond_with(audio_response(0x02))
        .expect(1)
        .mount(&server)
        .await;
    let engine = PollySpeechEngine::new(create_mock_polly_client(&server), "Joanna".to_string());
    let artifact_dir = tempfile::tempdir().unwrap();
    let service = SpeechService::new(Arc::new(engine), artifact_dir.path().to_path_buf());

    let result = service
        .synthesize(SpeechRequest {
            text: "Bonjour le monde".to_string(),
            language_hint: "fr".to_string(),
            gender_preference: GenderPreference::Male,
        })
        .await
        .unwrap();

    assert_eq!(result.audio_bytes, mock_audio_bytes(0x02));
    assert!(result.file_name().ends_with(".mp3"));
}
