use super::helpers::translation_page;
use globalize::domain::translation::{
    TranslationRequest, TranslationService, TranslationServiceApi, TranslationServiceError,
};
use globalize::infrastructure::repositories::{
    GoogleTranslationRepository, TranslationRepository,
};
use std::sync::Arc;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn it_should_send_target_and_auto_source_to_translation_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/m"))
        .and(query_param("tl", "fr"))
        .and(query_param("sl", "auto"))
        .and(query_param("q", "Hello world"))
        .and(header_exists("user-agent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(translation_page("Bonjour le monde")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let repository = GoogleTranslationRepository::new(server.uri());
    let translated = repository.translate("Hello world", "fr").await.unwrap();

    assert_eq!(translated, "Bonjour le monde");
}

#[tokio::test]
async fn it_should_decode_html_entities_in_translation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/m"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(translation_page("C&#39;est la vie &amp; plus")),
        )
        .mount(&server)
        .await;

    let repository = GoogleTranslationRepository::new(server.uri());
    let translated = repository.translate("That's life and more", "fr").await.unwrap();

    assert_eq!(translated, "C'est la vie & plus");
}

#[tokio::test]
async fn it_should_fail_when_page_has_no_result_block() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/m"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>captcha</body></html>"),
        )
        .mount(&server)
        .await;

    let service = TranslationService::new(Arc::new(GoogleTranslationRepository::new(server.uri())));
    let result = service
        .translate(TranslationRequest {
            source_text: "Hello".to_string(),
            target_code: "fr".to_string(),
        })
        .await;

    assert!(matches!(result, Err(TranslationServiceError::Dependency(_))));
}

#[tokio::test]
async fn it_should_surface_upstream_status_as_dependency_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/m"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = TranslationService::new(Arc::new(GoogleTranslationRepository::new(server.uri())));
    let result = service
        .translate(TranslationRequest {
            source_text: "Hello".to_string(),
            target_code: "fr".to_string(),
        })
        .await;

    match result {
        Err(TranslationServiceError::Dependency(message)) => assert!(message.contains("500")),
        other => panic!("expected dependency error, got {:?}", other),
    }
}
