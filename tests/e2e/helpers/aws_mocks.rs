use aws_sdk_polly::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_polly::Client as PollyClient;
use std::sync::Arc;
use wiremock::MockServer;

/// Polly client whose requests land on `server`
pub fn create_mock_polly_client(server: &MockServer) -> Arc<PollyClient> {
    let config = aws_sdk_polly::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("test", "test", None, None, "test"))
        .endpoint_url(server.uri())
        .build();

    Arc::new(PollyClient::from_conf(config))
}

/// MP3 frame header followed by padding
pub fn mock_audio_bytes(marker: u8) -> Vec<u8> {
    vec![0xFF, 0xFB, 0x90, 0x00, marker, marker, marker, marker]
}
