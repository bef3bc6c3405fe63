use anyhow::Context;
use globalize::controllers::pipeline::PipelineController;
use globalize::domain::language::LanguageCatalog;
use globalize::domain::pipeline::PipelineService;
use globalize::domain::speech::SpeechService;
use globalize::domain::translation::TranslationService;
use globalize::domain::wordcloud::{EnglishLexicon, WordCloudRenderer, WordCloudService};
use globalize::infrastructure::config::{Config, LogFormat, SpeechEngineKind};
use globalize::infrastructure::http::start_http_server;
use globalize::infrastructure::repositories::{
    EspeakSpeechEngine, GoogleTranslationRepository, PollySpeechEngine, SpeechEngine,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config =
        Config::from_env().map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting Globalize on {}:{}", config.host, config.port);

    // Language catalog is loaded once and shared read-only
    let catalog = Arc::new(
        LanguageCatalog::load(&config.language_table_path)
            .context("failed to load language catalog")?,
    );

    // Speech engine
    let speech_engine: Arc<dyn SpeechEngine> = match config.speech_engine {
        SpeechEngineKind::Espeak => {
            tracing::info!(binary = %config.espeak_binary, "Using espeak-ng speech engine");
            Arc::new(EspeakSpeechEngine::new(config.espeak_binary.clone()))
        }
        SpeechEngineKind::Polly => {
            tracing::info!("Initializing AWS Polly client with region: {}", config.aws_region);
            let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()))
                .load()
                .await;
            let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
            Arc::new(PollySpeechEngine::new(
                polly_client,
                config.polly_default_voice.clone(),
            ))
        }
    };

    // Word cloud resources
    let lexicon = match &config.english_words_path {
        Some(path) => EnglishLexicon::load(path).context("failed to load English word list")?,
        None => EnglishLexicon::bundled(),
    };
    let renderer = WordCloudRenderer::from_font_path(config.wordcloud_font_path.as_deref())
        .context("failed to load word cloud font")?;

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!("Instantiating repositories...");
    let translation_repo = Arc::new(GoogleTranslationRepository::new(
        config.translate_base_url.clone(),
    ));

    // 2. Instantiate services
    tracing::info!("Instantiating services...");
    let translation_service = Arc::new(TranslationService::new(translation_repo));
    let speech_service = Arc::new(SpeechService::new(
        speech_engine,
        config.audio_artifact_dir.clone(),
    ));
    let wordcloud_service = Arc::new(WordCloudService::new(
        Arc::new(lexicon),
        Arc::new(renderer),
    ));
    let pipeline_service = Arc::new(PipelineService::new(
        catalog.clone(),
        translation_service,
        speech_service,
        wordcloud_service,
    ));

    // 3. Instantiate controllers
    tracing::info!("Instantiating controllers...");
    let pipeline_controller = Arc::new(PipelineController::new(pipeline_service, catalog.clone()));

    start_http_server(config, catalog, pipeline_controller)
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "globalize=debug,tower_http=debug"
    } else {
        "globalize=info,tower_http=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
