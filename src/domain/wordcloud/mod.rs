pub mod error;
pub mod layout;
pub mod renderer;
pub mod service;
pub mod text;

pub use error::RenderError;
pub use renderer::WordCloudRenderer;
pub use service::{WordCloudService, WordCloudServiceApi};
pub use text::{CloudSource, EnglishLexicon};

use serde::{Deserialize, Serialize};

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 400;
pub const MAX_WORDS: usize = 100;
pub const MIN_FONT_SIZE: f32 = 10.0;
pub const MAX_FONT_SIZE: f32 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationRequest {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct VisualizationResult {
    /// PNG encoded image
    pub image_bytes: Vec<u8>,
}

impl VisualizationResult {
    pub const MIME_TYPE: &'static str = "image/png";
}
