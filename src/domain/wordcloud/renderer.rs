use super::error::RenderError;
use super::layout::{layout_words, PlacedWord};
use super::{CANVAS_HEIGHT, CANVAS_WIDTH};
use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Fonts tried in order when no font path is configured
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Viridis colour map sampled at ten evenly spaced stops
const VIRIDIS: [Rgb<u8>; 10] = [
    Rgb([0x44, 0x01, 0x54]),
    Rgb([0x48, 0x28, 0x78]),
    Rgb([0x3e, 0x4a, 0x89]),
    Rgb([0x31, 0x68, 0x8e]),
    Rgb([0x26, 0x82, 0x8e]),
    Rgb([0x1f, 0x9e, 0x89]),
    Rgb([0x35, 0xb7, 0x79]),
    Rgb([0x6d, 0xcd, 0x59]),
    Rgb([0xb4, 0xde, 0x2c]),
    Rgb([0xfd, 0xe7, 0x25]),
];

/// Rasterizes word frequencies into a PNG image
pub struct WordCloudRenderer {
    font: FontVec,
}

impl WordCloudRenderer {
    pub fn new(font: FontVec) -> Self {
        Self { font }
    }

    /// Load the configured font, or the first system font found
    pub fn from_font_path(path: Option<&Path>) -> Result<Self, RenderError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => find_system_font().ok_or_else(|| {
                RenderError::Font(
                    "no system font found; set WORDCLOUD_FONT_PATH to a TrueType font".to_string(),
                )
            })?,
        };

        let bytes = std::fs::read(&path)
            .map_err(|e| RenderError::Font(format!("cannot read {}: {}", path.display(), e)))?;
        let font = FontVec::try_from_vec(bytes).map_err(|e| {
            RenderError::Font(format!("{} is not a usable font: {}", path.display(), e))
        })?;

        tracing::info!(font = %path.display(), "Word cloud font loaded");
        Ok(Self::new(font))
    }

    /// Lay out and draw the words, returning PNG bytes
    pub fn render_png(&self, frequencies: &[(String, usize)]) -> Result<Vec<u8>, RenderError> {
        if frequencies.is_empty() {
            return Err(RenderError::NoWords);
        }

        let placed = layout_words(frequencies, |word, size| {
            text_size(PxScale::from(size), &self.font, word)
        });
        if placed.is_empty() {
            return Err(RenderError::Render("no word fits on the canvas".to_string()));
        }

        let canvas = self.draw(&placed);

        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(canvas).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

        tracing::debug!(
            words_drawn = placed.len(),
            words_available = frequencies.len(),
            image_size_bytes = bytes.len(),
            "Word cloud rasterized"
        );

        Ok(bytes)
    }

    fn draw(&self, placed: &[PlacedWord]) -> RgbImage {
        let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);
        for (rank, word) in placed.iter().enumerate() {
            draw_text_mut(
                &mut canvas,
                palette_color(rank, placed.len()),
                word.x,
                word.y,
                PxScale::from(word.font_size),
                &self.font,
                &word.text,
            );
        }
        canvas
    }
}

/// Spread ranks across the palette, darkest for the most frequent word
fn palette_color(rank: usize, total: usize) -> Rgb<u8> {
    let index = rank * VIRIDIS.len() / total.max(1);
    VIRIDIS[index.min(VIRIDIS.len() - 1)]
}

pub fn find_system_font() -> Option<PathBuf> {
    SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}
