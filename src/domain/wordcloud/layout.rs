use super::{CANVAS_HEIGHT, CANVAS_WIDTH, MAX_FONT_SIZE, MAX_WORDS, MIN_FONT_SIZE};

/// How much relative frequency (vs. rank) drives font size
const RELATIVE_SCALING: f32 = 0.5;
const FONT_STEP: f32 = 1.0;
/// Gap kept around every word, in pixels
const MARGIN: i32 = 2;
/// Radial growth of the placement spiral per radian
const SPIRAL_STEP: f32 = 2.0;
const ANGLE_STEP: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub font_size: f32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PlacedWord {
    fn overlaps(&self, x: i32, y: i32, width: u32, height: u32) -> bool {
        x < self.x + self.width as i32 + MARGIN
            && self.x < x + width as i32 + MARGIN
            && y < self.y + self.height as i32 + MARGIN
            && self.y < y + height as i32 + MARGIN
    }
}

/// Place words on the canvas, largest first.
///
/// `measure` returns the pixel `(width, height)` of a word at a font size.
/// The first word gets the largest size that fits; each next one is scaled by
/// its frequency relative to the previous word. A word that fits nowhere is
/// retried smaller; once the size drops under the minimum, placement stops.
pub fn layout_words<F>(frequencies: &[(String, usize)], measure: F) -> Vec<PlacedWord>
where
    F: Fn(&str, f32) -> (u32, u32),
{
    let Some(max_count) = frequencies.first().map(|(_, count)| *count as f32) else {
        return Vec::new();
    };

    let mut placed: Vec<PlacedWord> = Vec::new();
    let mut font_size = MAX_FONT_SIZE.min(CANVAS_HEIGHT as f32);
    let mut last_frequency = 1.0_f32;

    for (index, (word, count)) in frequencies.iter().take(MAX_WORDS).enumerate() {
        let frequency = *count as f32 / max_count;
        if index > 0 {
            font_size = ((RELATIVE_SCALING * (frequency / last_frequency)
                + (1.0 - RELATIVE_SCALING))
                * font_size)
                .round();
        }

        let position = loop {
            if font_size < MIN_FONT_SIZE {
                break None;
            }
            let (width, height) = measure(word, font_size);
            if let Some((x, y)) = find_position(&placed, width, height) {
                break Some((x, y, width, height));
            }
            font_size -= FONT_STEP;
        };

        let Some((x, y, width, height)) = position else {
            break;
        };

        placed.push(PlacedWord {
            text: word.clone(),
            font_size,
            x,
            y,
            width,
            height,
        });
        last_frequency = frequency;
    }

    placed
}

/// Walk an Archimedean spiral out of the canvas centre until a free spot shows up
fn find_position(placed: &[PlacedWord], width: u32, height: u32) -> Option<(i32, i32)> {
    if width + 2 * MARGIN as u32 > CANVAS_WIDTH || height + 2 * MARGIN as u32 > CANVAS_HEIGHT {
        return None;
    }

    let center_x = CANVAS_WIDTH as f32 / 2.0;
    let center_y = CANVAS_HEIGHT as f32 / 2.0;
    let aspect = CANVAS_HEIGHT as f32 / CANVAS_WIDTH as f32;
    let max_radius = CANVAS_WIDTH.max(CANVAS_HEIGHT) as f32;

    let mut angle = 0.0_f32;
    loop {
        let radius = SPIRAL_STEP * angle;
        if radius > max_radius {
            return None;
        }

        let x = (center_x + radius * angle.cos() - width as f32 / 2.0).round() as i32;
        let y = (center_y + radius * aspect * angle.sin() - height as f32 / 2.0).round() as i32;

        let inside = x >= MARGIN
            && y >= MARGIN
            && x + width as i32 + MARGIN <= CANVAS_WIDTH as i32
            && y + height as i32 + MARGIN <= CANVAS_HEIGHT as i32;

        if inside && !placed.iter().any(|word| word.overlaps(x, y, width, height)) {
            return Some((x, y));
        }

        angle += ANGLE_STEP;
    }
}
