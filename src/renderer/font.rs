//! Built-in 5x7 bitmap font
//!
//! Glyphs are drawn as solid rectangles, one per horizontal run of lit pixels.
//! Lowercase letters render as capitals.

use glam::Vec2;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: usize = 7;
/// Horizontal distance between glyph origins, in font pixels
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Rows top to bottom; bit 4 is the leftmost column
pub type Glyph = [u8; GLYPH_HEIGHT];

const DIGITS: [Glyph; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
];

const LETTERS: [Glyph; 26] = [
    [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

const COLON: Glyph = [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00];
const SPACE: Glyph = [0x00; GLYPH_HEIGHT];

/// Bitmap for `ch`, if the font has one
pub fn glyph(ch: char) -> Option<Glyph> {
    match ch {
        '0'..='9' => Some(DIGITS[ch as usize - '0' as usize]),
        'A'..='Z' => Some(LETTERS[ch as usize - 'A' as usize]),
        'a'..='z' => Some(LETTERS[ch as usize - 'a' as usize]),
        ':' => Some(COLON),
        ' ' => Some(SPACE),
        _ => None,
    }
}

/// Rectangles (min, size) covering the lit pixels of `text`.
///
/// Characters without a glyph leave a blank cell.
pub fn layout(text: &str, origin: Vec2, scale: f32) -> Vec<(Vec2, Vec2)> {
    let mut rects = Vec::new();

    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        let cell_x = origin.x + (i as u32 * ADVANCE) as f32 * scale;

        for (row, &bits) in rows.iter().enumerate() {
            let y = origin.y + row as f32 * scale;
            let mut col = 0;
            while col < GLYPH_WIDTH {
                if bits & (0x10u8 >> col) == 0 {
                    col += 1;
                    continue;
                }
                let run_start = col;
                while col < GLYPH_WIDTH && bits & (0x10u8 >> col) != 0 {
                    col += 1;
                }
                let run = (col - run_start) as f32;
                rects.push((
                    Vec2::new(cell_x + run_start as f32 * scale, y),
                    Vec2::new(run * scale, scale),
                ));
            }
        }
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Width of `text` in screen pixels when drawn at `scale`
    fn text_width(text: &str, scale: f32) -> f32 {
        let count = text.chars().count() as u32;
        if count == 0 {
            return 0.0;
        }
        (count * ADVANCE - 1) as f32 * scale
    }

    #[test]
    fn test_glyph_coverage() {
        for ch in "Score: 0123456789".chars() {
            assert!(glyph(ch).is_some(), "missing glyph for {ch:?}");
        }
        assert_eq!(glyph('s'), glyph('S'));
        assert!(glyph('#').is_none());
    }

    #[test]
    fn test_glyphs_fit_width() {
        for glyph in DIGITS.iter().chain(LETTERS.iter()) {
            assert!(glyph.iter().all(|row| *row < 0x20));
        }
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 3.0), 0.0);
        assert_eq!(text_width("1", 3.0), 15.0);
        assert_eq!(text_width("10", 2.0), 22.0);
    }

    #[test]
    fn test_layout_merges_runs() {
        // Top row of '7' is one solid run of five pixels
        let rects = layout("7", Vec2::new(10.0, 20.0), 3.0);
        assert_eq!(rects[0], (Vec2::new(10.0, 20.0), Vec2::new(15.0, 3.0)));
        // One run per remaining row
        assert_eq!(rects.len(), 7);
    }

    #[test]
    fn test_layout_advances_cells() {
        let rects = layout("11", Vec2::ZERO, 1.0);
        let (first, second): (Vec<_>, Vec<_>) = rects.iter().partition(|(min, _)| min.x < 6.0);
        assert_eq!(first.len(), second.len());
        assert!(second.iter().all(|(min, size)| min.x >= 6.0 && min.x + size.x <= 11.0));
    }

    #[test]
    fn test_layout_skips_unknown_and_spaces() {
        assert!(layout(" #", Vec2::ZERO, 2.0).is_empty());
    }

    #[test]
    fn test_layout_stays_in_bounds() {
        let text = "Score: 1230";
        let origin = Vec2::new(10.0, 10.0);
        let scale = 3.0;
        let width = text_width(text, scale);
        for (min, size) in layout(text, origin, scale) {
            assert!(min.x >= origin.x && min.x + size.x <= origin.x + width);
            assert!(min.y >= origin.y && min.y + size.y <= origin.y + 7.0 * scale);
        }
    }
}
