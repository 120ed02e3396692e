//! Text rasterization.
//!
//! Two font sources back the `text` primitive: a built-in 8x8 bitmap face
//! that needs no assets, and TrueType/OpenType fonts parsed by `fontdue`.
//! Both produce [`Glyph`] coverage bitmaps that the canvas alpha-blends.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::GraphicsError;

/// Pixel height of the built-in bitmap face.
const BITMAP_SIZE: u32 = 8;

/// A rasterized glyph: coverage bytes plus placement metrics.
///
/// `coverage` holds `width * height` bytes, row-major, 0 = empty and
/// 255 = fully covered. `xmin`/`ymin` offset the bitmap from the pen
/// position and baseline.
pub(crate) struct Glyph {
    pub width: usize,
    pub height: usize,
    pub xmin: i32,
    pub ymin: i32,
    pub advance: f32,
    pub coverage: Vec<u8>,
}

#[derive(Clone)]
enum FontFace {
    Bitmap,
    Ttf(Arc<fontdue::Font>),
}

/// A font usable with the `text` primitive.
///
/// `Font::default()` is the built-in bitmap face; [`Font::from_bytes`] and
/// [`Font::from_file`] load TrueType/OpenType data.
#[derive(Clone)]
pub struct Font {
    face: FontFace,
}

impl Default for Font {
    fn default() -> Font {
        Font {
            face: FontFace::Bitmap,
        }
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.face {
            FontFace::Bitmap => write!(f, "Font(bitmap)"),
            FontFace::Ttf(_) => write!(f, "Font(ttf)"),
        }
    }
}

impl Font {
    /// Parse a TrueType/OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Font, GraphicsError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| GraphicsError::FontLoadFailed(e.to_string()))?;
        Ok(Font {
            face: FontFace::Ttf(Arc::new(font)),
        })
    }

    /// Load a TrueType/OpenType font from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Font, GraphicsError> {
        let bytes = std::fs::read(path.as_ref())
            .map_err(|e| GraphicsError::FontLoadFailed(e.to_string()))?;
        Font::from_bytes(&bytes)
    }

    /// Rasterize one character at the given pixel size.
    pub(crate) fn rasterize(&self, c: char, px: f32) -> Glyph {
        match &self.face {
            FontFace::Bitmap => rasterize_bitmap(c, px),
            FontFace::Ttf(font) => {
                let (metrics, coverage) = font.rasterize(c, px);
                Glyph {
                    width: metrics.width,
                    height: metrics.height,
                    xmin: metrics.xmin,
                    ymin: metrics.ymin,
                    advance: metrics.advance_width,
                    coverage,
                }
            }
        }
    }

    /// Width of a string in logical pixels at the given size.
    pub fn measure(&self, text: &str, px: f32) -> f32 {
        text.chars()
            .filter(|&c| c != '\n')
            .map(|c| match &self.face {
                FontFace::Bitmap => bitmap_scale(px) as f32 * BITMAP_SIZE as f32,
                FontFace::Ttf(font) => font.metrics(c, px).advance_width,
            })
            .sum()
    }
}

/// Integer upscale factor for the bitmap face at a requested pixel size.
fn bitmap_scale(px: f32) -> u32 {
    ((px / BITMAP_SIZE as f32).round() as u32).max(1)
}

/// Expand one bitmap glyph to a coverage bitmap, nearest-neighbor scaled.
fn rasterize_bitmap(c: char, px: f32) -> Glyph {
    let rows = glyph_rows(c);
    let scale = bitmap_scale(px);
    let side = (BITMAP_SIZE * scale) as usize;
    let mut coverage = vec![0u8; side * side];

    for (row, bits) in rows.iter().enumerate() {
        for col in 0..BITMAP_SIZE {
            if bits & (0x80 >> col) == 0 {
                continue;
            }
            for sy in 0..scale {
                for sx in 0..scale {
                    let y = row * scale as usize + sy as usize;
                    let x = col as usize * scale as usize + sx as usize;
                    coverage[y * side + x] = 255;
                }
            }
        }
    }

    Glyph {
        width: side,
        height: side,
        xmin: 0,
        ymin: 0,
        advance: side as f32,
        coverage,
    }
}

/// Row bitmaps for a character, leftmost column in the high bit.
///
/// Characters outside the printable ASCII range fall back to a hollow box.
fn glyph_rows(c: char) -> &'static [u8; 8] {
    const FALLBACK: [u8; 8] = [0x7E, 0x42, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];
    let index = c as usize;
    if !(0x20..0x7F).contains(&index) {
        return &FALLBACK;
    }
    &GLYPHS[index - 0x20]
}

/// 8x8 bitmaps for ASCII 0x20..0x7F.
#[rustfmt::skip]
const GLYPHS: [[u8; 8]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18, 0x00], // '!'
    [0x66, 0x66, 0x44, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x24, 0x7E, 0x24, 0x24, 0x24, 0x7E, 0x24, 0x00], // '#'
    [0x18, 0x3E, 0x58, 0x3C, 0x1A, 0x7C, 0x18, 0x00], // '$'
    [0x62, 0x64, 0x08, 0x10, 0x26, 0x46, 0x00, 0x00], // '%'
    [0x38, 0x44, 0x38, 0x70, 0x4A, 0x44, 0x3A, 0x00], // '&'
    [0x18, 0x18, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00], // '\''
    [0x0C, 0x18, 0x30, 0x30, 0x30, 0x18, 0x0C, 0x00], // '('
    [0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x18, 0x30, 0x00], // ')'
    [0x00, 0x24, 0x18, 0x7E, 0x18, 0x24, 0x00, 0x00], // '*'
    [0x00, 0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30], // ','
    [0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00], // '.'
    [0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x00, 0x00], // '/'
    [0x3C, 0x46, 0x4A, 0x52, 0x62, 0x42, 0x3C, 0x00], // '0'
    [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00], // '1'
    [0x3C, 0x42, 0x02, 0x0C, 0x30, 0x40, 0x7E, 0x00], // '2'
    [0x3C, 0x42, 0x02, 0x1C, 0x02, 0x42, 0x3C, 0x00], // '3'
    [0x0C, 0x1C, 0x2C, 0x4C, 0x7E, 0x0C, 0x0C, 0x00], // '4'
    [0x7E, 0x40, 0x7C, 0x02, 0x02, 0x42, 0x3C, 0x00], // '5'
    [0x1C, 0x20, 0x40, 0x7C, 0x42, 0x42, 0x3C, 0x00], // '6'
    [0x7E, 0x02, 0x04, 0x08, 0x10, 0x10, 0x10, 0x00], // '7'
    [0x3C, 0x42, 0x42, 0x3C, 0x42, 0x42, 0x3C, 0x00], // '8'
    [0x3C, 0x42, 0x42, 0x3E, 0x02, 0x04, 0x38, 0x00], // '9'
    [0x00, 0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x00], // ':'
    [0x00, 0x18, 0x18, 0x00, 0x18, 0x18, 0x30, 0x00], // ';'
    [0x06, 0x18, 0x60, 0x60, 0x18, 0x06, 0x00, 0x00], // '<'
    [0x00, 0x00, 0x7E, 0x00, 0x7E, 0x00, 0x00, 0x00], // '='
    [0x60, 0x18, 0x06, 0x06, 0x18, 0x60, 0x00, 0x00], // '>'
    [0x3C, 0x42, 0x02, 0x0C, 0x18, 0x00, 0x18, 0x00], // '?'
    [0x3C, 0x42, 0x4E, 0x52, 0x4E, 0x40, 0x3C, 0x00], // '@'
    [0x18, 0x24, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x00], // 'A'
    [0x7C, 0x42, 0x42, 0x7C, 0x42, 0x42, 0x7C, 0x00], // 'B'
    [0x3C, 0x42, 0x40, 0x40, 0x40, 0x42, 0x3C, 0x00], // 'C'
    [0x78, 0x44, 0x42, 0x42, 0x42, 0x44, 0x78, 0x00], // 'D'
    [0x7E, 0x40, 0x40, 0x7C, 0x40, 0x40, 0x7E, 0x00], // 'E'
    [0x7E, 0x40, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x00], // 'F'
    [0x3C, 0x42, 0x40, 0x4E, 0x42, 0x42, 0x3C, 0x00], // 'G'
    [0x42, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00], // 'H'
    [0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00], // 'I'
    [0x02, 0x02, 0x02, 0x02, 0x42, 0x42, 0x3C, 0x00], // 'J'
    [0x44, 0x48, 0x50, 0x60, 0x50, 0x48, 0x44, 0x00], // 'K'
    [0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7E, 0x00], // 'L'
    [0x42, 0x66, 0x5A, 0x5A, 0x42, 0x42, 0x42, 0x00], // 'M'
    [0x42, 0x62, 0x52, 0x4A, 0x46, 0x42, 0x42, 0x00], // 'N'
    [0x3C, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00], // 'O'
    [0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x40, 0x00], // 'P'
    [0x3C, 0x42, 0x42, 0x42, 0x4A, 0x44, 0x3A, 0x00], // 'Q'
    [0x7C, 0x42, 0x42, 0x7C, 0x50, 0x48, 0x44, 0x00], // 'R'
    [0x3C, 0x42, 0x40, 0x3C, 0x02, 0x42, 0x3C, 0x00], // 'S'
    [0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00], // 'T'
    [0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00], // 'U'
    [0x42, 0x42, 0x42, 0x42, 0x24, 0x24, 0x18, 0x00], // 'V'
    [0x42, 0x42, 0x42, 0x5A, 0x5A, 0x66, 0x42, 0x00], // 'W'
    [0x42, 0x24, 0x18, 0x18, 0x18, 0x24, 0x42, 0x00], // 'X'
    [0x42, 0x42, 0x24, 0x18, 0x18, 0x18, 0x18, 0x00], // 'Y'
    [0x7E, 0x04, 0x08, 0x10, 0x20, 0x40, 0x7E, 0x00], // 'Z'
    [0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00], // '['
    [0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x00, 0x00], // '\\'
    [0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x3C, 0x00], // ']'
    [0x18, 0x24, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7E], // '_'
    [0x30, 0x18, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00], // '`'
    [0x00, 0x00, 0x3C, 0x02, 0x3E, 0x42, 0x3E, 0x00], // 'a'
    [0x40, 0x40, 0x7C, 0x42, 0x42, 0x42, 0x7C, 0x00], // 'b'
    [0x00, 0x00, 0x3C, 0x42, 0x40, 0x42, 0x3C, 0x00], // 'c'
    [0x02, 0x02, 0x3E, 0x42, 0x42, 0x42, 0x3E, 0x00], // 'd'
    [0x00, 0x00, 0x3C, 0x42, 0x7E, 0x40, 0x3C, 0x00], // 'e'
    [0x0C, 0x12, 0x10, 0x7C, 0x10, 0x10, 0x10, 0x00], // 'f'
    [0x00, 0x00, 0x3E, 0x42, 0x42, 0x3E, 0x02, 0x3C], // 'g'
    [0x40, 0x40, 0x7C, 0x42, 0x42, 0x42, 0x42, 0x00], // 'h'
    [0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x3C, 0x00], // 'i'
    [0x0C, 0x00, 0x1C, 0x0C, 0x0C, 0x0C, 0x4C, 0x38], // 'j'
    [0x40, 0x40, 0x44, 0x48, 0x70, 0x48, 0x44, 0x00], // 'k'
    [0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00], // 'l'
    [0x00, 0x00, 0x76, 0x5A, 0x5A, 0x5A, 0x5A, 0x00], // 'm'
    [0x00, 0x00, 0x7C, 0x42, 0x42, 0x42, 0x42, 0x00], // 'n'
    [0x00, 0x00, 0x3C, 0x42, 0x42, 0x42, 0x3C, 0x00], // 'o'
    [0x00, 0x00, 0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40], // 'p'
    [0x00, 0x00, 0x3E, 0x42, 0x42, 0x3E, 0x02, 0x02], // 'q'
    [0x00, 0x00, 0x5C, 0x62, 0x40, 0x40, 0x40, 0x00], // 'r'
    [0x00, 0x00, 0x3E, 0x40, 0x3C, 0x02, 0x7C, 0x00], // 's'
    [0x10, 0x10, 0x7C, 0x10, 0x10, 0x12, 0x0C, 0x00], // 't'
    [0x00, 0x00, 0x42, 0x42, 0x42, 0x42, 0x3E, 0x00], // 'u'
    [0x00, 0x00, 0x42, 0x42, 0x42, 0x24, 0x18, 0x00], // 'v'
    [0x00, 0x00, 0x42, 0x5A, 0x5A, 0x5A, 0x24, 0x00], // 'w'
    [0x00, 0x00, 0x42, 0x24, 0x18, 0x24, 0x42, 0x00], // 'x'
    [0x00, 0x00, 0x42, 0x42, 0x42, 0x3E, 0x02, 0x3C], // 'y'
    [0x00, 0x00, 0x7E, 0x04, 0x18, 0x20, 0x7E, 0x00], // 'z'
    [0x0C, 0x18, 0x18, 0x30, 0x18, 0x18, 0x0C, 0x00], // '{'
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00], // '|'
    [0x30, 0x18, 0x18, 0x0C, 0x18, 0x18, 0x30, 0x00], // '}'
    [0x32, 0x4C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '~'
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_glyph_dimensions() {
        let font = Font::default();
        let glyph = font.rasterize('A', 8.0);
        assert_eq!((glyph.width, glyph.height), (8, 8));
        assert_eq!(glyph.advance, 8.0);
        assert!(glyph.coverage.iter().any(|&c| c > 0));
    }

    #[test]
    fn test_bitmap_scales_to_requested_size() {
        let font = Font::default();
        let glyph = font.rasterize('A', 16.0);
        assert_eq!((glyph.width, glyph.height), (16, 16));
        assert_eq!(glyph.advance, 16.0);
    }

    #[test]
    fn test_space_has_no_coverage() {
        let font = Font::default();
        let glyph = font.rasterize(' ', 8.0);
        assert!(glyph.coverage.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_measure_is_monospace_for_bitmap() {
        let font = Font::default();
        assert_eq!(font.measure("abc", 8.0), 24.0);
        assert_eq!(font.measure("abc", 16.0), 48.0);
    }

    #[test]
    fn test_non_ascii_falls_back() {
        let font = Font::default();
        let glyph = font.rasterize('é', 8.0);
        assert!(glyph.coverage.iter().any(|&c| c > 0));
    }

    #[test]
    fn test_bad_font_bytes_error() {
        let err = Font::from_bytes(&[0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, GraphicsError::FontLoadFailed(_)));
    }
}
