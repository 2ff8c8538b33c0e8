//! Z1 Font Module
//!
//! An 8-pixel-tall ASCII font stored as one packed record per glyph. Each
//! record holds the proportional-regular columns and per-column tags from
//! which proportional-bold, mono-regular and mono-bold are derived at render
//! time.

pub mod cache;
pub mod error;
pub mod nibble_reader;
pub mod record;
#[cfg(feature = "preview")]
pub mod sheet;
pub mod style;
pub mod table;
pub mod types;

use log::{debug, trace, warn};

use error::{GlyphError, Result};
use record::decode_glyph_record;
use table::{FIRST_CODE, FONT_Z1PROP8_BASE, GLYPH_COUNT, LAST_CODE};
use types::{GlyphRecord, RenderOptions, RenderedGlyph, Style, RECORD_SIZE};

const Z1FONT_VERBOSE_LOGS: bool = false;

/// Lookup over a packed 96-record table. Records are decoded on demand;
/// nothing is cached and the table is never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Z1Font<'a> {
    data: &'a [u8],
}

impl Z1Font<'static> {
    /// The font table compiled into the crate.
    pub fn builtin() -> Self {
        Z1Font {
            data: &FONT_Z1PROP8_BASE,
        }
    }
}

impl Default for Z1Font<'static> {
    fn default() -> Self {
        Z1Font::builtin()
    }
}

impl<'a> Z1Font<'a> {
    /// Load an externally supplied table. Every record is validated up front
    /// and the whole table is rejected on the first malformed one.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        debug!("Z1 font: loading table of {} bytes", data.len());

        if data.len() != GLYPH_COUNT * RECORD_SIZE {
            return Err(GlyphError::InvalidTableLength(data.len()));
        }

        for (i, bytes) in data.chunks_exact(RECORD_SIZE).enumerate() {
            let code = FIRST_CODE + i as u8;
            if let Err(err) = decode_glyph_record(bytes) {
                warn!("Z1 font: rejecting table, glyph {} is malformed: {}", code, err);
                return Err(GlyphError::Record {
                    code,
                    source: Box::new(err),
                });
            }
        }

        debug!("Z1 font: {} glyphs validated", GLYPH_COUNT);
        Ok(Z1Font { data })
    }

    /// Raw 8-byte record for `code`.
    pub fn record_bytes(&self, code: u32) -> Result<&'a [u8]> {
        let index = Self::index(code)?;
        let start = index * RECORD_SIZE;
        Ok(&self.data[start..start + RECORD_SIZE])
    }

    pub fn glyph(&self, code: u32) -> Result<GlyphRecord> {
        decode_glyph_record(self.record_bytes(code)?)
    }

    pub fn render(&self, code: u32, style: Style) -> Result<RenderedGlyph> {
        self.render_with(code, style, &RenderOptions::default())
    }

    pub fn render_with(&self, code: u32, style: Style, options: &RenderOptions) -> Result<RenderedGlyph> {
        let record = self.glyph(code)?;
        Ok(style::render_with(&record, style, options))
    }

    /// Rendered width of one glyph.
    pub fn width(&self, code: u32, style: Style) -> Result<usize> {
        let record = self.glyph(code)?;
        Ok(style::rendered_width(&record, style))
    }

    /// Lay out `text` as a single column strip, glyphs separated by
    /// `letter_spacing` blank columns. Characters outside the table are drawn
    /// with the glyph for code 127.
    pub fn render_text(&self, text: &str, style: Style) -> Result<RenderedGlyph> {
        self.render_text_with(text, style, &RenderOptions::default())
    }

    pub fn render_text_with(&self, text: &str, style: Style, options: &RenderOptions) -> Result<RenderedGlyph> {
        let mut columns = Vec::new();
        for (i, c) in text.chars().enumerate() {
            if i > 0 {
                columns.extend(std::iter::repeat(0u8).take(options.letter_spacing as usize));
            }
            let glyph = self.render_with(Self::table_code(c), style, options)?;
            columns.extend(glyph.columns);
        }
        Ok(RenderedGlyph::new(columns))
    }

    /// Width of the strip `render_text_with` would produce.
    pub fn text_width(&self, text: &str, style: Style, options: &RenderOptions) -> Result<usize> {
        let mut width = 0;
        for (i, c) in text.chars().enumerate() {
            if i > 0 {
                width += options.letter_spacing as usize;
            }
            width += self.width(Self::table_code(c), style)?;
        }
        Ok(width)
    }

    /// Iterate over every decoded glyph with its character code.
    pub fn glyphs(&self) -> impl Iterator<Item = (u8, Result<GlyphRecord>)> + 'a {
        let data = self.data;
        (FIRST_CODE..=LAST_CODE).map(move |code| {
            let start = (code - FIRST_CODE) as usize * RECORD_SIZE;
            (code, decode_glyph_record(&data[start..start + RECORD_SIZE]))
        })
    }

    fn index(code: u32) -> Result<usize> {
        if code < FIRST_CODE as u32 || code > LAST_CODE as u32 {
            return Err(GlyphError::UnknownCharacterCode(code));
        }
        Ok((code - FIRST_CODE as u32) as usize)
    }

    fn table_code(c: char) -> u32 {
        let code = c as u32;
        if code < FIRST_CODE as u32 || code > LAST_CODE as u32 {
            if Z1FONT_VERBOSE_LOGS {
                trace!("Z1 font: {:?} outside table, using glyph {}", c, LAST_CODE);
            }
            return LAST_CODE as u32;
        }
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let font = Z1Font::builtin();
        assert!(Z1Font::from_bytes(&FONT_Z1PROP8_BASE).is_ok());
        for (code, record) in font.glyphs() {
            assert!(record.is_ok(), "glyph {} failed to decode", code);
        }
    }

    #[test]
    fn test_lookup_range() {
        let font = Z1Font::builtin();
        assert!(font.glyph(32).is_ok());
        assert!(font.glyph(127).is_ok());
        assert_eq!(font.glyph(31), Err(GlyphError::UnknownCharacterCode(31)));
        assert_eq!(font.glyph(128), Err(GlyphError::UnknownCharacterCode(128)));
        assert_eq!(
            font.render(0x263a, Style::PropReg),
            Err(GlyphError::UnknownCharacterCode(0x263a))
        );
    }

    #[test]
    fn test_record_bytes() {
        let font = Z1Font::builtin();
        assert_eq!(
            font.record_bytes('i' as u32).unwrap(),
            &[0x7d, 0x00, 0x00, 0x00, 0x00, 0x14, 0x00, 0x01]
        );
        assert_eq!(
            font.record_bytes('=' as u32).unwrap(),
            &[0x14, 0x14, 0x14, 0x14, 0x00, 0x44, 0x80, 0x05]
        );
    }

    #[test]
    fn test_render_by_code() {
        let font = Z1Font::builtin();
        let bold_i = font.render('i' as u32, Style::PropBold).unwrap();
        assert_eq!(bold_i.columns, vec![0x7d, 0x7d]);
        assert_eq!(font.width('=' as u32, Style::MonoBold), Ok(6));
    }

    #[test]
    fn test_render_text_spacing() {
        let font = Z1Font::builtin();
        let strip = font.render_text("ii", Style::PropReg).unwrap();
        assert_eq!(strip.columns, vec![0x7d, 0x00, 0x7d]);

        let options = RenderOptions {
            letter_spacing: 0,
            ..RenderOptions::default()
        };
        let tight = font.render_text_with("ii", Style::PropBold, &options).unwrap();
        assert_eq!(tight.columns, vec![0x7d, 0x7d, 0x7d, 0x7d]);
        assert_eq!(font.text_width("ii", Style::PropBold, &options), Ok(4));
    }

    #[test]
    fn test_render_text_substitutes_unknown() {
        let font = Z1Font::builtin();
        let fallback = font.render(127, Style::PropReg).unwrap();
        let strip = font.render_text("\u{1f}", Style::PropReg).unwrap();
        assert_eq!(strip, fallback);
        let strip = font.render_text("é", Style::PropReg).unwrap();
        assert_eq!(strip, fallback);
    }

    #[test]
    fn test_text_width_matches_render() {
        let font = Z1Font::builtin();
        let options = RenderOptions::default();
        for style in Style::ALL.iter() {
            let text = "hello, World! {z1}";
            let strip = font.render_text_with(text, *style, &options).unwrap();
            assert_eq!(font.text_width(text, *style, &options), Ok(strip.width()));
        }
        assert_eq!(font.render_text("", Style::PropReg).unwrap().width(), 0);
    }

    #[test]
    fn test_from_bytes_rejects_bad_length() {
        assert_eq!(
            Z1Font::from_bytes(&FONT_Z1PROP8_BASE[..760]).err(),
            Some(GlyphError::InvalidTableLength(760))
        );
    }

    #[test]
    fn test_from_bytes_rejects_bad_record() {
        let mut data = FONT_Z1PROP8_BASE.to_vec();
        // '(' gets dup-prev on column 0
        let offset = ('(' as usize - 32) * RECORD_SIZE;
        data[offset + 5] = 0x32;
        let err = Z1Font::from_bytes(&data).err();
        assert_eq!(
            err,
            Some(GlyphError::Record {
                code: b'(',
                source: Box::new(GlyphError::InvalidTagPlacement),
            })
        );
    }

    #[test]
    fn test_from_bytes_accepts_copy() {
        let data = FONT_Z1PROP8_BASE.to_vec();
        let font = Z1Font::from_bytes(&data).unwrap();
        assert_eq!(
            font.render('=' as u32, Style::MonoReg),
            Z1Font::builtin().render('=' as u32, Style::MonoReg)
        );
    }
}
