//! Z1 bitmap font for small embedded displays.
//!
//! One packed 8-byte record per printable ASCII glyph (codes 32..=127) yields
//! four styles: proportional-regular, proportional-bold, mono-regular and
//! mono-bold. Output is a sequence of 8-pixel columns, bit 0 = top row.
//!
//! ```
//! use z1font::{Style, Z1Font};
//!
//! let font = Z1Font::builtin();
//! let glyph = font.render('i' as u32, Style::PropBold).unwrap();
//! assert_eq!(glyph.columns, vec![0x7d, 0x7d]);
//! ```

pub mod font;

pub use font::cache::GlyphCache;
pub use font::error::{GlyphError, Result};
pub use font::record::decode_glyph_record;
pub use font::style::{render, render_with, rendered_width};
pub use font::types::{
    AlignAppend, ColumnTags, FinalNibble, GlyphRecord, MonoFill, RenderOptions, RenderedGlyph, Style,
};
pub use font::Z1Font;
