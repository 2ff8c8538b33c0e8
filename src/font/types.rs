//! Z1 Font Data Types

use bitflags::bitflags;
use bitvec::{order::Lsb0, view::BitView};
use itertools::Itertools;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};

use super::error::{GlyphError, Result};

/// Glyph height in pixels; one column byte covers all rows.
pub const GLYPH_HEIGHT: usize = 8;

/// Maximum number of proportional-regular columns in a record.
pub const MAX_COLUMNS: usize = 5;

/// Size of one packed glyph record in bytes.
pub const RECORD_SIZE: usize = 8;

// ========== Column Tags ==========

bitflags! {
    /// Per-column transformation flags, one nibble per column.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColumnTags: u8 {
        /// Mono: append one column after this one
        const MONO_APPEND = 0x8;
        /// Bold: append a duplicate of this column
        const BOLD_APPEND = 0x4;
        /// Bold: OR this column into the previous one
        const BOLD_DUP_PREV = 0x2;
        /// Bold: OR this column into the next one
        const BOLD_DUP_NEXT = 0x1;
    }
}

impl ColumnTags {
    /// Short form used in the font table comments: `m`, `da`, `dp`, `dn`, `-`.
    pub fn short_name(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        let mut parts = Vec::new();
        if self.contains(ColumnTags::BOLD_DUP_NEXT) {
            parts.push("dn");
        }
        if self.contains(ColumnTags::BOLD_DUP_PREV) {
            parts.push("dp");
        }
        if self.contains(ColumnTags::BOLD_APPEND) {
            parts.push("da");
        }
        if self.contains(ColumnTags::MONO_APPEND) {
            parts.push("m");
        }
        parts.join(" & ")
    }
}

// ========== Record Types ==========

/// Declared append totals carried in the final nibble of a narrow glyph.
///
/// The high bit pair is the mono total and the low bit pair the bold total.
/// When a total exceeds the number of matching tags the renderer pads the
/// glyph at its right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlignAppend {
    pub mono: u8,
    pub bold: u8,
}

/// Byte 7's low nibble: the tag of column 4 for five-column glyphs,
/// otherwise the alignment field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinalNibble {
    Tag(ColumnTags),
    AlignAppend(AlignAppend),
}

/// One decoded glyph: proportional-regular columns plus their tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlyphRecord {
    pub(crate) columns: [u8; MAX_COLUMNS],
    pub(crate) column_count: u8,
    /// Tags for columns 0..4; column 4's tag lives in `final_nibble`.
    pub(crate) tags: [ColumnTags; MAX_COLUMNS - 1],
    pub(crate) final_nibble: FinalNibble,
}

impl GlyphRecord {
    pub fn column_count(&self) -> usize {
        self.column_count as usize
    }

    /// Significant columns only; trailing padding bytes are not included.
    pub fn columns(&self) -> &[u8] {
        &self.columns[..self.column_count()]
    }

    /// Tag of column `index`, empty past `column_count`.
    pub fn tag(&self, index: usize) -> ColumnTags {
        if index >= self.column_count() {
            return ColumnTags::empty();
        }
        match (index, self.final_nibble) {
            (4, FinalNibble::Tag(tag)) => tag,
            (4, FinalNibble::AlignAppend(_)) => ColumnTags::empty(),
            (i, _) => self.tags[i],
        }
    }

    pub fn tags(&self) -> impl Iterator<Item = ColumnTags> + '_ {
        (0..self.column_count()).map(move |i| self.tag(i))
    }

    pub fn final_nibble(&self) -> FinalNibble {
        self.final_nibble
    }

    /// Alignment field, present only when `column_count <= 4`.
    pub fn align(&self) -> Option<AlignAppend> {
        match self.final_nibble {
            FinalNibble::AlignAppend(align) => Some(align),
            FinalNibble::Tag(_) => None,
        }
    }

    /// Number of columns carrying all of `flags`.
    pub fn count_tagged(&self, flags: ColumnTags) -> usize {
        self.tags().filter(|tag| tag.contains(flags)).count()
    }

    /// Bold padding columns needed on top of the tag-driven appends.
    pub fn bold_padding(&self) -> usize {
        self.align().map_or(0, |align| {
            (align.bold as usize).saturating_sub(self.count_tagged(ColumnTags::BOLD_APPEND))
        })
    }

    /// Mono padding columns needed on top of the tag-driven appends.
    pub fn mono_padding(&self) -> usize {
        self.align().map_or(0, |align| {
            (align.mono as usize).saturating_sub(self.count_tagged(ColumnTags::MONO_APPEND))
        })
    }

    /// Column layout in the notation of the font table comments, e.g.
    /// `4 cols, 0 da, 1 m, 2 -, 3 dp`.
    pub fn describe(&self) -> String {
        let tags = self
            .tags()
            .enumerate()
            .map(|(i, tag)| format!("{} {}", i, tag.short_name()))
            .join(", ");
        if tags.is_empty() {
            format!("{} cols", self.column_count)
        } else {
            format!("{} cols, {}", self.column_count, tags)
        }
    }
}

// ========== Styles ==========

/// The four derived font styles. Discriminants are the framebuffer font ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Style {
    PropReg = 0,
    PropBold = 1,
    MonoReg = 2,
    MonoBold = 3,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::PropReg, Style::PropBold, Style::MonoReg, Style::MonoBold];

    pub fn from_font_id(id: u8) -> Result<Style> {
        Style::from_u8(id).ok_or(GlyphError::InvalidStyle(id))
    }

    pub fn font_id(self) -> u8 {
        self.to_u8().unwrap_or(0)
    }

    pub fn is_bold(self) -> bool {
        matches!(self, Style::PropBold | Style::MonoBold)
    }

    pub fn is_mono(self) -> bool {
        matches!(self, Style::MonoReg | Style::MonoBold)
    }

    pub fn font_name(self) -> &'static str {
        match self {
            Style::PropReg => "z1prop8_6x8",
            Style::PropBold => "z1prop8b_8x8",
            Style::MonoReg => "z1mono8_6x8",
            Style::MonoBold => "z1mono8b_8x8",
        }
    }
}

// ========== Render Output ==========

/// What a mono append inserts after its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonoFill {
    /// All-zero spacing column
    Blank,
    /// Copy of the preceding column, as in the reference glyph sheet
    Duplicate,
}

impl Default for MonoFill {
    fn default() -> Self {
        MonoFill::Blank
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub mono_fill: MonoFill,
    /// Blank columns between glyphs in a text strip
    pub letter_spacing: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mono_fill: MonoFill::Blank,
            letter_spacing: 1,
        }
    }
}

/// A rendered glyph or text strip: column bytes, bit 0 = top row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RenderedGlyph {
    pub columns: Vec<u8>,
}

impl RenderedGlyph {
    pub fn new(columns: Vec<u8>) -> Self {
        Self { columns }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        GLYPH_HEIGHT
    }

    /// Whether the pixel at column `x`, row `y` is lit. Out of range is unlit.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        match self.columns.get(x) {
            Some(column) if y < GLYPH_HEIGHT => column.view_bits::<Lsb0>()[y],
            _ => false,
        }
    }

    /// One row of pixels, left to right.
    pub fn row(&self, y: usize) -> impl Iterator<Item = bool> + '_ {
        (0..self.width()).map(move |x| self.pixel(x, y))
    }

    pub fn to_ascii_art(&self) -> String {
        (0..GLYPH_HEIGHT)
            .map(|y| {
                self.row(y)
                    .map(|lit| if lit { '#' } else { '.' })
                    .collect::<String>()
            })
            .join("\n")
    }
}

impl From<RenderedGlyph> for Vec<u8> {
    fn from(glyph: RenderedGlyph) -> Self {
        glyph.columns
    }
}
