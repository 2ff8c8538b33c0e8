//! Caller-owned glyph cache
//!
//! Rendering is cheap and the font itself never caches. Display code that
//! redraws the same strings every frame can keep one of these around.

use std::collections::hash_map::Entry;

use fxhash::FxHashMap;

use super::error::Result;
use super::types::{RenderOptions, RenderedGlyph, Style};
use super::Z1Font;

pub struct GlyphCache<'f, 'a> {
    font: &'f Z1Font<'a>,
    options: RenderOptions,
    entries: FxHashMap<(u32, Style), RenderedGlyph>,
}

impl<'f, 'a> GlyphCache<'f, 'a> {
    pub fn new(font: &'f Z1Font<'a>) -> Self {
        Self::with_options(font, RenderOptions::default())
    }

    pub fn with_options(font: &'f Z1Font<'a>, options: RenderOptions) -> Self {
        Self {
            font,
            options,
            entries: FxHashMap::default(),
        }
    }

    /// Rendered glyph for `(code, style)`, rendering it on first use.
    /// Lookup errors are returned and not cached.
    pub fn get(&mut self, code: u32, style: Style) -> Result<&RenderedGlyph> {
        let font = self.font;
        let options = self.options;
        match self.entries.entry((code, style)) {
            Entry::Occupied(entry) => Ok(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                let glyph = font.render_with(code, style, &options)?;
                Ok(&*entry.insert(glyph))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
