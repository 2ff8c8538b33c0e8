//! Style Renderer
//!
//! Derives the four font styles from a decoded record. Each transformation
//! is a separate pass that reads an immutable input and returns a new column
//! sequence:
//!
//!   prop regular  columns as stored
//!   prop bold     bold_merge -> bold appends -> bold padding
//!   mono regular  mono appends -> mono padding
//!   mono bold     prop bold, then the mono pass over its output
//!
//! Every output column remembers which record column it came from, so the
//! mono pass can find its tags after the bold pass has shifted positions.

use super::types::{ColumnTags, GlyphRecord, MonoFill, RenderOptions, RenderedGlyph, Style};

/// One output column and the record column it was derived from.
/// Synthesized columns (appends, padding) have no origin and carry no tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledColumn {
    pub pixels: u8,
    pub origin: Option<usize>,
}

impl StyledColumn {
    fn source(pixels: u8, origin: usize) -> Self {
        Self {
            pixels,
            origin: Some(origin),
        }
    }

    fn synthesized(pixels: u8) -> Self {
        Self {
            pixels,
            origin: None,
        }
    }
}

pub fn render(record: &GlyphRecord, style: Style) -> RenderedGlyph {
    render_with(record, style, &RenderOptions::default())
}

pub fn render_with(record: &GlyphRecord, style: Style, options: &RenderOptions) -> RenderedGlyph {
    let columns = match style {
        Style::PropReg => regular_pass(record),
        Style::PropBold => bold_pass(record),
        Style::MonoReg => mono_pass(record, &regular_pass(record), options.mono_fill),
        Style::MonoBold => mono_pass(record, &bold_pass(record), options.mono_fill),
    };
    RenderedGlyph::new(columns.into_iter().map(|c| c.pixels).collect())
}

/// Width of a style without building the columns.
pub fn rendered_width(record: &GlyphRecord, style: Style) -> usize {
    let bold_extra = record.count_tagged(ColumnTags::BOLD_APPEND) + record.bold_padding();
    let mono_extra = record.count_tagged(ColumnTags::MONO_APPEND) + record.mono_padding();
    match style {
        Style::PropReg => record.column_count(),
        Style::PropBold => record.column_count() + bold_extra,
        Style::MonoReg => record.column_count() + mono_extra,
        Style::MonoBold => record.column_count() + bold_extra + mono_extra,
    }
}

// ========== Passes ==========

pub fn regular_pass(record: &GlyphRecord) -> Vec<StyledColumn> {
    record
        .columns()
        .iter()
        .enumerate()
        .map(|(i, &pixels)| StyledColumn::source(pixels, i))
        .collect()
}

/// Apply dup-next and dup-prev merges. Every merge ORs in the *original*
/// value of the tagged column, so adjacent merges never chain.
pub fn bold_merge(record: &GlyphRecord) -> Vec<u8> {
    let original = record.columns();
    let mut working = original.to_vec();

    for (i, tag) in record.tags().enumerate() {
        if tag.contains(ColumnTags::BOLD_DUP_NEXT) {
            if let Some(next) = working.get_mut(i + 1) {
                *next |= original[i];
            }
        }
        if tag.contains(ColumnTags::BOLD_DUP_PREV) && i > 0 {
            working[i - 1] |= original[i];
        }
    }

    working
}

pub fn bold_pass(record: &GlyphRecord) -> Vec<StyledColumn> {
    let original = record.columns();
    let merged = bold_merge(record);
    let mut out = Vec::with_capacity(merged.len() + original.len() + 1);

    for (i, tag) in record.tags().enumerate() {
        out.push(StyledColumn::source(merged[i], i));
        if tag.contains(ColumnTags::BOLD_APPEND) {
            out.push(StyledColumn::synthesized(original[i]));
        }
    }

    for _ in 0..record.bold_padding() {
        let last = out.last().map_or(0, |c| c.pixels);
        out.push(StyledColumn::synthesized(last));
    }

    out
}

/// Insert a column after every column whose origin is tagged mono-append,
/// then pad narrow glyphs up to their declared mono total.
pub fn mono_pass(record: &GlyphRecord, input: &[StyledColumn], fill: MonoFill) -> Vec<StyledColumn> {
    let fill_for = |pixels: u8| match fill {
        MonoFill::Blank => 0,
        MonoFill::Duplicate => pixels,
    };

    let mut out = Vec::with_capacity(input.len() + record.column_count());
    for column in input {
        out.push(*column);
        let tagged = column
            .origin
            .map_or(false, |i| record.tag(i).contains(ColumnTags::MONO_APPEND));
        if tagged {
            out.push(StyledColumn::synthesized(fill_for(column.pixels)));
        }
    }

    for _ in 0..record.mono_padding() {
        let last = out.last().map_or(0, |c| c.pixels);
        out.push(StyledColumn::synthesized(fill_for(last)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::record::decode_glyph_record;

    fn glyph(bytes: [u8; 8]) -> GlyphRecord {
        decode_glyph_record(&bytes).unwrap()
    }

    fn columns(record: &GlyphRecord, style: Style) -> Vec<u8> {
        render(record, style).columns
    }

    const SPACE: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x04, 0x01];
    const LOWER_I: [u8; 8] = [0x7d, 0x00, 0x00, 0x00, 0x00, 0x14, 0x00, 0x01];
    const EQUALS: [u8; 8] = [0x14, 0x14, 0x14, 0x14, 0x00, 0x44, 0x80, 0x05];
    const LOWER_B: [u8; 8] = [0x7f, 0x44, 0x44, 0x38, 0x00, 0x44, 0x80, 0x25];
    const LOWER_F: [u8; 8] = [0x08, 0x7e, 0x09, 0x00, 0x00, 0x38, 0x4a, 0x09];
    const UPPER_G: [u8; 8] = [0x3e, 0x41, 0x49, 0x49, 0x79, 0x54, 0x21, 0x12];
    const UPPER_A: [u8; 8] = [0x7c, 0x12, 0x11, 0x12, 0x7c, 0x51, 0x11, 0x14];
    const HASH: [u8; 8] = [0x14, 0x7f, 0x14, 0x7f, 0x14, 0x50, 0x40, 0x40];

    #[test]
    fn test_space_styles() {
        let record = glyph(SPACE);
        assert_eq!(columns(&record, Style::PropReg), vec![0x00, 0x00]);
        // Declared bold total is 1 with no da tag: one padding column
        assert_eq!(columns(&record, Style::PropBold), vec![0x00, 0x00, 0x00]);
        assert_eq!(columns(&record, Style::MonoReg), vec![0x00, 0x00]);
        assert_eq!(columns(&record, Style::MonoBold).len(), 3);
    }

    #[test]
    fn test_lower_i_styles() {
        let record = glyph(LOWER_I);
        assert_eq!(columns(&record, Style::PropReg), vec![0x7d]);
        assert_eq!(columns(&record, Style::PropBold), vec![0x7d, 0x7d]);
        assert_eq!(columns(&record, Style::MonoReg), vec![0x7d]);
        assert_eq!(columns(&record, Style::MonoBold), vec![0x7d, 0x7d]);
    }

    #[test]
    fn test_equals_styles() {
        let record = glyph(EQUALS);
        assert_eq!(columns(&record, Style::MonoReg), vec![0x14, 0x14, 0x00, 0x14, 0x14]);
        assert_eq!(columns(&record, Style::PropBold), vec![0x14, 0x14, 0x14, 0x14, 0x14]);
        assert_eq!(
            columns(&record, Style::MonoBold),
            vec![0x14, 0x14, 0x14, 0x00, 0x14, 0x14]
        );
    }

    #[test]
    fn test_bold_merge_uses_original_values() {
        // 'b': 0 da, 1 m, 2 -, 3 dp
        let record = glyph(LOWER_B);
        assert_eq!(bold_merge(&record), vec![0x7f, 0x44, 0x7c, 0x38]);
        assert_eq!(columns(&record, Style::PropBold), vec![0x7f, 0x7f, 0x44, 0x7c, 0x38]);
    }

    #[test]
    fn test_adjacent_merges_do_not_chain() {
        // 'A': 0~3 dn, 4 da
        let record = glyph(UPPER_A);
        // col2 receives the original col1 (0x12), not col1 after col0's merge
        assert_eq!(bold_merge(&record), vec![0x7c, 0x7e, 0x13, 0x13, 0x7e]);
        assert_eq!(
            columns(&record, Style::PropBold),
            vec![0x7c, 0x7e, 0x13, 0x13, 0x7e, 0x7c]
        );
    }

    #[test]
    fn test_merges_from_both_sides() {
        // 'G': 0 da, 1 dp, 2 dn, 3 dn, 4 dp
        let record = glyph(UPPER_G);
        assert_eq!(bold_merge(&record), vec![0x7f, 0x41, 0x49, 0x79, 0x79]);
        assert_eq!(
            columns(&record, Style::PropBold),
            vec![0x7f, 0x3e, 0x41, 0x49, 0x79, 0x79]
        );
    }

    #[test]
    fn test_append_offsets_shift() {
        // '#': 1 da, 3 da
        let record = glyph(HASH);
        assert_eq!(
            columns(&record, Style::PropBold),
            vec![0x14, 0x7f, 0x7f, 0x14, 0x7f, 0x7f, 0x14]
        );
        assert_eq!(columns(&record, Style::MonoReg), record.columns().to_vec());
    }

    #[test]
    fn test_mono_bold_tracks_origins() {
        // 'f': 0 m, 1 da, 2 dp & m
        let record = glyph(LOWER_F);
        assert_eq!(columns(&record, Style::PropBold), vec![0x08, 0x7f, 0x7e, 0x09]);
        assert_eq!(columns(&record, Style::MonoReg), vec![0x08, 0x00, 0x7e, 0x09, 0x00]);
        assert_eq!(
            columns(&record, Style::MonoBold),
            vec![0x08, 0x00, 0x7f, 0x7e, 0x09, 0x00]
        );
    }

    #[test]
    fn test_mono_duplicate_fill_matches_reference_sheet() {
        let record = glyph(LOWER_B);
        let options = RenderOptions {
            mono_fill: MonoFill::Duplicate,
            ..RenderOptions::default()
        };
        let mono = render_with(&record, Style::MonoReg, &options);
        assert_eq!(mono.columns, vec![0x7f, 0x44, 0x44, 0x44, 0x38]);
        let mono_bold = render_with(&record, Style::MonoBold, &options);
        assert_eq!(mono_bold.columns, vec![0x7f, 0x7f, 0x44, 0x44, 0x7c, 0x38]);
        assert_eq!(
            mono_bold.to_ascii_art(),
            [
                "##....", "##....", "#####.", "##..##", "##..##", "##..##", "#####.", "......",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_tag_past_edge_is_ignored() {
        // Single column tagged dup-next: nothing to merge into
        let record = glyph([0x7d, 0x00, 0x00, 0x00, 0x00, 0x11, 0x00, 0x00]);
        assert_eq!(columns(&record, Style::PropBold), vec![0x7d]);
    }

    #[test]
    fn test_empty_glyph_padding() {
        // No columns, declared totals mono 1, bold 2
        let record = glyph([0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06]);
        assert_eq!(columns(&record, Style::PropReg), Vec::<u8>::new());
        assert_eq!(columns(&record, Style::PropBold), vec![0x00, 0x00]);
        assert_eq!(columns(&record, Style::MonoReg), vec![0x00]);
        assert_eq!(columns(&record, Style::MonoBold), vec![0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_bold_padding_duplicates_last_column() {
        // Two columns, no tags, declared bold total 1
        let record = glyph([0x01, 0x7e, 0x00, 0x00, 0x00, 0x20, 0x00, 0x01]);
        assert_eq!(columns(&record, Style::PropBold), vec![0x01, 0x7e, 0x7e]);
    }

    #[test]
    fn test_rendered_width_matches_render() {
        for bytes in [SPACE, LOWER_I, EQUALS, LOWER_B, LOWER_F, UPPER_A, UPPER_G, HASH].iter() {
            let record = glyph(*bytes);
            for style in Style::ALL.iter() {
                assert_eq!(rendered_width(&record, *style), render(&record, *style).width());
            }
        }
    }

    #[test]
    fn test_passes_keep_origins() {
        let record = glyph(EQUALS);
        let bold = bold_pass(&record);
        let origins: Vec<Option<usize>> = bold.iter().map(|c| c.origin).collect();
        assert_eq!(origins, vec![Some(0), None, Some(1), Some(2), Some(3)]);
    }
}
