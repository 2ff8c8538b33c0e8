//! Glyph sheet preview
//!
//! Draws the whole table in one style as a 16 x 6 grid, black on white, so a
//! rendering can be compared against a reference bitmap table by eye or by
//! image diff.

use image::{GrayImage, Luma};
use log::debug;

use super::error::Result;
use super::table::{FIRST_CODE, GLYPH_COUNT, LAST_CODE};
use super::types::{RenderOptions, RenderedGlyph, Style, GLYPH_HEIGHT};
use super::Z1Font;

pub const SHEET_COLUMNS: u32 = 16;
pub const SHEET_ROWS: u32 = (GLYPH_COUNT as u32 + SHEET_COLUMNS - 1) / SHEET_COLUMNS;

const INK: Luma<u8> = Luma([0]);
const PAPER: Luma<u8> = Luma([255]);

/// Draw one rendered glyph, each pixel scaled to a `scale` x `scale` block.
pub fn glyph_image(glyph: &RenderedGlyph, scale: u32) -> GrayImage {
    let scale = scale.max(1);
    let mut image = GrayImage::from_pixel(
        glyph.width() as u32 * scale,
        GLYPH_HEIGHT as u32 * scale,
        PAPER,
    );
    blit(&mut image, glyph, 0, 0, scale);
    image
}

pub fn glyph_sheet(font: &Z1Font<'_>, style: Style, scale: u32) -> Result<GrayImage> {
    glyph_sheet_with(font, style, scale, &RenderOptions::default())
}

/// Cells are as wide as the widest glyph in `style` plus one spacing column,
/// and one row taller than a glyph.
pub fn glyph_sheet_with(
    font: &Z1Font<'_>,
    style: Style,
    scale: u32,
    options: &RenderOptions,
) -> Result<GrayImage> {
    let scale = scale.max(1);
    let glyphs = (FIRST_CODE..=LAST_CODE)
        .map(|code| font.render_with(code as u32, style, options))
        .collect::<Result<Vec<_>>>()?;

    let max_width = glyphs.iter().map(RenderedGlyph::width).max().unwrap_or(0) as u32;
    let cell_width = max_width + 1;
    let cell_height = GLYPH_HEIGHT as u32 + 1;

    debug!(
        "Z1 font: {} sheet, cell {}x{}, scale {}",
        style.font_name(),
        cell_width,
        cell_height,
        scale
    );

    let mut image = GrayImage::from_pixel(
        SHEET_COLUMNS * cell_width * scale,
        SHEET_ROWS * cell_height * scale,
        PAPER,
    );
    for (i, glyph) in glyphs.iter().enumerate() {
        let i = i as u32;
        let x = (i % SHEET_COLUMNS) * cell_width * scale;
        let y = (i / SHEET_COLUMNS) * cell_height * scale;
        blit(&mut image, glyph, x, y, scale);
    }

    Ok(image)
}

fn blit(image: &mut GrayImage, glyph: &RenderedGlyph, x0: u32, y0: u32, scale: u32) {
    for x in 0..glyph.width() {
        for y in 0..GLYPH_HEIGHT {
            if !glyph.pixel(x, y) {
                continue;
            }
            for dx in 0..scale {
                for dy in 0..scale {
                    image.put_pixel(x0 + x as u32 * scale + dx, y0 + y as u32 * scale + dy, INK);
                }
            }
        }
    }
}
