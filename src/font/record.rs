use log::trace;

use super::error::{GlyphError, Result};
use super::nibble_reader::NibbleReader;
use super::types::{AlignAppend, ColumnTags, FinalNibble, GlyphRecord, MAX_COLUMNS, RECORD_SIZE};
use super::Z1FONT_VERBOSE_LOGS;

/// Glyph Record Decoder
///
/// Layout of one 8-byte record:
///   a[0..5]   pixel columns, bit 0 = top row
///   a[5] MSB  column count (0..=5)
///   a[5] LSB, a[6] MSB, a[6] LSB, a[7] MSB, a[7] LSB
///             column tags, one nibble per column in that order
///   a[7] LSB  alignment totals (mono:2, bold:2) when the count is <= 4
pub fn decode_glyph_record(bytes: &[u8]) -> Result<GlyphRecord> {
    if bytes.len() != RECORD_SIZE {
        return Err(GlyphError::InvalidRecordLength(bytes.len()));
    }

    let mut columns = [0u8; MAX_COLUMNS];
    columns.copy_from_slice(&bytes[..MAX_COLUMNS]);

    let mut reader = NibbleReader::from_offset(bytes, MAX_COLUMNS);
    let column_count = reader.read_nibble();
    if column_count as usize > MAX_COLUMNS {
        return Err(GlyphError::InvalidColumnCount(column_count));
    }

    // Nibbles for columns 0..4 sit at fixed slots regardless of the count;
    // slots past the count are not tags.
    let mut tags = [ColumnTags::empty(); MAX_COLUMNS - 1];
    for (i, tag) in tags.iter_mut().enumerate() {
        let nibble = reader.read_nibble();
        if i < column_count as usize {
            *tag = ColumnTags::from_bits_truncate(nibble);
        }
    }

    let final_nibble = if column_count as usize == MAX_COLUMNS {
        FinalNibble::Tag(ColumnTags::from_bits_truncate(reader.read_nibble()))
    } else {
        let (mono, bold) = reader.read_bit_pairs();
        FinalNibble::AlignAppend(AlignAppend { mono, bold })
    };

    let record = GlyphRecord {
        columns,
        column_count,
        tags,
        final_nibble,
    };
    validate_tags(&record)?;

    if Z1FONT_VERBOSE_LOGS {
        trace!("decoded glyph record {:02x?}: {}", bytes, record.describe());
    }

    Ok(record)
}

fn validate_tags(record: &GlyphRecord) -> Result<()> {
    for (column, tag) in record.tags().enumerate() {
        if column == 0 && tag.contains(ColumnTags::BOLD_DUP_PREV) {
            return Err(GlyphError::InvalidTagPlacement);
        }
        if tag.contains(ColumnTags::MONO_APPEND | ColumnTags::BOLD_APPEND) {
            return Err(GlyphError::ConflictingTags { column });
        }
    }
    Ok(())
}
