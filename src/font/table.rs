use super::types::RECORD_SIZE;

/// First character code in the table.
pub const FIRST_CODE: u8 = 32;

/// Last character code in the table; also the fallback glyph.
pub const LAST_CODE: u8 = 127;

pub const GLYPH_COUNT: usize = (LAST_CODE - FIRST_CODE) as usize + 1;

/// Packed Z1 base font: proportional-regular columns plus style tags for
/// codes 32..=127, eight bytes per glyph. See `record::decode_glyph_record`
/// for the byte layout.
pub static FONT_Z1PROP8_BASE: [u8; GLYPH_COUNT * RECORD_SIZE] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x04, 0x01, // 32 space
    0x00, 0xdf, 0x00, 0x00, 0x00, 0x30, 0x40, 0x01, // 33 '!'
    0x07, 0x00, 0x07, 0x00, 0x00, 0x34, 0x04, 0x02, // 34 '"'
    0x14, 0x7f, 0x14, 0x7f, 0x14, 0x50, 0x40, 0x40, // 35 '#'
    0x24, 0x2a, 0x7f, 0x2a, 0x12, 0x50, 0x04, 0x00, // 36 '$'
    0x26, 0x10, 0x08, 0x04, 0x32, 0x51, 0x11, 0x14, // 37 '%'
    0x36, 0x49, 0x49, 0x26, 0x50, 0x51, 0x11, 0x14, // 38 '&'
    0x00, 0x07, 0x00, 0x00, 0x00, 0x30, 0x40, 0x01, // 39 "'"
    0x1c, 0x22, 0x41, 0x00, 0x00, 0x31, 0x14, 0x01, // 40 '('
    0x41, 0x22, 0x1c, 0x00, 0x00, 0x31, 0x14, 0x01, // 41 ')'
    0x14, 0x0e, 0x14, 0x00, 0x00, 0x30, 0x40, 0x01, // 42 '*'
    0x08, 0x08, 0x3e, 0x08, 0x08, 0x50, 0x04, 0x00, // 43 '+'
    0x80, 0x60, 0x00, 0x00, 0x00, 0x31, 0x40, 0x01, // 44 ','
    0x08, 0x08, 0x08, 0x08, 0x00, 0x40, 0x08, 0x45, // 45 '-'
    0x00, 0xc0, 0x00, 0x00, 0x00, 0x30, 0x40, 0x01, // 46 '.'
    0x60, 0x18, 0x06, 0x01, 0x00, 0x41, 0x11, 0x41, // 47 '/'
    0x3e, 0x51, 0x49, 0x45, 0x3e, 0x51, 0x00, 0x14, // 48 '0'
    0x40, 0x42, 0x7f, 0x40, 0x40, 0x50, 0x11, 0x14, // 49 '1'
    0x42, 0x61, 0x51, 0x49, 0x46, 0x51, 0x11, 0x14, // 50 '2'
    0x41, 0x49, 0x49, 0x49, 0x36, 0x50, 0x00, 0x14, // 51 '3'
    0x1f, 0x10, 0x10, 0x10, 0x7f, 0x51, 0x00, 0x04, // 52 '4'
    0x27, 0x45, 0x45, 0x45, 0x39, 0x51, 0x00, 0x14, // 53 '5'
    0x3e, 0x49, 0x49, 0x49, 0x32, 0x51, 0x00, 0x14, // 54 '6'
    0x01, 0x01, 0x79, 0x05, 0x03, 0x50, 0x01, 0x14, // 55 '7'
    0x36, 0x49, 0x49, 0x49, 0x36, 0x51, 0x00, 0x14, // 56 '8'
    0x26, 0x49, 0x49, 0x49, 0x3e, 0x51, 0x00, 0x14, // 57 '9'
    0x00, 0x66, 0x00, 0x00, 0x00, 0x30, 0x40, 0x01, // 58 ':'
    0x80, 0x66, 0x00, 0x00, 0x00, 0x31, 0x40, 0x01, // 59 ';'
    0x08, 0x14, 0x22, 0x41, 0x00, 0x41, 0x11, 0x41, // 60 '<'
    0x14, 0x14, 0x14, 0x14, 0x00, 0x44, 0x80, 0x05, // 61 '='
    0x41, 0x22, 0x14, 0x08, 0x00, 0x41, 0x11, 0x41, // 62 '>'
    0x06, 0x01, 0xd1, 0x09, 0x06, 0x51, 0x01, 0x14, // 63 '?'
    0x34, 0x4a, 0x7a, 0x42, 0x3c, 0x54, 0x20, 0x02, // 64 '@'
    0x7c, 0x12, 0x11, 0x12, 0x7c, 0x51, 0x11, 0x14, // 65 'A'
    0x7f, 0x49, 0x49, 0x49, 0x36, 0x51, 0x00, 0x14, // 66 'B'
    0x3e, 0x41, 0x41, 0x41, 0x22, 0x51, 0x00, 0x14, // 67 'C'
    0x7f, 0x41, 0x41, 0x41, 0x3e, 0x51, 0x00, 0x14, // 68 'D'
    0x7f, 0x49, 0x49, 0x41, 0x00, 0x44, 0x80, 0x05, // 69 'E'
    0x7f, 0x09, 0x09, 0x01, 0x00, 0x44, 0x80, 0x05, // 70 'F'
    0x3e, 0x41, 0x49, 0x49, 0x79, 0x54, 0x21, 0x12, // 71 'G'
    0x7f, 0x08, 0x08, 0x08, 0x7f, 0x51, 0x00, 0x04, // 72 'H'
    0x41, 0x7f, 0x41, 0x00, 0x00, 0x30, 0x40, 0x01, // 73 'I'
    0x81, 0x7f, 0x01, 0x00, 0x00, 0x31, 0x40, 0x01, // 74 'J'
    0x7f, 0x08, 0x14, 0x22, 0x41, 0x51, 0x11, 0x14, // 75 'K'
    0x7f, 0x40, 0x40, 0x40, 0x00, 0x44, 0x80, 0x05, // 76 'L'
    0x7f, 0x02, 0x1c, 0x02, 0x7f, 0x54, 0x00, 0x04, // 77 'M'
    0x7f, 0x02, 0x04, 0x08, 0x7f, 0x51, 0x11, 0x14, // 78 'N'
    0x3e, 0x41, 0x41, 0x41, 0x3e, 0x51, 0x00, 0x14, // 79 'O'
    0x7f, 0x11, 0x11, 0x11, 0x0e, 0x51, 0x00, 0x14, // 80 'P'
    0x3e, 0x41, 0x51, 0x61, 0x7e, 0x51, 0x00, 0x14, // 81 'Q'
    0x7f, 0x11, 0x11, 0x31, 0x4e, 0x51, 0x00, 0x14, // 82 'R'
    0x26, 0x49, 0x49, 0x49, 0x32, 0x51, 0x00, 0x14, // 83 'S'
    0x01, 0x01, 0x7f, 0x01, 0x01, 0x50, 0x04, 0x00, // 84 'T'
    0x3f, 0x40, 0x40, 0x40, 0x3f, 0x51, 0x11, 0x14, // 85 'U'
    0x1f, 0x20, 0x40, 0x20, 0x1f, 0x51, 0x11, 0x14, // 86 'V'
    0x3f, 0x40, 0x3c, 0x40, 0x3f, 0x54, 0x20, 0x14, // 87 'W'
    0x63, 0x14, 0x08, 0x14, 0x63, 0x51, 0x11, 0x14, // 88 'X'
    0x07, 0x08, 0x70, 0x08, 0x07, 0x51, 0x11, 0x14, // 89 'Y'
    0x61, 0x51, 0x49, 0x45, 0x43, 0x51, 0x11, 0x14, // 90 'Z'
    0x7f, 0x41, 0x41, 0x00, 0x00, 0x34, 0x00, 0x01, // 91 '['
    0x01, 0x06, 0x18, 0x60, 0x00, 0x41, 0x11, 0x41, // 92 '\\'
    0x41, 0x41, 0x7f, 0x00, 0x00, 0x30, 0x04, 0x01, // 93 ']'
    0x04, 0x02, 0x01, 0x02, 0x04, 0x51, 0x11, 0x14, // 94 '^'
    0x40, 0x40, 0x40, 0x40, 0x00, 0x40, 0x08, 0x45, // 95 '_'
    0x01, 0x02, 0x04, 0x00, 0x00, 0x31, 0x14, 0x01, // 96 '`'
    0x20, 0x54, 0x54, 0x78, 0x00, 0x41, 0x81, 0x45, // 97 'a'
    0x7f, 0x44, 0x44, 0x38, 0x00, 0x44, 0x80, 0x25, // 98 'b'
    0x38, 0x44, 0x44, 0x44, 0x00, 0x41, 0x80, 0x04, // 99 'c'
    0x38, 0x44, 0x44, 0x7f, 0x00, 0x41, 0x80, 0x45, // 100 'd'
    0x38, 0x54, 0x54, 0x58, 0x00, 0x41, 0x91, 0x45, // 101 'e'
    0x08, 0x7e, 0x09, 0x00, 0x00, 0x38, 0x4a, 0x09, // 102 'f'
    0x18, 0xa4, 0xa4, 0x7c, 0x00, 0x41, 0x91, 0x45, // 103 'g'
    0x7f, 0x04, 0x04, 0x78, 0x00, 0x44, 0x80, 0x25, // 104 'h'
    0x7d, 0x00, 0x00, 0x00, 0x00, 0x14, 0x00, 0x01, // 105 'i'
    0x80, 0x7d, 0x00, 0x00, 0x00, 0x21, 0x40, 0x01, // 106 'j'
    0x7f, 0x10, 0x28, 0x44, 0x00, 0x44, 0x92, 0x25, // 107 'k'
    0x3f, 0x40, 0x00, 0x00, 0x00, 0x24, 0xa0, 0x05, // 108 'l'
    0x7c, 0x04, 0x38, 0x04, 0x78, 0x54, 0x00, 0x14, // 109 'm'
    0x7c, 0x04, 0x04, 0x78, 0x00, 0x44, 0x80, 0x25, // 110 'n'
    0x38, 0x44, 0x44, 0x38, 0x00, 0x41, 0x91, 0x45, // 111 'o'
    0xfc, 0x24, 0x24, 0x18, 0x00, 0x41, 0x91, 0x45, // 112 'p'
    0x18, 0x24, 0x24, 0xfc, 0x00, 0x41, 0x91, 0x45, // 113 'q'
    0x7c, 0x04, 0x00, 0x00, 0x00, 0x24, 0x80, 0x05, // 114 'r'
    0x48, 0x54, 0x54, 0x24, 0x00, 0x41, 0x84, 0x25, // 115 's'
    0x04, 0x3f, 0x44, 0x00, 0x00, 0x38, 0x4a, 0x09, // 116 't'
    0x3c, 0x40, 0x40, 0x7c, 0x00, 0x41, 0x08, 0x45, // 117 'u'
    0x1c, 0x20, 0x40, 0x20, 0x1c, 0x51, 0x11, 0x14, // 118 'v'
    0x3c, 0x40, 0x38, 0x40, 0x7c, 0x54, 0x20, 0x04, // 119 'w'
    0x44, 0x28, 0x10, 0x28, 0x44, 0x51, 0x11, 0x14, // 120 'x'
    0x9c, 0xa0, 0xa0, 0x7c, 0x00, 0x41, 0x81, 0x45, // 121 'y'
    0x44, 0x64, 0x54, 0x4c, 0x44, 0x50, 0x22, 0x20, // 122 'z'
    0x08, 0x36, 0x41, 0x00, 0x00, 0x31, 0x14, 0x01, // 123 '{'
    0x00, 0x7f, 0x00, 0x00, 0x00, 0x30, 0x40, 0x01, // 124 '|'
    0x41, 0x36, 0x08, 0x00, 0x00, 0x31, 0x14, 0x01, // 125 '}'
    0x08, 0x04, 0x08, 0x10, 0x08, 0x50, 0x11, 0x40, // 126 '~'
    0xaa, 0x55, 0xaa, 0x55, 0xaa, 0x50, 0x00, 0x00, // 127 checker
];
