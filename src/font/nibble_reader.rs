/// Nibble Reader - MSB-first bit reading over a packed glyph record
///
/// The metadata half of a Z1 record packs the column count, the column
/// tags and the alignment field as consecutive 4-bit values, high nibble
/// first. Reads past the end of the slice yield zero bits.
#[derive(Debug)]
pub struct NibbleReader<'a> {
    data: &'a [u8],
    pos: usize,
    bit_buffer: u8,
    bits_left: u32,
}

impl<'a> NibbleReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            bit_buffer: 0,
            bits_left: 0,
        }
    }

    pub fn from_offset(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            pos: offset.min(data.len()),
            bit_buffer: 0,
            bits_left: 0,
        }
    }

    /// Bit offset from the start of the slice
    pub fn bit_position(&self) -> usize {
        self.pos * 8 - self.bits_left as usize
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.data.len() && self.bits_left == 0
    }

    // ========== Bit-level reads ==========

    /// Read up to 8 bits as an unsigned value (MSB first)
    pub fn read_bits(&mut self, count: u32) -> u8 {
        debug_assert!(count <= 8);
        let mut result: u8 = 0;
        let mut remaining = count;

        while remaining > 0 {
            if self.bits_left == 0 {
                if self.pos >= self.data.len() {
                    return (u16::from(result) << remaining) as u8;
                }
                self.bit_buffer = self.data[self.pos];
                self.pos += 1;
                self.bits_left = 8;
            }

            let take = remaining.min(self.bits_left);
            let shift = self.bits_left - take;
            let mask = (((1u16 << take) - 1) << shift) as u8;
            let bits = (self.bit_buffer & mask) >> shift;

            result = ((u16::from(result) << take) as u8) | bits;
            self.bits_left -= take;
            remaining -= take;
        }

        result
    }

    pub fn read_nibble(&mut self) -> u8 {
        self.read_bits(4)
    }

    /// Split the next nibble into its high and low 2-bit halves
    pub fn read_bit_pairs(&mut self) -> (u8, u8) {
        let hi = self.read_bits(2);
        let lo = self.read_bits(2);
        (hi, lo)
    }
}
