//! MSB-first bit packing into 10-bit symbol values.
//!
//! `SymbolWriter` collects bits and emits a symbol every [`SYMBOL_BITS`]
//! bits; `finish` pads the last symbol with zero bits. `SymbolReader` walks
//! the same symbols bit by bit and reports exhaustion instead of failing.

use crate::alphabet::SYMBOL_BITS;

/// Packs bits MSB-first into symbol values.
///
/// # Invariants
/// - `pending` holds fewer than `SYMBOL_BITS` bits
#[derive(Debug, Clone, Default)]
pub struct SymbolWriter {
    symbols: Vec<u16>,
    pending: u16,
    pending_bits: u32,
    bit_len: usize,
}

impl SymbolWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_bit(&mut self, bit: bool) {
        self.pending = (self.pending << 1) | u16::from(bit);
        self.pending_bits += 1;
        self.bit_len += 1;

        if self.pending_bits == SYMBOL_BITS {
            self.symbols.push(self.pending);
            self.pending = 0;
            self.pending_bits = 0;
        }
    }

    /// Write the lowest `count` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, count: u32) {
        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1 == 1);
        }
    }

    /// Number of bits written, excluding padding.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Pad the final symbol with zero bits and return all symbols.
    pub fn finish(mut self) -> Vec<u16> {
        if self.pending_bits > 0 {
            self.symbols
                .push(self.pending << (SYMBOL_BITS - self.pending_bits));
        }
        self.symbols
    }
}

/// Reads bits MSB-first from symbol values.
#[derive(Debug, Clone)]
pub struct SymbolReader<'a> {
    symbols: &'a [u16],
    position: usize,
}

impl<'a> SymbolReader<'a> {
    pub fn new(symbols: &'a [u16]) -> Self {
        Self {
            symbols,
            position: 0,
        }
    }

    /// Total bits available, padding included.
    pub fn bit_len(&self) -> usize {
        self.symbols.len() * SYMBOL_BITS as usize
    }

    pub fn bits_remaining(&self) -> usize {
        self.bit_len() - self.position
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// Read one bit, or `None` when the stream is exhausted.
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.is_empty() {
            return None;
        }
        let bits = SYMBOL_BITS as usize;
        let symbol = self.symbols[self.position / bits];
        let shift = bits - 1 - self.position % bits;
        self.position += 1;
        Some((symbol >> shift) & 1 == 1)
    }

    /// Read `count` bits as one value.
    ///
    /// Returns `None` without consuming anything if fewer than `count` bits
    /// remain.
    pub fn read_bits(&mut self, count: u32) -> Option<u32> {
        if count as usize > self.bits_remaining() {
            return None;
        }
        let mut value = 0u32;
        for _ in 0..count {
            let bit = self.read_bit()?;
            value = (value << 1) | u32::from(bit);
        }
        Some(value)
    }
}
