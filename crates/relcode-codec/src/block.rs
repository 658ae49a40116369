//! Sparse block compression of the flat answer vector.
//!
//! The vector is cut into blocks of [`BLOCK_SIZE`] slots (the last one may
//! be shorter). An all-zero block is written as a single `0` bit; any other
//! block as a `1` bit followed by [`VALUE_BITS`] bits per slot. Blocks after
//! the last non-zero block are dropped.

use crate::bits::{SymbolReader, SymbolWriter};

/// Slots per block.
pub const BLOCK_SIZE: usize = 5;

/// Bits per slot value.
pub const VALUE_BITS: u32 = 3;

/// Highest value encoded as-is. Larger values are sent as 0.
///
/// One level above `Core` (4) is reserved for a future attitude.
pub const MAX_ENCODED_VALUE: u8 = 5;

/// Clamp an out-of-range attitude to 0.
pub fn coerce(value: u8) -> u8 {
    if value > MAX_ENCODED_VALUE {
        0
    } else {
        value
    }
}

/// Index of the last block holding a non-zero value.
pub fn last_active_block(flat: &[u8]) -> Option<usize> {
    flat.chunks(BLOCK_SIZE)
        .rposition(|block| block.iter().any(|&value| value != 0))
}

/// Result of block compression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    /// 10-bit symbol values, zero-padded.
    pub symbols: Vec<u16>,
    /// Bits written before padding.
    pub bit_len: usize,
    /// Blocks written (including all-zero blocks before the last active one).
    pub blocks: usize,
}

/// Compress a flat vector. Returns `None` if every value is zero.
pub fn compress(flat: &[u8]) -> Option<Compressed> {
    let last = last_active_block(flat)?;
    let mut writer = SymbolWriter::new();

    for block in flat.chunks(BLOCK_SIZE).take(last + 1) {
        if block.iter().all(|&value| value == 0) {
            writer.write_bit(false);
            continue;
        }
        writer.write_bit(true);
        for &value in block {
            writer.write_bits(u32::from(value), VALUE_BITS);
        }
    }

    let bit_len = writer.bit_len();
    Some(Compressed {
        symbols: writer.finish(),
        bit_len,
        blocks: last + 1,
    })
}

/// Result of block expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expanded {
    /// Exactly `total_slots` values.
    pub values: Vec<u8>,
    /// Block headers consumed from the stream.
    pub blocks_read: usize,
}

/// Expand symbols back into a flat vector of `total_slots` values.
///
/// Stops when the stream runs out or the vector is full. Values cut off
/// mid-block read as 0 and unsent trailing slots are zero-filled, so a
/// stream written for a shorter catalog still yields a full-length vector.
pub fn expand(symbols: &[u16], total_slots: usize) -> Expanded {
    let mut reader = SymbolReader::new(symbols);
    let mut values = Vec::with_capacity(total_slots);
    let mut blocks_read = 0usize;

    while values.len() < total_slots {
        let Some(header) = reader.read_bit() else {
            break;
        };
        blocks_read += 1;

        let block_len = BLOCK_SIZE.min(total_slots - values.len());
        if header {
            for _ in 0..block_len {
                let value = reader.read_bits(VALUE_BITS).unwrap_or(0);
                values.push(value as u8);
            }
        } else {
            values.resize(values.len() + block_len, 0);
        }
    }

    values.resize(total_slots, 0);
    Expanded {
        values,
        blocks_read,
    }
}
