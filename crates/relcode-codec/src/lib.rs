//! Checksummed emoji codec for sparse questionnaire answers.
//!
//! A code is a single string built from:
//! - An optional avatar glyph identifying the profile owner
//! - Data glyphs, each carrying 10 bits of a block-compressed bitstream
//! - One trailing checksum glyph (sum of data values modulo the alphabet size)
//!
//! Answers are flattened into catalog slot order, cut into blocks of five
//! 3-bit values, and all-zero blocks collapse to a single header bit.
//! Trailing all-zero blocks are not transmitted at all.

pub mod alphabet;
pub mod avatar;
pub mod bits;
pub mod block;
pub mod codec;
pub mod error;

pub use alphabet::{checksum, glyph, index_of, ALPHABET, ALPHABET_LEN, SYMBOL_BITS};
pub use avatar::{is_avatar, Avatar, AVATARS, DEFAULT_AVATAR};
pub use block::{BLOCK_SIZE, MAX_ENCODED_VALUE, VALUE_BITS};
pub use codec::{decode, encode, inspect, sanitize, Codec, Decoded, Inspection};
pub use error::{AvatarError, DecodeError, Result};
pub use relcode_catalog::{Answers, Catalog};
