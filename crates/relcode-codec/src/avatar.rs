//! Avatar glyphs.
//!
//! An avatar is an optional one-glyph prefix naming whose profile a code
//! belongs to. It never takes part in the payload or the checksum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AvatarError;

/// Recognised avatar glyphs, in picker order.
pub const AVATARS: [char; 20] = [
    '🌏', '🦊', '🐰', '🐱', '🐶', '🦁', '🐯', '🐼', '🐻', '🦄', '🐳', '🦈', '🐣', '🦋', '🌹',
    '🌻', '🌼', '🌱', '🌳', '🍁',
];

/// Avatar used when none is given or recognised.
pub const DEFAULT_AVATAR: char = '🌏';

/// Returns true if the glyph is one of [`AVATARS`].
pub fn is_avatar(glyph: char) -> bool {
    AVATARS.contains(&glyph)
}

/// A validated avatar glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Avatar(char);

impl Avatar {
    pub const DEFAULT: Avatar = Avatar(DEFAULT_AVATAR);

    /// Wrap a glyph if it is a recognised avatar.
    pub fn new(glyph: char) -> Option<Self> {
        is_avatar(glyph).then_some(Self(glyph))
    }

    pub fn glyph(self) -> char {
        self.0
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }

    /// All avatars in picker order.
    pub fn all() -> impl Iterator<Item = Avatar> {
        AVATARS.into_iter().map(Avatar)
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Avatar {
    type Err = AvatarError;

    /// Parses a single avatar glyph, ignoring surrounding whitespace and a
    /// trailing emoji variation selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut glyphs = s
            .trim()
            .chars()
            .filter(|&c| !('\u{FE00}'..='\u{FE0F}').contains(&c));

        match (glyphs.next(), glyphs.next()) {
            (Some(glyph), None) => Avatar::new(glyph).ok_or_else(|| AvatarError(s.to_string())),
            _ => Err(AvatarError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Avatar {
    type Error = AvatarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Avatar> for String {
    fn from(avatar: Avatar) -> Self {
        avatar.0.to_string()
    }
}
