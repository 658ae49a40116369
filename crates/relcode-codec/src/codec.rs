use relcode_catalog::{Answers, Catalog};
use serde::Serialize;

use crate::alphabet::{self, SYMBOL_BITS};
use crate::avatar::{is_avatar, Avatar};
use crate::block::{self, Compressed};
use crate::error::{DecodeError, Result};

/// Answers and avatar recovered from a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub answers: Answers,
    pub avatar: Avatar,
}

/// Diagnostic breakdown of a code, produced by [`inspect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub avatar: Avatar,
    /// Whether the code carried its own avatar glyph.
    pub avatar_explicit: bool,
    /// Values of the data glyphs, in order.
    pub data_indices: Vec<u16>,
    /// Value of the trailing checksum glyph, if the code had a payload.
    pub checksum: Option<u16>,
    /// Bits carried by the data glyphs, padding included.
    pub bit_len: usize,
    /// Block headers read while expanding.
    pub blocks_read: usize,
    /// Full flat vector, one value per catalog slot.
    pub slots: Vec<u8>,
    pub answers: Answers,
}

impl Inspection {
    pub fn nonzero_slots(&self) -> usize {
        self.slots.iter().filter(|&&value| value != 0).count()
    }
}

/// Encoder/decoder bound to one catalog.
#[derive(Debug, Clone, Copy)]
pub struct Codec<'c> {
    catalog: &'c Catalog,
}

impl<'c> Codec<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn encode(&self, answers: &Answers, avatar: Avatar) -> String {
        encode(self.catalog, answers, avatar)
    }

    pub fn decode(&self, code: &str) -> Result<Decoded> {
        decode(self.catalog, code)
    }

    pub fn inspect(&self, code: &str) -> Result<Inspection> {
        inspect(self.catalog, code)
    }
}

impl Default for Codec<'static> {
    fn default() -> Self {
        Self::new(Catalog::embedded())
    }
}

/// Encode answers into a shareable code.
///
/// Wire format:
/// ```text
/// ┌──────────┬──────────────────────────┬────────────┐
/// │ Avatar   │ Data glyphs              │ Checksum   │
/// │ 1 glyph  │ 10 bits each, MSB first  │ 1 glyph    │
/// └──────────┴──────────────────────────┴────────────┘
/// ```
///
/// If every value is zero the code is just the avatar glyph.
pub fn encode(catalog: &Catalog, answers: &Answers, avatar: Avatar) -> String {
    let flat: Vec<u8> = catalog
        .flatten(answers)
        .into_iter()
        .map(block::coerce)
        .collect();

    let Some(Compressed {
        symbols,
        bit_len,
        blocks,
    }) = block::compress(&flat)
    else {
        tracing::debug!(slots = flat.len(), "encoded empty answer set");
        return avatar.to_string();
    };

    let checksum = alphabet::checksum(&symbols);
    let mut code = String::with_capacity((symbols.len() + 2) * 4);
    code.push(avatar.glyph());
    code.extend(symbols.iter().map(|&index| alphabet::glyph(index)));
    code.push(alphabet::glyph(checksum));

    tracing::debug!(
        slots = flat.len(),
        blocks,
        bit_len,
        symbols = symbols.len(),
        "encoded answers"
    );

    code
}

/// Decode a code back into answers and avatar.
pub fn decode(catalog: &Catalog, code: &str) -> Result<Decoded> {
    let inspection = inspect(catalog, code)?;
    Ok(Decoded {
        answers: inspection.answers,
        avatar: inspection.avatar,
    })
}

/// Decode a code and report how it was read.
pub fn inspect(catalog: &Catalog, code: &str) -> Result<Inspection> {
    let glyphs = sanitize(code);
    if glyphs.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let (avatar, payload) = match glyphs.split_first() {
        Some((&first, rest)) if is_avatar(first) => (Avatar::new(first), rest),
        _ => (None, glyphs.as_slice()),
    };
    let avatar_explicit = avatar.is_some();
    let avatar = avatar.unwrap_or_default();

    if payload.is_empty() {
        return Ok(Inspection {
            avatar,
            avatar_explicit,
            data_indices: Vec::new(),
            checksum: None,
            bit_len: 0,
            blocks_read: 0,
            slots: vec![0; catalog.total_slots()],
            answers: Answers::new(),
        });
    }

    let (&checksum_glyph, data) = payload
        .split_last()
        .ok_or(DecodeError::MissingChecksum)?;

    let data_indices = data
        .iter()
        .map(|&glyph| alphabet::index_of(glyph).ok_or(DecodeError::UnknownSymbol(glyph)))
        .collect::<Result<Vec<u16>>>()?;

    let embedded = alphabet::index_of(checksum_glyph)
        .ok_or(DecodeError::InvalidChecksumSymbol(checksum_glyph))?;
    let computed = alphabet::checksum(&data_indices);
    if computed != embedded {
        tracing::debug!(computed, embedded, "checksum mismatch");
        return Err(DecodeError::ChecksumMismatch { computed, embedded });
    }

    let expanded = block::expand(&data_indices, catalog.total_slots());
    let answers = catalog.unflatten(&expanded.values);

    tracing::debug!(
        symbols = data_indices.len(),
        blocks = expanded.blocks_read,
        questions = answers.len(),
        "decoded code"
    );

    Ok(Inspection {
        avatar,
        avatar_explicit,
        bit_len: data_indices.len() * SYMBOL_BITS as usize,
        data_indices,
        checksum: Some(embedded),
        blocks_read: expanded.blocks_read,
        slots: expanded.values,
        answers,
    })
}

/// Strip characters that chat apps and typing add to pasted codes.
///
/// Removes whitespace (newlines included), variation selectors
/// U+FE00..=U+FE0F, and zero-width characters.
pub fn sanitize(code: &str) -> Vec<char> {
    code.chars().filter(|&c| !is_transport_noise(c)).collect()
}

fn is_transport_noise(c: char) -> bool {
    c.is_whitespace()
        || ('\u{FE00}'..='\u{FE0F}').contains(&c)
        || matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::alphabet::ALPHABET;

    fn five_option_catalog() -> Catalog {
        Catalog::from_json_str(
            r#"{"modules": [{"id": "m", "name": "M", "questions": [
                {"id": "q", "title": "Q", "options": ["a", "b", "c", "d", "e"]}
            ]}]}"#,
        )
        .unwrap()
    }

    fn answers(entries: &[(&str, &[u8])]) -> Answers {
        entries
            .iter()
            .map(|(id, values)| (id.to_string(), values.to_vec()))
            .collect()
    }

    #[test]
    fn single_core_option_scenario() {
        let catalog = five_option_catalog();
        let input = answers(&[("q", &[0, 0, 4, 0, 0])]);

        let code = encode(&catalog, &input, Avatar::DEFAULT);
        let expected: String = ['🌏', ALPHABET[516], ALPHABET[0], ALPHABET[516]]
            .into_iter()
            .collect();
        assert_eq!(code, expected);
        assert_eq!(code.chars().count(), 4);

        let decoded = decode(&catalog, &code).unwrap();
        assert_eq!(decoded.answers, input);
        assert_eq!(decoded.avatar, Avatar::DEFAULT);
    }

    #[test]
    fn all_zero_encodes_to_bare_avatar() {
        let catalog = five_option_catalog();
        let fox = Avatar::new('🦊').unwrap();

        assert_eq!(encode(&catalog, &Answers::new(), fox), "🦊");
        assert_eq!(
            encode(&catalog, &answers(&[("q", &[0, 0, 0, 0, 0])]), fox),
            "🦊"
        );
    }

    #[test]
    fn bare_avatar_decodes_to_empty_answers() {
        let catalog = five_option_catalog();
        let decoded = decode(&catalog, "🐼").unwrap();
        assert!(decoded.answers.is_empty());
        assert_eq!(decoded.avatar.glyph(), '🐼');
    }

    #[test]
    fn out_of_range_values_encode_as_zero() {
        let catalog = five_option_catalog();
        let code = encode(&catalog, &answers(&[("q", &[6, 7, 200, 0, 0])]), Avatar::DEFAULT);
        assert_eq!(code, "🌏");

        let code = encode(&catalog, &answers(&[("q", &[5, 9, 0, 0, 0])]), Avatar::DEFAULT);
        let decoded = decode(&catalog, &code).unwrap();
        assert_eq!(decoded.answers, answers(&[("q", &[5, 0, 0, 0, 0])]));
    }

    #[test]
    fn avatar_does_not_change_payload() {
        let catalog = Catalog::embedded();
        let input = answers(&[("core_form", &[3, 0, 4, 0, 1, 2])]);

        let globe = encode(catalog, &input, Avatar::DEFAULT);
        let cat = encode(catalog, &input, Avatar::new('🐱').unwrap());

        let globe_tail: String = globe.chars().skip(1).collect();
        let cat_tail: String = cat.chars().skip(1).collect();
        assert_eq!(globe_tail, cat_tail);
    }

    #[test]
    fn missing_avatar_defaults() {
        let catalog = five_option_catalog();
        let code = encode(&catalog, &answers(&[("q", &[1, 0, 0, 0, 0])]), Avatar::DEFAULT);
        let without_avatar: String = code.chars().skip(1).collect();

        let inspection = inspect(&catalog, &without_avatar).unwrap();
        assert!(!inspection.avatar_explicit);
        assert_eq!(inspection.avatar, Avatar::DEFAULT);
        assert_eq!(inspection.answers, answers(&[("q", &[1, 0, 0, 0, 0])]));
    }

    #[test]
    fn whitespace_and_invisible_characters_are_ignored() {
        let catalog = Catalog::embedded();
        let input = answers(&[("core_time", &[0, 4, 0, 0, 3]), ("living_pets", &[1, 0, 0])]);
        let code = encode(catalog, &input, Avatar::new('🦄').unwrap());

        let noisy: String = code
            .chars()
            .flat_map(|c| [c, '\u{FE0F}', ' ', '\n', '\u{200B}'])
            .collect();
        let decoded = decode(catalog, &format!("  \r\n{noisy}\t")).unwrap();
        assert_eq!(decoded.answers, input);
        assert_eq!(decoded.avatar.glyph(), '🦄');
    }

    #[test]
    fn empty_input_is_rejected() {
        let catalog = five_option_catalog();
        assert_eq!(decode(&catalog, ""), Err(DecodeError::EmptyInput));
        assert_eq!(
            decode(&catalog, " \n\u{FE0F}\u{200D} "),
            Err(DecodeError::EmptyInput)
        );
    }

    #[test]
    fn unknown_data_symbol_is_named() {
        let catalog = five_option_catalog();
        let code = format!("🌏x{}{}", ALPHABET[3], ALPHABET[3]);
        assert_eq!(decode(&catalog, &code), Err(DecodeError::UnknownSymbol('x')));
    }

    #[test]
    fn invalid_checksum_symbol_is_rejected() {
        let catalog = five_option_catalog();
        let code = format!("🌏{}z", ALPHABET[3]);
        assert_eq!(
            decode(&catalog, &code),
            Err(DecodeError::InvalidChecksumSymbol('z'))
        );
    }

    #[test]
    fn wrong_checksum_is_rejected() {
        let catalog = five_option_catalog();
        let code = format!("🌏{}{}{}", ALPHABET[516], ALPHABET[0], ALPHABET[515]);
        assert_eq!(
            decode(&catalog, &code),
            Err(DecodeError::ChecksumMismatch {
                computed: 516,
                embedded: 515
            })
        );
    }

    #[test]
    fn truncated_code_is_rejected() {
        let catalog = Catalog::embedded();
        let input = answers(&[("core_form", &[4, 3, 2, 1, 0, 4]), ("communication_privacy", &[0, 0, 3])]);
        let code = encode(catalog, &input, Avatar::DEFAULT);

        let glyphs: Vec<char> = code.chars().collect();
        let truncated: String = glyphs[..glyphs.len() - 1].iter().collect();
        assert!(decode(catalog, &truncated).is_err());
    }

    #[test]
    fn shorter_catalog_code_is_zero_filled() {
        let short = five_option_catalog();
        let code = encode(&short, &answers(&[("q", &[2, 2, 0, 0, 0])]), Avatar::DEFAULT);

        let catalog = Catalog::embedded();
        let inspection = inspect(catalog, &code).unwrap();
        assert_eq!(inspection.slots.len(), catalog.total_slots());
        assert_eq!(inspection.nonzero_slots(), 2);
        assert_eq!(inspection.answers, answers(&[("core_form", &[2, 2, 0, 0, 0, 0])]));
    }

    #[test]
    fn inspect_reports_layout() {
        let catalog = five_option_catalog();
        let code = encode(&catalog, &answers(&[("q", &[0, 0, 4, 0, 0])]), Avatar::DEFAULT);

        let inspection = inspect(&catalog, &code).unwrap();
        assert!(inspection.avatar_explicit);
        assert_eq!(inspection.data_indices, vec![516, 0]);
        assert_eq!(inspection.checksum, Some(516));
        assert_eq!(inspection.bit_len, 20);
        assert_eq!(inspection.blocks_read, 1);
        assert_eq!(inspection.slots, vec![0, 0, 4, 0, 0]);
    }

    #[test]
    fn codec_binds_catalog() {
        let codec = Codec::default();
        let input = answers(&[("commitment_children", &[0, 0, 0, 4, 0])]);
        let code = codec.encode(&input, Avatar::DEFAULT);
        assert_eq!(codec.decode(&code).unwrap().answers, input);
        assert_eq!(codec.catalog().total_slots(), 85);
    }
}
