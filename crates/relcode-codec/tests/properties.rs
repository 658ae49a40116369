use proptest::prelude::*;
use relcode_codec::{
    decode, encode, index_of, Answers, Avatar, Catalog, DecodeError, ALPHABET, AVATARS,
};

fn catalog() -> &'static Catalog {
    Catalog::embedded()
}

fn flat_vector() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![6 => Just(0u8), 4 => 1u8..=4],
        catalog().total_slots(),
    )
}

fn avatar() -> impl Strategy<Value = Avatar> {
    (0..AVATARS.len()).prop_map(|index| Avatar::new(AVATARS[index]).unwrap())
}

fn non_empty_answers() -> impl Strategy<Value = Answers> {
    flat_vector()
        .prop_filter("needs at least one answer", |flat| {
            flat.iter().any(|&value| value != 0)
        })
        .prop_map(|flat| catalog().unflatten(&flat))
}

proptest! {
    #[test]
    fn decode_reverses_encode(flat in flat_vector(), avatar in avatar()) {
        let answers = catalog().unflatten(&flat);
        let code = encode(catalog(), &answers, avatar);
        let decoded = decode(catalog(), &code).unwrap();

        prop_assert_eq!(decoded.answers, answers);
        prop_assert_eq!(decoded.avatar, avatar);
    }

    #[test]
    fn encoding_is_deterministic(answers in non_empty_answers(), avatar in avatar()) {
        prop_assert_eq!(
            encode(catalog(), &answers, avatar),
            encode(catalog(), &answers, avatar)
        );
    }

    #[test]
    fn noise_does_not_change_result(
        answers in non_empty_answers(),
        noise in proptest::collection::vec(
            prop_oneof![Just(' '), Just('\n'), Just('\u{FE0F}'), Just('\u{200B}'), Just('\t')],
            1..8,
        ),
        positions in proptest::collection::vec(any::<prop::sample::Index>(), 1..8),
    ) {
        let code = encode(catalog(), &answers, Avatar::DEFAULT);
        let mut glyphs: Vec<char> = code.chars().collect();
        for (noise, position) in noise.iter().zip(positions.iter()) {
            let at = position.index(glyphs.len() + 1);
            glyphs.insert(at, *noise);
        }
        let noisy: String = glyphs.into_iter().collect();

        prop_assert_eq!(decode(catalog(), &noisy).unwrap().answers, answers);
    }

    #[test]
    fn replacing_a_data_glyph_is_detected(
        answers in non_empty_answers(),
        position in any::<prop::sample::Index>(),
        offset in 1usize..ALPHABET.len(),
    ) {
        let code = encode(catalog(), &answers, Avatar::DEFAULT);
        let mut glyphs: Vec<char> = code.chars().collect();
        // Skip the avatar, leave the checksum alone.
        let at = 1 + position.index(glyphs.len() - 2);
        let current = index_of(glyphs[at]).unwrap() as usize;
        glyphs[at] = ALPHABET[(current + offset) % ALPHABET.len()];
        let tampered: String = glyphs.into_iter().collect();

        let result = decode(catalog(), &tampered);
        let mismatch = matches!(result, Err(DecodeError::ChecksumMismatch { .. }));
        prop_assert!(mismatch, "expected checksum mismatch, got {:?}", result);
    }

    #[test]
    fn dropping_or_duplicating_a_data_glyph_is_detected(
        answers in non_empty_answers(),
        position in any::<prop::sample::Index>(),
        duplicate in any::<bool>(),
    ) {
        let code = encode(catalog(), &answers, Avatar::DEFAULT);
        let mut glyphs: Vec<char> = code.chars().collect();
        let at = 1 + position.index(glyphs.len() - 2);
        // A zero-valued glyph adds nothing to the checksum sum.
        prop_assume!(index_of(glyphs[at]) != Some(0));

        if duplicate {
            glyphs.insert(at, glyphs[at]);
        } else {
            glyphs.remove(at);
        }
        let tampered: String = glyphs.into_iter().collect();

        prop_assert!(decode(catalog(), &tampered).is_err());
    }
}

#[test]
fn empty_answers_encode_to_avatar_only() {
    for avatar in Avatar::all() {
        assert_eq!(encode(catalog(), &Answers::new(), avatar), avatar.to_string());
    }
}

#[test]
fn trailing_zero_slots_add_no_glyphs() {
    let short = Catalog::from_json_str(
        r#"{"modules": [{"id": "m", "name": "M", "questions": [
            {"id": "q", "title": "Q", "options": ["a", "b", "c", "d", "e"]}
        ]}]}"#,
    )
    .unwrap();
    let long = Catalog::from_json_str(
        r#"{"modules": [{"id": "m", "name": "M", "questions": [
            {"id": "q", "title": "Q", "options": ["a", "b", "c", "d", "e"]},
            {"id": "r", "title": "R", "options": ["a", "b", "c", "d", "e", "f", "g"]},
            {"id": "s", "title": "S", "options": ["a", "b", "c", "d", "e", "f", "g", "h", "i"]}
        ]}]}"#,
    )
    .unwrap();

    let mut answers = Answers::new();
    answers.insert("q".to_string(), vec![1, 0, 3, 0, 4]);

    let short_code = encode(&short, &answers, Avatar::DEFAULT);
    let long_code = encode(&long, &answers, Avatar::DEFAULT);
    assert!(long_code.chars().count() <= short_code.chars().count());
    assert_eq!(decode(&long, &long_code).unwrap().answers, answers);
}
