use rand::Rng;

pub const STREAM_ID_LENGTH: usize = 20;
pub const STREAM_ID_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Random alphanumeric stream id. Not checked against existing ids.
pub fn generate_id() -> String {
    generate_id_with(STREAM_ID_LENGTH, STREAM_ID_ALPHABET)
}

/// Random id of `length` characters drawn from `alphabet`, repeats allowed.
pub fn generate_id_with(length: usize, alphabet: &str) -> String {
    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.is_empty() {
        return String::new();
    }
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| symbols[rng.gen_range(0..symbols.len())])
        .collect()
}

#[cfg(test)]
mod stream_id_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_generate_a_twenty_character_alphanumeric_id() {
        let id = generate_id();
        assert_eq!(id.len(), STREAM_ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[rstest]
    fn it_should_generate_distinct_ids() {
        assert_ne!(generate_id(), generate_id());
    }

    #[rstest]
    #[case(0, "ab")]
    #[case(5, "x")]
    #[case(32, "01")]
    fn it_should_draw_only_from_the_given_alphabet(#[case] length: usize, #[case] alphabet: &str) {
        let id = generate_id_with(length, alphabet);
        assert_eq!(id.chars().count(), length);
        assert!(id.chars().all(|c| alphabet.contains(c)));
    }

    #[rstest]
    fn it_should_return_empty_for_an_empty_alphabet() {
        assert_eq!(generate_id_with(10, ""), "");
    }
}
