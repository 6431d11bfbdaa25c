use proptest::prelude::*;

use bip39_converter::{hash_index, index_to_pattern, normalize, Dictionary};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn hash_index_is_deterministic(word in ".*", passphrase in ".*") {
        prop_assert_eq!(hash_index(&word, &passphrase), hash_index(&word, &passphrase));
    }

    #[test]
    fn hash_index_stays_in_range(word in ".*", passphrase in ".*") {
        prop_assert!(hash_index(&word, &passphrase) < 2048);
    }

    #[test]
    fn hash_index_only_sees_the_concatenation(
        word in "[a-z]{1,16}",
        passphrase in "[a-z]{0,16}"
    ) {
        let joined = format!("{}{}", word, passphrase);
        prop_assert_eq!(hash_index(&word, &passphrase), hash_index(&joined, ""));
    }

    #[test]
    fn patterns_are_eleven_binary_digits(index in 0u16..2048) {
        let pattern = index_to_pattern(index);
        prop_assert_eq!(pattern.len(), 11);
        prop_assert!(pattern.chars().all(|c| c == '0' || c == '1'));
    }

    #[test]
    fn every_index_resolves_in_the_bundled_dictionary(index in 0u16..2048) {
        let dictionary = Dictionary::bundled().unwrap();
        prop_assert!(dictionary.resolve(&index_to_pattern(index)).is_ok());
    }

    #[test]
    fn normalize_is_idempotent(text in "[a-zA-Z0-9 \t\n.,;:'!?-]{0,128}") {
        let once = normalize(&text);
        let again = normalize(&once.join(" "));
        prop_assert_eq!(once, again);
    }

    #[test]
    fn normalized_tokens_are_lowercase_alphabetic(text in ".*") {
        for token in normalize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(char::is_alphabetic));
            prop_assert_eq!(token.to_lowercase(), token);
        }
    }
}
