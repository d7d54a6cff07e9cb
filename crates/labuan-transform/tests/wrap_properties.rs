//! Property tests for greedy word wrapping.

use labuan_transform::split_string;
use proptest::prelude::*;

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z0-9]{1,12}", 1..20)
}

proptest! {
    #[test]
    fn rejoining_chunks_restores_the_text(words in arb_words(), max_len in 1usize..60) {
        let text = words.join(" ");
        let chunks = split_string(&text, " ", max_len);
        prop_assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn only_single_words_exceed_the_width(words in arb_words(), max_len in 1usize..60) {
        let chunks = split_string(&words.join(" "), " ", max_len);
        for chunk in &chunks {
            prop_assert!(!chunk.is_empty());
            if chunk.chars().count() > max_len {
                prop_assert!(!chunk.contains(' '));
            }
        }
    }

    #[test]
    fn chunks_are_packed_greedily(words in arb_words(), max_len in 1usize..60) {
        let chunks = split_string(&words.join(" "), " ", max_len);
        for pair in chunks.windows(2) {
            let next_word = pair[1].split(' ').next().unwrap_or_default();
            let widened = pair[0].chars().count() + 1 + next_word.chars().count();
            prop_assert!(widened > max_len);
        }
    }
}
