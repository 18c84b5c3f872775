use std::collections::HashMap;

use regex::Regex;

pub const MAX_CONCEPTS: usize = 15;
const MIN_TOKEN_LEN: usize = 4;

const STOP_WORDS: [&str; 12] = [
    "the", "and", "was", "for", "that", "with", "from", "this", "have", "were", "which", "their",
];

/// Ranks the salient terms of `text` by occurrence count.
///
/// Tokens are lower-cased alphanumeric runs; anything of length <= 3 or in
/// the stop-word set is discarded. Returns at most `MAX_CONCEPTS` tokens in
/// non-increasing frequency order, ties broken by first appearance. Empty
/// when nothing survives filtering; the caller decides what that means.
pub fn extract_key_concepts(text: &str) -> Vec<String> {
    let word_pattern = Regex::new(r"\w+").expect("word pattern is valid");

    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, u32> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for token in word_pattern.find_iter(&lowered).map(|m| m.as_str()) {
        if token.len() < MIN_TOKEN_LEN || STOP_WORDS.contains(&token) {
            continue;
        }

        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // Stable sort on count only keeps first-seen order within ties.
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(MAX_CONCEPTS);

    order.into_iter().map(|token| token.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_concepts() {
        assert!(extract_key_concepts("").is_empty());
    }

    #[test]
    fn stop_words_and_short_tokens_are_filtered() {
        assert!(extract_key_concepts("the and was for a an of to it").is_empty());
        assert!(extract_key_concepts("cat dog owl").is_empty());
    }

    #[test]
    fn at_most_fifteen_concepts_are_returned() {
        let text = (0..40).map(|i| format!("concept{:02}", i)).collect::<Vec<_>>().join(" ");
        let concepts = extract_key_concepts(&text);
        assert_eq!(concepts.len(), MAX_CONCEPTS);
    }

    #[test]
    fn concepts_are_sorted_by_descending_frequency() {
        let concepts =
            extract_key_concepts("mitosis mitosis mitosis osmosis osmosis entropy mitosis");
        assert_eq!(concepts, vec!["mitosis", "osmosis", "entropy"]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let concepts = extract_key_concepts("gamma alpha beta gamma alpha beta");
        assert_eq!(concepts, vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn tokens_are_lower_cased_and_counted_together() {
        let concepts = extract_key_concepts("Entropy ENTROPY entropy osmosis");
        assert_eq!(concepts, vec!["entropy", "osmosis"]);
    }

    #[test]
    fn photosynthesis_example_ranks_repeated_term_first() {
        let text = "Photosynthesis converts sunlight into chemical energy. \
                    Photosynthesis occurs in chloroplasts.";
        let concepts = extract_key_concepts(text);

        assert_eq!(concepts.len(), 8);
        assert_eq!(concepts[0], "photosynthesis");
        for expected in
            ["converts", "sunlight", "into", "chemical", "energy", "occurs", "chloroplasts"]
        {
            assert!(concepts.contains(&expected.to_string()), "missing {}", expected);
        }
        for concept in &concepts {
            assert!(concept.len() > 3);
        }
    }
}
