/// Upper-cases the first character only ("photosynthesis" -> "Photosynthesis").
/// Concepts arrive lower-cased from the extractor; display surfaces and
/// question stems want them title-cased.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn title_case_capitalizes_first_char_only() {
        assert_eq!(title_case("photosynthesis"), "Photosynthesis");
        assert_eq!(title_case("e2e"), "E2e");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("Already"), "Already");
    }
}
