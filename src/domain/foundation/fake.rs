//! Random values for fake data builders.

/// A lowercase ASCII word of exactly `len` letters.
pub fn random_word(len: usize) -> String {
    std::iter::repeat_with(fastrand::lowercase).take(len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_has_requested_length_and_letters() {
        let word = random_word(12);
        assert_eq!(word.len(), 12);
        assert!(word.chars().all(|c| c.is_ascii_lowercase()));
        assert!(random_word(0).is_empty());
    }
}
