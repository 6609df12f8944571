/// Turn a free-text multi-line block into an ordered list of trimmed,
/// non-blank lines. Duplicates are kept; empty input yields an empty vec.
pub fn clean_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blanks() {
        let lines = clean_lines("  one \n\n  \ntwo\n");
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn empty_input() {
        assert!(clean_lines("").is_empty());
        assert!(clean_lines("   \n  \n").is_empty());
    }

    #[test]
    fn order_and_duplicates_kept() {
        let lines = clean_lines("b\na\nb");
        assert_eq!(lines, vec!["b", "a", "b"]);
    }
}
