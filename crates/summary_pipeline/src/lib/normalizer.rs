use itertools::Itertools;

/// Removes redundant sentence fragments from `text`.
///
/// Splits on the `.` terminator, trims each fragment, drops empties and exact
/// duplicates (case-sensitive, first occurrence wins) and rejoins with `". "`.
/// Deliberately a simple heuristic, not a sentence-boundary detector:
/// abbreviations and decimals split like anything else. Idempotent.
pub fn normalize(text: &str) -> String {
    text.split('.')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .unique()
        .join(". ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_fragments_are_dropped_keeping_first() {
        assert_eq!(normalize("A. B. A. C."), "A. B. C");
    }

    #[test]
    fn test_order_of_first_occurrence_is_preserved() {
        let input = "the end. the start. the middle. the start. the end.";
        assert_eq!(normalize(input), "the end. the start. the middle");
    }

    #[test]
    fn test_text_without_terminator_is_returned_trimmed() {
        assert_eq!(normalize("  no terminator here  "), "no terminator here");
    }

    #[test]
    fn test_whitespace_only_fragments_are_discarded() {
        assert_eq!(normalize("one sentence. .   . two sentence."), "one sentence. two sentence");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(normalize("Hello. hello."), "Hello. hello");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("..."), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "A. B. A. C.",
            "no terminator",
            "  spaced out .  fragments . spaced out . ",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
