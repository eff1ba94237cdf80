use once_cell::sync::Lazy;
use regex::Regex;

/// Words that only join other words together, ignored when `strip_joiners` is set.
pub const JOINERS: &[&str] = &["a", "and", "the", "&"];

static TITLE_FORMAT_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)[({\[](?:\d{4}|omnibus|anthology|hardcover|audiobook|audio\scd|paperback|turtleback|mass\s*market|edition|ed\.)[\])}]",
    )
    .unwrap()
});

static TITLE_EDITION_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[({\[].*?(?:edition|ed\.).*?[\]})]").unwrap());

static NUMBER_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+),(\d+)").unwrap());

static SPACED_HYPHEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s-").unwrap());

static TITLE_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[:,;!@$%^&*(){}.`~"\s\[\]/《》「」“”]"#).unwrap());

/// Split a free-text title or query into search terms.
///
/// Bracketed years and format markers such as `(2010)` or `[Paperback]` are
/// dropped, as is any bracketed group mentioning an edition. Thousands
/// separators inside numbers are removed and punctuation becomes whitespace.
/// Hyphens are only treated as separators when whitespace precedes them, so
/// `X-Men` stays a single token.
pub fn title_tokens(title: &str, strip_joiners: bool) -> Vec<String> {
    let title = TITLE_FORMAT_MARKERS.replace_all(title, "");
    let title = TITLE_EDITION_GROUP.replace_all(&title, "");
    let title = NUMBER_SEPARATOR.replace_all(&title, "${1}${2}");
    let title = SPACED_HYPHEN.replace_all(&title, " ");
    let title = TITLE_SEPARATORS.replace_all(&title, " ");

    title
        .split_whitespace()
        .map(|token| token.trim().trim_matches('"').trim_matches('\''))
        .filter(|token| !token.is_empty())
        .filter(|token| !strip_joiners || !is_joiner(token))
        .map(str::to_string)
        .collect()
}

fn is_joiner(token: &str) -> bool {
    let token = token.to_lowercase();
    JOINERS.contains(&token.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_tokens_keeps_joiners() {
        assert_eq!(
            title_tokens("The Lord of the Rings", false),
            vec!["The", "Lord", "of", "the", "Rings"]
        );
    }

    #[test]
    fn test_title_tokens_strips_joiners() {
        // `&` is a separator, so it never survives as a token
        assert_eq!(
            title_tokens("The Lord and the Rings & A Ring", true),
            vec!["Lord", "Rings", "Ring"]
        );
    }

    #[test]
    fn test_title_tokens_drops_format_markers() {
        assert_eq!(
            title_tokens("Dune (1965) [Paperback] {Omnibus}", false),
            vec!["Dune"]
        );
        assert_eq!(title_tokens("Dune (Mass Market)", false), vec!["Dune"]);
        assert_eq!(
            title_tokens("Dune (40th Anniversary Edition)", false),
            vec!["Dune"]
        );
    }

    #[test]
    fn test_title_tokens_numbers_and_hyphens() {
        assert_eq!(
            title_tokens("1,000 Years of X-Men -Revisited", false),
            vec!["1000", "Years", "of", "X-Men", "Revisited"]
        );
    }

    #[test]
    fn test_title_tokens_punctuation_and_quotes() {
        assert_eq!(
            title_tokens("Harry Potter: Book 1, Vol. 2", false),
            vec!["Harry", "Potter", "Book", "1", "Vol", "2"]
        );
        assert_eq!(title_tokens("'Salem's Lot", false), vec!["Salem's", "Lot"]);
    }

    #[test]
    fn test_title_tokens_cjk_brackets() {
        assert_eq!(
            title_tokens("《채식주의자》 「한강」", false),
            vec!["채식주의자", "한강"]
        );
    }

    #[test]
    fn test_title_tokens_empty() {
        assert!(title_tokens("", false).is_empty());
        assert!(title_tokens(" ... ;; ", false).is_empty());
        assert!(title_tokens("the a and", true).is_empty());
    }
}
