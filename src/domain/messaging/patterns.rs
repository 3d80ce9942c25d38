use regex::{Regex, RegexBuilder};

fn build(pattern: &str, flags: &str) -> Result<Regex, regex::Error> {
    let mut builder = RegexBuilder::new(pattern);
    for flag in flags.chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            // global, unicode and sticky have no meaning for a compiled matcher
            _ => {}
        }
    }
    builder.build()
}

/// Pattern matching `s` literally. `flags` uses JS flag letters.
pub fn string_as_regexp(s: &str, flags: &str) -> Result<Regex, regex::Error> {
    build(&regex::escape(s), flags)
}

/// Like [`string_as_regexp`] but every `*` matches any run of characters,
/// lazily, so user URL patterns behave as globs.
pub fn wildcard_as_regexp(s: &str, flags: &str) -> Result<Regex, regex::Error> {
    let pattern = s
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*?");
    build(&pattern, flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a.b*c", "a.b*c", true)]
    #[case("a.b*c", "xx a.b*c yy", true)]
    #[case("a.b*c", "aXb*c", false)]
    #[case("a.b*c", "a.bbbc", false)]
    #[case("(x)[y]{z}", "(x)[y]{z}", true)]
    #[case("^$|+?\\/", "^$|+?\\/", true)]
    #[case("https://example.com/", "https://example.com/", true)]
    #[case("https://example.com/", "https://exampleXcom/", false)]
    fn test_string_as_regexp(#[case] literal: &str, #[case] input: &str, #[case] matches: bool) {
        let rx = string_as_regexp(literal, "").unwrap();
        assert_eq!(rx.is_match(input), matches, "{literal} vs {input}");
    }

    #[rstest]
    #[case("a.b*c", "a.bYYYc", true)]
    #[case("a.b*c", "a.bc", true)]
    #[case("a.b*c", "aXbYYYc", false)]
    #[case("https://*.example.com/*", "https://www.example.com/page", true)]
    #[case("https://*.example.com/*", "https://wwwXexample.com/page", false)]
    #[case("*", "anything", true)]
    #[case("a?c", "abc", false)]
    #[case("a?c", "a?c", true)]
    fn test_wildcard_as_regexp(#[case] glob: &str, #[case] input: &str, #[case] matches: bool) {
        let rx = wildcard_as_regexp(glob, "").unwrap();
        assert_eq!(rx.is_match(input), matches, "{glob} vs {input}");
    }

    #[test]
    fn test_wildcard_is_lazy() {
        let rx = wildcard_as_regexp("a*c", "").unwrap();
        let found = rx.find("abcabc").unwrap();
        assert_eq!(found.as_str(), "abc");
    }

    #[test]
    fn test_case_insensitive_flag() {
        let rx = string_as_regexp("Example.COM", "i").unwrap();
        assert!(rx.is_match("example.com"));
        let strict = string_as_regexp("Example.COM", "").unwrap();
        assert!(!strict.is_match("example.com"));
    }

    #[test]
    fn test_ignored_flags_are_accepted() {
        let rx = wildcard_as_regexp("foo*bar", "gu").unwrap();
        assert!(rx.is_match("foo-bar"));
    }

    #[test]
    fn test_multi_line_flag() {
        let rx = build("^b$", "m").unwrap();
        assert!(rx.is_match("a\nb\nc"));
    }
}
