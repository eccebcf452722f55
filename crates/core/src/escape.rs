//! Escaped-delimiter tokenizer and its rendering inverse.
//!
//! A backslash makes the next character literal, so `\,` keeps a comma
//! inside a token and `\\` yields a single backslash.

/// Character that makes the following character literal.
pub const ESCAPE: char = '\\';

/// Split `input` on `delimiter`, honoring backslash escapes.
///
/// - Empty input yields no tokens at all, not one empty token.
/// - Consecutive, leading and trailing delimiters produce empty tokens.
/// - A backslash at the very end of input is dropped without appending
///   anything. This is kept for compatibility with existing flag values.
pub fn tokenize(input: &str, delimiter: char) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut escaped = false;
    let mut last_was_delimiter = false;

    for c in input.chars() {
        last_was_delimiter = false;
        if !escaped {
            if c == delimiter {
                tokens.push(std::mem::take(&mut current));
                last_was_delimiter = true;
                continue;
            }
            if c == ESCAPE {
                escaped = true;
                continue;
            }
        }
        escaped = false;
        current.push(c);
    }

    if !current.is_empty() || last_was_delimiter {
        tokens.push(current);
    }
    tokens
}

/// Escape `value` so that [`tokenize`] on `delimiter` returns it unchanged.
///
/// Backslashes are escaped before the delimiter; the other order would
/// double the backslash introduced for the delimiter.
pub fn escape(value: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == ESCAPE || c == delimiter {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Escape every item and join them with `delimiter`.
pub fn join_escaped<I, S>(items: I, delimiter: char) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = items
        .into_iter()
        .map(|item| escape(item.as_ref(), delimiter))
        .collect();
    parts.join(&delimiter.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(input: &str) -> Vec<String> {
        tokenize(input, ',')
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(toks("").is_empty());
    }

    #[test]
    fn plain_elements() {
        assert_eq!(toks("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(toks("single"), vec!["single"]);
    }

    #[test]
    fn lone_delimiter_yields_two_empty_tokens() {
        assert_eq!(toks(","), vec!["", ""]);
    }

    #[test]
    fn leading_and_trailing_delimiters() {
        assert_eq!(toks("a,"), vec!["a", ""]);
        assert_eq!(toks(",a"), vec!["", "a"]);
    }

    #[test]
    fn consecutive_delimiters_yield_empty_tokens() {
        assert_eq!(toks("a,,b"), vec!["a", "", "b"]);
        assert_eq!(toks(",,"), vec!["", "", ""]);
    }

    #[test]
    fn escaped_delimiter_stays_in_token() {
        assert_eq!(toks("a\\,b,c"), vec!["a,b", "c"]);
    }

    #[test]
    fn escaped_backslash_is_literal() {
        assert_eq!(toks("a\\\\b"), vec!["a\\b"]);
        assert_eq!(toks("a\\\\,b"), vec!["a\\", "b"]);
    }

    #[test]
    fn escape_before_ordinary_char_is_dropped() {
        assert_eq!(toks("\\a\\b"), vec!["ab"]);
    }

    // Compatibility quirk: a dangling escape is consumed and nothing is
    // appended for it.
    #[test]
    fn dangling_escape_is_dropped() {
        assert_eq!(toks("a\\"), vec!["a"]);
        assert!(toks("\\").is_empty());
    }

    // Same quirk: the escape after the delimiter is the last character
    // processed, so no trailing empty token is emitted.
    #[test]
    fn dangling_escape_after_delimiter_suppresses_trailing_token() {
        assert_eq!(toks("a,\\"), vec!["a"]);
    }

    #[test]
    fn escaped_trailing_delimiter_is_literal() {
        assert_eq!(toks("a\\,"), vec!["a,"]);
    }

    #[test]
    fn other_delimiters() {
        assert_eq!(tokenize("a;b\\;c", ';'), vec!["a", "b;c"]);
        // Commas are ordinary characters when splitting on ';'.
        assert_eq!(tokenize("a,b;c", ';'), vec!["a,b", "c"]);
        assert_eq!(tokenize("k:v:w", ':'), vec!["k", "v", "w"]);
    }

    #[test]
    fn multibyte_characters() {
        assert_eq!(toks("é,ü\\,ñ"), vec!["é", "ü,ñ"]);
        assert_eq!(tokenize("a→b→c", '→'), vec!["a", "b", "c"]);
    }

    #[test]
    fn escape_doubles_backslash_before_delimiter() {
        assert_eq!(escape("a\\,b", ','), "a\\\\\\,b");
        assert_eq!(escape("plain", ','), "plain");
    }

    #[test]
    fn join_escaped_inverts_tokenize() {
        let items = vec!["a,b", "c\\d", "", "e"];
        let rendered = join_escaped(&items, ',');
        assert_eq!(rendered, "a\\,b,c\\\\d,,e");
        assert_eq!(tokenize(&rendered, ','), items);
    }
}
