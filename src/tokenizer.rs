/// Characters that separate arguments. There is no quoting: any of these
/// always splits, and runs of them collapse.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut buf = String::new();

    for ch in line.chars() {
        if DELIMITERS.contains(&ch) {
            if !buf.is_empty() {
                tokens.push(std::mem::take(&mut buf));
            }
        } else {
            buf.push(ch);
        }
    }

    if !buf.is_empty() {
        tokens.push(buf);
    }

    tracing::trace!(?tokens, "tokenized line");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
        assert!(tokenize("\r\n\x07").is_empty());
    }

    #[test]
    fn test_tokenize_collapses_delimiter_runs() {
        assert_eq!(tokenize("a  b\tc"), vec!["a", "b", "c"]);
        assert_eq!(tokenize("  ls \t -la\r\n"), vec!["ls", "-la"]);
    }

    #[test]
    fn test_tokenize_single() {
        assert_eq!(tokenize("single"), vec!["single"]);
    }

    #[test]
    fn test_quotes_are_not_special() {
        assert_eq!(
            tokenize("echo \"foo bar\" 'baz'"),
            vec!["echo", "\"foo", "bar\"", "'baz'"]
        );
    }

    #[test]
    fn test_bell_splits() {
        assert_eq!(tokenize("a\x07b"), vec!["a", "b"]);
    }

    #[test]
    fn test_no_truncation() {
        let long = "x".repeat(10_000);
        let line = vec![long.as_str(); 200].join(" ");
        let tokens = tokenize(&line);
        assert_eq!(tokens.len(), 200);
        assert!(tokens.iter().all(|t| t.len() == 10_000));
    }

    #[test]
    fn test_no_empty_tokens() {
        for line in ["a\t\t b", " \n", "x\r\ry", "\x07\x07z\x07"] {
            assert!(tokenize(line).iter().all(|t| !t.is_empty()));
        }
    }
}
