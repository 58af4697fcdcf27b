use crate::domain::model::Product;
use crate::utils::error::ParseError;

/// Parse a User-Agent string such as `First/1.0 Second/5.5.0 (blah)`.
///
/// Blank input (after trimming, newlines included) yields an empty list.
/// Parsing is all-or-nothing: the first malformed product rejects the whole
/// string and no partial list is returned.
///
/// Each product is `Name/Version`, optionally followed by whitespace and a
/// `(comment)` group. The comment ends at the first `)`, nested parentheses
/// are not recognised.
pub fn parse(text: &str) -> Result<Vec<Product>, ParseError> {
    let mut products = Vec::new();
    let mut rest = text.trim();

    while !rest.is_empty() {
        if rest.starts_with('(') {
            return Err(ParseError::DetachedComment {
                token: group_or_word(rest).to_string(),
            });
        }

        let end = rest
            .find(|c: char| c.is_whitespace() || c == '(')
            .unwrap_or(rest.len());
        let (token, after) = rest.split_at(end);

        if after.starts_with('(') {
            return Err(ParseError::UnseparatedComment {
                token: format!("{}{}", token, group_or_word(after)),
            });
        }

        let (name, version) = split_product(token)?;
        rest = after.trim_start();

        let mut comment = "";
        if rest.starts_with('(') {
            let (group, text, remaining) = take_comment(rest)?;
            if remaining.starts_with(|c: char| !c.is_whitespace()) {
                return Err(ParseError::UnseparatedComment {
                    token: format!("{}{}", group, word(remaining)),
                });
            }
            comment = text;
            rest = remaining.trim_start();
        }

        products.push(Product::new(name, version, comment));
    }

    Ok(products)
}

/// `Name` is everything before the first `/`, `Version` everything after it.
fn split_product(token: &str) -> Result<(&str, &str), ParseError> {
    match token.split_once('/') {
        None => Err(ParseError::MissingVersion {
            token: token.to_string(),
        }),
        Some(("", _)) => Err(ParseError::MissingName {
            token: token.to_string(),
        }),
        Some((_, "")) => Err(ParseError::MissingVersion {
            token: token.to_string(),
        }),
        Some((name, version)) => Ok((name, version)),
    }
}

/// Split `(comment)rest` into the whole group, the comment text and the rest.
fn take_comment(s: &str) -> Result<(&str, &str, &str), ParseError> {
    match s[1..].find(')') {
        Some(i) => Ok((&s[..i + 2], &s[1..i + 1], &s[i + 2..])),
        None => Err(ParseError::UnterminatedComment {
            token: s.to_string(),
        }),
    }
}

fn word(s: &str) -> &str {
    s.split(char::is_whitespace).next().unwrap_or(s)
}

// Best-effort slice used only in error messages.
fn group_or_word(s: &str) -> &str {
    if s.starts_with('(') {
        if let Some(i) = s.find(')') {
            return &s[..i + 1];
        }
    }
    word(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProductList;
    use crate::utils::error::ParseErrorKind;

    fn p(name: &str, version: &str, comment: &str) -> Product {
        Product::new(name, version, comment)
    }

    #[test]
    fn test_parse_user_agent_string() {
        let cases: Vec<(&str, Vec<Product>)> = vec![
            (
                "terraform-github-actions/1.0",
                vec![p("terraform-github-actions", "1.0", "")],
            ),
            ("TFE/a718e58f", vec![p("TFE", "a718e58f", "")]),
            (
                "OneProduct/0.1.0 AnotherOne/1.2",
                vec![p("OneProduct", "0.1.0", ""), p("AnotherOne", "1.2", "")],
            ),
            (
                "ProductWithComment/1.0.0 (a comment; goes; here)",
                vec![p("ProductWithComment", "1.0.0", "a comment; goes; here")],
            ),
            (
                "ProductWithComment/1.0.0 (a comment; goes; here) AnotherProductWithComment/5.5.0 (blah)",
                vec![
                    p("ProductWithComment", "1.0.0", "a comment; goes; here"),
                    p("AnotherProductWithComment", "5.5.0", "blah"),
                ],
            ),
            (
                "NoComment/1.0.0 AnotherProductWithComment/5.5.0 (blah)",
                vec![
                    p("NoComment", "1.0.0", ""),
                    p("AnotherProductWithComment", "5.5.0", "blah"),
                ],
            ),
            (
                "First/1.0.0 Second/5.5.0 Third/5.5.0",
                vec![
                    p("First", "1.0.0", ""),
                    p("Second", "5.5.0", ""),
                    p("Third", "5.5.0", ""),
                ],
            ),
        ];

        for (input, expected) in cases {
            let parsed = parse(input).unwrap_or_else(|e| panic!("{:?}: {}", input, e));
            assert_eq!(parsed, expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_blank_input_is_empty() {
        for input in ["", " ", " \n", "\t\r\n  "] {
            assert!(parse(input).unwrap().is_empty(), "input: {:?}", input);
        }
    }

    #[test]
    fn test_missing_version() {
        let err = parse("MissingVersion").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::MissingVersion);
        assert_eq!(err.token(), "MissingVersion");
    }

    #[test]
    fn test_trailing_slash_is_missing_version() {
        let err = parse("Name/").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::MissingVersion);

        let err = parse("Name/ (comment)").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::MissingVersion);
    }

    #[test]
    fn test_one_bad_token_rejects_everything() {
        let err = parse("Good/1.0 Bad Other/2.0").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingVersion {
                token: "Bad".to_string()
            }
        );
    }

    #[test]
    fn test_missing_name() {
        let err = parse("/1.0").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::MissingName);
    }

    #[test]
    fn test_version_runs_to_whitespace() {
        let parsed = parse("a/b/c").unwrap();
        assert_eq!(parsed, vec![p("a", "b/c", "")]);
    }

    #[test]
    fn test_whitespace_between_tokens_collapses() {
        let parsed = parse("  A/1 \t\n B/2   (c d)\n").unwrap();
        assert_eq!(parsed, vec![p("A", "1", ""), p("B", "2", "c d")]);
    }

    #[test]
    fn test_comment_ends_at_first_paren() {
        let err = parse("A/1 (outer (inner)) B/2").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnseparatedComment);
        assert_eq!(err.token(), "(outer (inner))");

        let parsed = parse("A/1 (open ( still) B/2").unwrap();
        assert_eq!(parsed, vec![p("A", "1", "open ( still"), p("B", "2", "")]);
    }

    #[test]
    fn test_empty_comment_means_no_comment() {
        let parsed = parse("A/1 ()").unwrap();
        assert_eq!(parsed, vec![p("A", "1", "")]);
        assert_eq!(parsed[0].comment(), None);
    }

    #[test]
    fn test_detached_comment() {
        let err = parse("(orphan) A/1").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::DetachedComment);
        assert_eq!(err.token(), "(orphan)");

        let err = parse("A/1 (one) (two)").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::DetachedComment);
    }

    #[test]
    fn test_unseparated_comment() {
        let err = parse("Name/Version(comment)").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnseparatedComment);
        assert_eq!(err.token(), "Name/Version(comment)");

        let err = parse("A/1 (x)B/2").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnseparatedComment);
        assert_eq!(err.token(), "(x)B/2");
    }

    #[test]
    fn test_unterminated_comment() {
        let err = parse("A/1 (never closed").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnterminatedComment);
    }

    #[test]
    fn test_round_trip() {
        let list = ProductList::new(vec![
            p("First", "1.0", ""),
            p("Second", "5.5.0", "blah; (x"),
            p("Third", "v3", ""),
            p("First", "1.0", "dup"),
        ]);
        let reparsed = ProductList::new(parse(&list.to_string()).unwrap());
        assert!(reparsed.equal(&list));
    }
}
