// String literal decoding and docstring cleanup

const TAB_SIZE: usize = 8;

/// Value of a single Python string literal as written in source.
///
/// Returns `None` for literals that cannot be documentation: bytes and
/// f-strings, or text that is not a quoted literal at all.
pub fn literal_value(text: &str) -> Option<String> {
    let quote_start = text.find(|c| c == '"' || c == '\'')?;
    let prefix = text[..quote_start].to_ascii_lowercase();
    if prefix.contains(|c| matches!(c, 'b' | 'f' | 't')) {
        return None;
    }

    let rest = &text[quote_start..];
    let quote_len = if rest.starts_with("\"\"\"") || rest.starts_with("'''") {
        3
    } else {
        1
    };
    if rest.len() < quote_len * 2 {
        return None;
    }
    let body = &rest[quote_len..rest.len() - quote_len];

    if prefix.contains('r') {
        Some(body.to_string())
    } else {
        Some(decode_escapes(body))
    }
}

/// Resolve backslash escapes in a non-raw literal body.
///
/// Escapes Python would reject, including `\N{...}` with an unknown
/// character name, are kept as written.
fn decode_escapes(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some(next) = chars.next() else {
            out.push('\\');
            break;
        };

        match next {
            // line continuation
            '\n' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\x0b'),
            '0'..='7' => {
                let mut value = next.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                match char::from_u32(value) {
                    Some(ch) => out.push(ch),
                    None => out.push(char::REPLACEMENT_CHARACTER),
                }
            }
            'x' | 'u' | 'U' => {
                let width = match next {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let mut digits = String::with_capacity(width);
                while digits.len() < width {
                    match chars.peek() {
                        Some(d) if d.is_ascii_hexdigit() => {
                            digits.push(*d);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                let decoded = if digits.len() == width {
                    u32::from_str_radix(&digits, 16)
                        .ok()
                        .and_then(char::from_u32)
                } else {
                    None
                };
                match decoded {
                    Some(ch) => out.push(ch),
                    None => {
                        out.push('\\');
                        out.push(next);
                        out.push_str(&digits);
                    }
                }
            }
            'N' if chars.peek() == Some(&'{') => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                for d in chars.by_ref() {
                    if d == '}' {
                        closed = true;
                        break;
                    }
                    name.push(d);
                }
                match unicode_names2::character(&name).filter(|_| closed) {
                    Some(ch) => out.push(ch),
                    None => {
                        out.push_str("\\N{");
                        out.push_str(&name);
                        if closed {
                            out.push('}');
                        }
                    }
                }
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}

/// Normalize docstring indentation.
///
/// Tabs expand to 8 columns, leading whitespace is stripped from the first
/// line, the common indentation of the remaining lines is removed, and
/// leading and trailing blank lines are dropped.
pub fn clean_docstring(doc: &str) -> String {
    let mut lines: Vec<String> = doc.split('\n').map(expand_tabs).collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim_start().is_empty())
        .map(|line| line.chars().count() - line.trim_start().chars().count())
        .min();

    if let Some(first) = lines.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(margin) = margin {
        for line in lines.iter_mut().skip(1) {
            *line = line.chars().skip(margin).collect();
        }
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let leading_blank = lines.iter().take_while(|line| line.is_empty()).count();

    lines[leading_blank..].join("\n")
}

fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + TAB_SIZE);
    let mut column = 0;
    for c in line.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_literals() {
        assert_eq!(literal_value(r#""Does foo.""#), Some("Does foo.".to_string()));
        assert_eq!(literal_value("'single'"), Some("single".to_string()));
        assert_eq!(literal_value(r#""""triple""""#), Some("triple".to_string()));
        assert_eq!(literal_value("'''triple'''"), Some("triple".to_string()));
        assert_eq!(literal_value(r#""""#), Some(String::new()));
    }

    #[test]
    fn test_prefixed_literals() {
        assert_eq!(literal_value(r#"u"text""#), Some("text".to_string()));
        assert_eq!(literal_value(r#"r"a\nb""#), Some(r"a\nb".to_string()));
        assert_eq!(literal_value(r#"R"""raw""""#), Some("raw".to_string()));
        assert_eq!(literal_value(r#"b"bytes""#), None);
        assert_eq!(literal_value(r#"rb"bytes""#), None);
        assert_eq!(literal_value(r#"f"{x}""#), None);
        assert_eq!(literal_value(r#"Fr"{x}""#), None);
    }

    #[test]
    fn test_not_a_literal() {
        assert_eq!(literal_value("identifier"), None);
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(decode_escapes(r"a\nb"), "a\nb");
        assert_eq!(decode_escapes(r"tab\there"), "tab\there");
        assert_eq!(decode_escapes(r#"quote \" and \'"#), "quote \" and '");
        assert_eq!(decode_escapes(r"back\\slash"), "back\\slash");
    }

    #[test]
    fn test_numeric_escapes() {
        assert_eq!(decode_escapes(r"\x41"), "A");
        assert_eq!(decode_escapes(r"\101"), "A");
        assert_eq!(decode_escapes(r"\0"), "\0");
        assert_eq!(decode_escapes(r"\u00e9"), "é");
        assert_eq!(decode_escapes(r"\U0001F600"), "😀");
    }

    #[test]
    fn test_unknown_escapes_kept() {
        assert_eq!(decode_escapes(r"\d+"), r"\d+");
        assert_eq!(decode_escapes(r"\N{NOT A REAL NAME}"), r"\N{NOT A REAL NAME}");
        assert_eq!(decode_escapes(r"\N{BULLET"), r"\N{BULLET");
        assert_eq!(decode_escapes(r"\xZZ"), r"\xZZ");
        assert_eq!(decode_escapes("trailing\\"), "trailing\\");
    }

    #[test]
    fn test_named_unicode_escapes() {
        assert_eq!(decode_escapes(r"\N{BULLET} item"), "\u{2022} item");
        assert_eq!(decode_escapes(r"a \N{EM DASH} b"), "a \u{2014} b");
        assert_eq!(decode_escapes(r"\N{GREEK SMALL LETTER ALPHA}"), "\u{3b1}");
    }

    #[test]
    fn test_line_continuation() {
        assert_eq!(decode_escapes("one \\\ntwo"), "one two");
    }

    #[test]
    fn test_clean_single_line() {
        assert_eq!(clean_docstring("  Does foo.  "), "Does foo.  ");
    }

    #[test]
    fn test_clean_removes_common_indent() {
        let raw = "Summary line.\n\n    Details here.\n      Indented more.\n    ";
        assert_eq!(
            clean_docstring(raw),
            "Summary line.\n\nDetails here.\n  Indented more."
        );
    }

    #[test]
    fn test_clean_strips_blank_edges() {
        let raw = "\n    Starts on second line.\n    Continues.\n    ";
        assert_eq!(clean_docstring(raw), "Starts on second line.\nContinues.");
    }

    #[test]
    fn test_clean_blank_docstrings() {
        assert_eq!(clean_docstring("\n\n"), "");
        assert_eq!(clean_docstring(""), "");
        // no margin to remove when no later line has content
        assert_eq!(clean_docstring("   \n   \n"), "   ");
    }

    #[test]
    fn test_clean_expands_tabs() {
        let raw = "Title.\n\tBody.\n\t\tNested.";
        assert_eq!(clean_docstring(raw), "Title.\nBody.\n        Nested.");
    }
}
