/// Splits one line of CSV text into its fields, honoring quoted fields.
///
/// A double quote toggles quoted state, except that `""` inside a quoted
/// field produces a single literal `"` without leaving the field. A comma
/// outside quotes ends the current field; commas inside quotes are ordinary
/// characters. Every line yields at least one field, and an unterminated
/// quote at end of line is accepted as-is rather than rejected.
///
/// Each field is trimmed of surrounding whitespace when it is pushed. The
/// trim is applied to the whole accumulated field, so whitespace that was
/// intentionally placed just inside quotes is lost too. That matches the
/// established output of this tool; do not "fix" it here without changing
/// the documented field-value semantics.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Escaped quote: consume both, stay inside the field
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_fields() {
        assert_eq!(split_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_trims_whitespace() {
        assert_eq!(split_line("  a , b ,c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_quoted_comma() {
        assert_eq!(split_line(r#""x,y",z"#), vec!["x,y", "z"]);
    }

    #[test]
    fn test_split_escaped_quotes() {
        assert_eq!(
            split_line(r#""he said ""hi""",ok"#),
            vec![r#"he said "hi""#, "ok"]
        );
    }

    #[test]
    fn test_split_empty_line_yields_one_field() {
        assert_eq!(split_line(""), vec![""]);
    }

    #[test]
    fn test_split_trailing_comma_yields_empty_field() {
        assert_eq!(split_line("a,"), vec!["a", ""]);
    }

    #[test]
    fn test_split_unterminated_quote_accepted() {
        assert_eq!(split_line(r#""open,field"#), vec!["open,field"]);
    }

    #[test]
    fn test_split_trims_inside_quotes() {
        // Known quirk: the trim happens at the field boundary, after quotes
        // have been stripped, so padded quoted values lose their padding.
        assert_eq!(split_line(r#"" padded ",x"#), vec!["padded", "x"]);
    }

    #[test]
    fn test_split_quote_in_middle_of_field() {
        assert_eq!(split_line(r#"ab"cd"ef"#), vec!["abcdef"]);
    }
}
