//! CSV header line parsing.

/// Normalizes a header value by trimming whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim().to_string()
}

/// Parses a CSV line into fields, handling quoted values.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(normalize_header(&current));
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(normalize_header(&current));
    fields
}

/// Returns the first name that appears more than once.
pub fn first_duplicate(columns: &[String]) -> Option<&str> {
    columns
        .iter()
        .enumerate()
        .find(|&(idx, name)| columns[..idx].contains(name))
        .map(|(_, name)| name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_line_simple() {
        let result = parse_csv_line("pool M,pool F,hire M");
        assert_eq!(result, vec!["pool M", "pool F", "hire M"]);
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        let result = parse_csv_line("\"Symposium, Spring\",participants");
        assert_eq!(result, vec!["Symposium, Spring", "participants"]);
    }

    #[test]
    fn test_parse_csv_line_escaped_quotes() {
        let result = parse_csv_line("\"the \"\"big\"\" one\",b");
        assert_eq!(result, vec!["the \"big\" one", "b"]);
    }

    #[test]
    fn test_parse_csv_line_trimmed() {
        let result = parse_csv_line("  a  ,  b  ");
        assert_eq!(result, vec!["a", "b"]);
    }

    #[test]
    fn test_first_duplicate() {
        let columns: Vec<String> = ["a", "b", "a"].map(String::from).to_vec();
        assert_eq!(first_duplicate(&columns), Some("a"));
        assert_eq!(first_duplicate(&columns[..2]), None);
    }
}
