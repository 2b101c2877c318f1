//! Text tokenizers for the import pipeline.
//!
//! - CSV: quote-aware record splitting and field tokenizing
//! - Config: `[section]` headers followed by `key = value` lines

/// Split one CSV line into trimmed fields.
///
/// Outside quotes a comma ends a field and a quote opens quoted mode. Inside
/// quotes `""` is a literal quote and a lone quote closes quoted mode. A line
/// ending in a comma has a trailing empty field; an empty line is one empty
/// field.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == ',' {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Split CSV text into records on line breaks that are outside quotes.
///
/// CRLF and LF both end a record; line breaks inside quoted fields are kept
/// so multi-line values survive. Blank records are preserved for the caller
/// to filter.
pub fn split_csv_records(text: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in text.chars() {
        match ch {
            '"' => {
                // A doubled quote toggles twice, which leaves the state unchanged.
                in_quotes = !in_quotes;
                current.push(ch);
            }
            '\n' if !in_quotes => {
                if current.ends_with('\r') {
                    current.pop();
                }
                records.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    if current.ends_with('\r') {
        current.pop();
    }
    if !current.is_empty() {
        records.push(current);
    }
    records
}

/// Header prefix of a named profile block.
pub const PROFILE_KIND: &str = "profile";
/// Header prefix of a shared SSO settings block.
pub const SSO_SESSION_KIND: &str = "sso-session";

/// One `[kind name]` or `[name]` block of a config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// `profile` or `sso-session` when the header starts with one of them
    pub kind: Option<String>,
    pub name: String,
    /// `(normalized key, value)` in file order
    pub entries: Vec<(String, String)>,
}

impl Section {
    /// Last value for a normalized key, ignoring empty values.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }
}

/// Normalize a config key: trimmed, lowercase, hyphens as underscores.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase().replace('-', "_")
}

/// Parse sectioned `key = value` text.
///
/// Blank lines and `#`/`;` comments are skipped. A `[profile? name]` line
/// starts a new section, flushing the previous one. `key = value` lines
/// before the first header are ignored. The last section is flushed at end
/// of input.
pub fn parse_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            if let Some(done) = current.take() {
                sections.push(done);
            }
            current = parse_header(header);
            continue;
        }

        if let (Some(section), Some((key, value))) = (current.as_mut(), line.split_once('=')) {
            section
                .entries
                .push((normalize_key(key), value.trim().to_string()));
        }
    }

    if let Some(done) = current {
        sections.push(done);
    }
    sections
}

fn parse_header(header: &str) -> Option<Section> {
    let header = header.trim();
    let (kind, name) = match header.split_once(char::is_whitespace) {
        Some((kind, name))
            if [PROFILE_KIND, SSO_SESSION_KIND]
                .iter()
                .any(|k| kind.eq_ignore_ascii_case(k)) =>
        {
            (Some(kind.to_ascii_lowercase()), name.trim())
        }
        _ => (None, header),
    };

    if name.is_empty() {
        return None;
    }

    Some(Section {
        kind,
        name: name.to_string(),
        entries: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(
            split_csv_line("name,123456789012,iam,us-east-1"),
            vec!["name", "123456789012", "iam", "us-east-1"]
        );
    }

    #[test]
    fn test_quoted_comma() {
        assert_eq!(
            split_csv_line("\"Account, Name\",123456789012"),
            vec!["Account, Name", "123456789012"]
        );
    }

    #[test]
    fn test_doubled_quotes() {
        assert_eq!(
            split_csv_line("\"Account \"\"Name\"\"\",1"),
            vec!["Account \"Name\"", "1"]
        );
    }

    #[test]
    fn test_trailing_and_empty() {
        assert_eq!(split_csv_line("a,b,"), vec!["a", "b", ""]);
        assert_eq!(split_csv_line(""), vec![""]);
        assert_eq!(split_csv_line(" a , b "), vec!["a", "b"]);
    }

    #[test]
    fn test_records_respect_quotes() {
        let text = "h1,h2\r\n\"multi\nline\",x\n\nlast,row";
        assert_eq!(
            split_csv_records(text),
            vec!["h1,h2", "\"multi\nline\",x", "", "last,row"]
        );
    }

    #[test]
    fn test_sections() {
        let text = "\
# comment
orphan = ignored

[profile dev]
Region = us-west-2
sso-account-id=123456789012

; another comment
[default]
output = json
[ ]
stray = value
";
        let sections = parse_sections(text);
        assert_eq!(sections.len(), 2);

        assert_eq!(sections[0].kind.as_deref(), Some("profile"));
        assert_eq!(sections[0].name, "dev");
        assert_eq!(sections[0].get("region"), Some("us-west-2"));
        assert_eq!(sections[0].get("sso_account_id"), Some("123456789012"));

        assert_eq!(sections[1].kind, None);
        assert_eq!(sections[1].name, "default");
        assert_eq!(sections[1].get("output"), Some("json"));
    }

    #[test]
    fn test_unknown_header_word_is_part_of_name() {
        let sections = parse_sections("[my profile]\n[SSO-Session corp]\n[profile  spaced name ]\n");
        assert_eq!(sections.len(), 3);

        assert_eq!(sections[0].kind, None);
        assert_eq!(sections[0].name, "my profile");

        assert_eq!(sections[1].kind.as_deref(), Some(SSO_SESSION_KIND));
        assert_eq!(sections[1].name, "corp");

        assert_eq!(sections[2].kind.as_deref(), Some(PROFILE_KIND));
        assert_eq!(sections[2].name, "spaced name");
    }

    #[test]
    fn test_section_get_ignores_empty_values() {
        let sections = parse_sections("[a]\nregion =\n");
        assert_eq!(sections[0].get("region"), None);
    }
}
