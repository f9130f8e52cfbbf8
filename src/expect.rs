use std::fmt;
use std::fs;
use std::path::Path;

/// One expected finding parsed from a fixture's `violations.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expectation {
    /// 1-based source line the finding is expected at.
    pub line: u32,
    /// Expected message, trimmed of surrounding whitespace.
    pub message: String,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.message)
    }
}

/// Failure to load or parse an expectations resource. Always fatal for the
/// check it belongs to: a malformed line means a broken fixture, not a
/// recoverable condition.
#[derive(Debug, thiserror::Error)]
pub enum ExpectError {
    #[error("failed to read expectations file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed expectation at line {line_no}: {content:?} (want `<line>:<message>`)")]
    Malformed { line_no: usize, content: String },
}

/// Load expectations from a file, one `<line>:<message>` entry per line.
pub fn load(path: &Path) -> Result<Vec<Expectation>, ExpectError> {
    let text = fs::read_to_string(path).map_err(|source| ExpectError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse(&text)
}

/// Parse expectation entries from text. Each non-blank line splits on the
/// first colon into an integer position and a trimmed message. Blank lines
/// are ignored so files may carry a trailing newline.
pub fn parse(text: &str) -> Result<Vec<Expectation>, ExpectError> {
    let mut entries = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let entry = parse_line(raw).ok_or_else(|| ExpectError::Malformed {
            line_no: index + 1,
            content: raw.to_string(),
        })?;
        entries.push(entry);
    }
    Ok(entries)
}

fn parse_line(raw: &str) -> Option<Expectation> {
    let (position, message) = raw.split_once(':')?;
    let line = position.trim().parse().ok()?;
    Some(Expectation {
        line,
        message: message.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_line_and_trims_message() {
        let entries = parse("10: Empty line\n").unwrap();
        assert_eq!(
            entries,
            vec![Expectation {
                line: 10,
                message: "Empty line".into()
            }]
        );
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        let entries = parse("5: Expected: something else").unwrap();
        assert_eq!(entries[0].message, "Expected: something else");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let entries = parse("4: Tab character\n4: Tab character\n").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let entries = parse("1: one\n\n2: two\n").unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_missing_colon_is_malformed() {
        let err = parse("just a message").unwrap_err();
        assert!(matches!(err, ExpectError::Malformed { line_no: 1, .. }));
    }

    #[test]
    fn test_non_integer_position_is_malformed() {
        let err = parse("ten: Empty line").unwrap_err();
        assert!(matches!(err, ExpectError::Malformed { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("violations.txt")).unwrap_err();
        assert!(matches!(err, ExpectError::Read { .. }));
    }
}
