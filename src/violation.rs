use std::fmt;

/// Category assigned to findings that are not backed by a named rule.
/// Processing and configuration failures intentionally share it: both are
/// non-positional, file-agnostic failures.
pub const PROCESSING_ERROR: &str = "ProcessingError";

/// Location string used when an upstream error carries no position or file.
pub const UNKNOWN: &str = "unknown";

/// A normalized finding: one issue at (or without) a source location.
///
/// Immutable once constructed; two records are equal iff all four fields
/// are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violation {
    category: String,
    subject: String,
    location: String,
    description: String,
}

impl Violation {
    /// Short fixed category: a rule name, or `"ProcessingError"`.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// File the finding applies to, or `"unknown"`.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Formatted line range (`"start-end"`), or `"unknown"` when no
    /// position is available.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Human-readable explanation.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// First source line of the finding, if the location carries one.
    ///
    /// A range string parses to its start line, so `"5-5"` and `"5-9"`
    /// both yield 5; `"unknown"` yields None.
    pub fn line(&self) -> Option<u32> {
        let start = match self.location.split_once('-') {
            Some((start, _)) => start,
            None => self.location.as_str(),
        };
        start.parse().ok()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.location, self.description)
    }
}

/// A finding emitted by a rule, at a line range in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFinding {
    pub rule: String,
    pub file: String,
    pub begin_line: u32,
    pub end_line: u32,
    pub description: String,
}

/// An analyzer failure while processing one file (e.g. unreadable input).
/// Message and detail are kept separate upstream; the adapter concatenates
/// them directly, with no separator inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingFailure {
    pub file: String,
    pub message: String,
    pub detail: String,
}

/// An analyzer failure caused by its own configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFailure {
    pub issue: String,
}

/// The closed set of raw error shapes an analyzer can emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawFinding {
    Rule(RuleFinding),
    Processing(ProcessingFailure),
    Config(ConfigFailure),
}

impl From<&RawFinding> for Violation {
    fn from(raw: &RawFinding) -> Self {
        match raw {
            RawFinding::Rule(finding) => Violation {
                category: finding.rule.clone(),
                subject: finding.file.clone(),
                location: format!("{}-{}", finding.begin_line, finding.end_line),
                description: finding.description.clone(),
            },
            RawFinding::Processing(failure) => Violation {
                category: PROCESSING_ERROR.to_string(),
                subject: failure.file.clone(),
                location: UNKNOWN.to_string(),
                description: format!("{}{}", failure.message, failure.detail),
            },
            RawFinding::Config(failure) => Violation {
                category: PROCESSING_ERROR.to_string(),
                subject: UNKNOWN.to_string(),
                location: UNKNOWN.to_string(),
                description: failure.issue.clone(),
            },
        }
    }
}

impl From<RawFinding> for Violation {
    fn from(raw: RawFinding) -> Self {
        Violation::from(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_finding(begin: u32, end: u32) -> RawFinding {
        RawFinding::Rule(RuleFinding {
            rule: "EmptyLinesCheck".into(),
            file: "Invalid.java".into(),
            begin_line: begin,
            end_line: end,
            description: "Empty line".into(),
        })
    }

    #[test]
    fn test_rule_finding_maps_to_range_location() {
        let violation = Violation::from(rule_finding(3, 7));
        assert_eq!(violation.category(), "EmptyLinesCheck");
        assert_eq!(violation.subject(), "Invalid.java");
        assert_eq!(violation.location(), "3-7");
        assert_eq!(violation.description(), "Empty line");
    }

    #[test]
    fn test_single_line_still_formats_as_range() {
        let violation = Violation::from(rule_finding(5, 5));
        assert_eq!(violation.location(), "5-5");
        assert_eq!(violation.line(), Some(5));
    }

    #[test]
    fn test_processing_failure_concatenates_without_separator() {
        let violation = Violation::from(RawFinding::Processing(ProcessingFailure {
            file: "file.java".into(),
            message: "Cannot parse".into(),
            detail: " file.java".into(),
        }));
        assert_eq!(violation.category(), "ProcessingError");
        assert_eq!(violation.subject(), "file.java");
        assert_eq!(violation.location(), "unknown");
        assert_eq!(violation.description(), "Cannot parse file.java");
        assert_eq!(violation.line(), None);
    }

    #[test]
    fn test_config_failure_is_file_agnostic() {
        let violation = Violation::from(RawFinding::Config(ConfigFailure {
            issue: "Unknown module: NoSuchCheck".into(),
        }));
        assert_eq!(violation.category(), "ProcessingError");
        assert_eq!(violation.subject(), "unknown");
        assert_eq!(violation.location(), "unknown");
        assert_eq!(violation.description(), "Unknown module: NoSuchCheck");
    }

    #[test]
    fn test_structural_equality_includes_category() {
        let first = Violation::from(rule_finding(5, 5));
        let mut raw = rule_finding(5, 5);
        if let RawFinding::Rule(finding) = &mut raw {
            finding.rule = "OtherCheck".into();
        }
        let second = Violation::from(raw);
        assert_ne!(first, second);
        assert_eq!(first.line(), second.line());
        assert_eq!(first.description(), second.description());
    }

    #[test]
    fn test_display_joins_location_and_description() {
        let violation = Violation::from(rule_finding(10, 10));
        assert_eq!(violation.to_string(), "10-10:Empty line");
    }
}
