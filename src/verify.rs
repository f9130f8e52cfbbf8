use crate::expect::Expectation;
use crate::sink::Collector;
use crate::violation::Violation;
use std::collections::HashMap;
use std::fmt;

/// Comparison key for the differential protocols: findings are compared
/// purely on `(line, message)`; category and subject are informational.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FindingKey {
    pub line: Option<u32>,
    pub message: String,
}

impl FindingKey {
    fn of_violation(violation: &Violation) -> Self {
        Self {
            line: violation.line(),
            message: violation.description().to_string(),
        }
    }

    fn of_expectation(expectation: &Expectation) -> Self {
        Self {
            line: Some(expectation.line),
            message: expectation.message.clone(),
        }
    }
}

impl fmt::Display for FindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", line, self.message),
            None => write!(f, "unknown:{}", self.message),
        }
    }
}

/// Captured findings did not match the fixture's expectations. Carries the
/// full diagnostic picture, not just a count.
#[derive(Debug, thiserror::Error)]
#[error(
    "reported violations don't match expectations: missing [{}], unexpected [{}]; captured: [{summary}]",
    join(.missing),
    join(.unexpected)
)]
pub struct Mismatch {
    /// Expected keys absent from the captured findings (with multiplicity).
    pub missing: Vec<FindingKey>,
    /// Captured keys absent from the expectations (with multiplicity).
    pub unexpected: Vec<FindingKey>,
    /// Rendered summary of everything the sink captured.
    pub summary: String,
}

fn join(keys: &[FindingKey]) -> String {
    keys.iter()
        .map(FindingKey::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Violating-sample protocol: the captured findings, projected to
/// `(line, message)`, must form exactly the same multiset as the expected
/// entries. Order is irrelevant; counts must match.
pub fn verify_violating(
    captured: &[Violation],
    expected: &[Expectation],
    summary: String,
) -> Result<(), Mismatch> {
    let mut counts: HashMap<FindingKey, i64> = HashMap::new();
    for expectation in expected {
        *counts.entry(FindingKey::of_expectation(expectation)).or_default() += 1;
    }
    for violation in captured {
        *counts.entry(FindingKey::of_violation(violation)).or_default() -= 1;
    }

    let mut missing = Vec::new();
    let mut unexpected = Vec::new();
    for (key, count) in counts {
        if count > 0 {
            missing.extend(std::iter::repeat_n(key, count as usize));
        } else if count < 0 {
            unexpected.extend(std::iter::repeat_n(key, (-count) as usize));
        }
    }

    if missing.is_empty() && unexpected.is_empty() {
        return Ok(());
    }
    missing.sort_by(|a, b| (a.line, &a.message).cmp(&(b.line, &b.message)));
    unexpected.sort_by(|a, b| (a.line, &a.message).cmp(&(b.line, &b.message)));
    Err(Mismatch {
        missing,
        unexpected,
        summary,
    })
}

/// Clean-sample protocol: nothing may have been captured, the rendered
/// summary must be the empty string, and the listener callback must not
/// have fired at all.
pub fn verify_clean(collector: &Collector) -> Result<(), Mismatch> {
    if collector.events().is_empty() && collector.summary().is_empty() && collector.calls() == 0 {
        return Ok(());
    }
    Err(Mismatch {
        missing: Vec::new(),
        unexpected: collector
            .events()
            .iter()
            .map(FindingKey::of_violation)
            .collect(),
        summary: collector.summary(),
    })
}
