use crate::violation::{RawFinding, Violation};

/// Callback boundary an analyzer emits raw findings through.
pub trait FindingListener {
    fn on_finding(&mut self, finding: RawFinding);
}

/// Listener that records every finding emitted during one analyzer run.
///
/// Append-only, in emission order, converted to normalized records as they
/// arrive. One collector is scoped to exactly one run; construct a fresh
/// one per run rather than reusing across checks.
#[derive(Debug, Default)]
pub struct Collector {
    events: Vec<Violation>,
    calls: usize,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded violations, in emission order.
    pub fn events(&self) -> &[Violation] {
        &self.events
    }

    /// Number of times the listener callback fired. Stronger signal than
    /// an empty event list: catches a listener that is wired but suppressed.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// All recorded violations rendered as `location:description`, joined
    /// with `"; "`. Empty string when nothing was recorded.
    pub fn summary(&self) -> String {
        self.events
            .iter()
            .map(Violation::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl FindingListener for Collector {
    fn on_finding(&mut self, finding: RawFinding) {
        self.calls += 1;
        self.events.push(Violation::from(finding));
    }
}
