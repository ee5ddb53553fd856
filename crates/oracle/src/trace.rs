//! Labeled intermediate values recorded while building a scenario.
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct TraceEntry {
    pub label: &'static str,
    pub value: String,
}

/// An ordered record of how a scenario was built, shown when a scenario fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn new() -> Trace {
        Default::default()
    }

    #[must_use = "This consumes the trace and returns the extended one"]
    pub fn record(mut self, label: &'static str, value: impl fmt::Display) -> Trace {
        self.entries.push(TraceEntry {
            label,
            value: value.to_string(),
        });
        self
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// The first value recorded under `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let width = self.entries.iter().map(|e| e.label.len()).max().unwrap_or(0);
        for e in self.entries.iter() {
            write!(f, "\n\t{:.<width$}: {}", e.label, e.value, width = width)?;
        }
        write!(f, "\n}}")
    }
}
