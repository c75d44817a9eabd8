//! Ordering and joining of formatted lines

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

/// Caller-supplied line-ordering function
pub type Sorter = Box<dyn Fn(Vec<String>) -> Vec<String> + Send + Sync>;

/// How assembled lines are ordered
pub enum SortMode {
    /// Group by a leading `component:` prefix (default)
    Component,
    /// Preserve log order
    Unsorted,
    /// Delegate ordering of the whole sequence to the caller
    Custom(Sorter),
}

impl fmt::Debug for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component => f.write_str("Component"),
            Self::Unsorted => f.write_str("Unsorted"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Orders formatted lines and joins them into the final document
#[derive(Debug)]
pub struct ChangelogAssembler {
    sort: SortMode,
}

impl ChangelogAssembler {
    /// Create an assembler with the given sort mode
    pub fn new(sort: SortMode) -> Self {
        Self { sort }
    }

    /// Order the lines and join them, appending exactly one trailing newline
    pub fn assemble(&self, lines: Vec<String>) -> String {
        debug!(count = lines.len(), sort = ?self.sort, "assembling changelog");
        let ordered = self.order(lines);

        let mut document = ordered.join("\n");
        document.push('\n');
        document
    }

    fn order(&self, mut lines: Vec<String>) -> Vec<String> {
        match &self.sort {
            SortMode::Unsorted => lines,
            SortMode::Custom(sorter) => sorter(lines),
            SortMode::Component => {
                // Stable sort: lines with equal components keep log order.
                lines.sort_by(|a, b| compare_lines(a, b));
                lines
            }
        }
    }
}

impl Default for ChangelogAssembler {
    fn default() -> Self {
        Self::new(SortMode::Component)
    }
}

/// Compare by component prefix when both lines have one, else by full line
fn compare_lines(a: &str, b: &str) -> Ordering {
    match (component(a), component(b)) {
        (Some(ca), Some(cb)) => ca.cmp(cb),
        _ => a.cmp(b),
    }
}

/// Leading `component:` prefix, if any
fn component(line: &str) -> Option<&str> {
    line.split_once(':')
        .map(|(prefix, _)| prefix)
        .filter(|prefix| !prefix.is_empty())
}
