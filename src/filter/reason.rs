use std::fmt;

/// A human-readable account of why a recipe survived every pass of a plan.
///
/// Purely informational: it plays no part in deciding inclusion or order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReason {
    clauses: Vec<String>,
}

impl MatchReason {
    pub(super) fn new(clauses: Vec<String>) -> Self {
        Self { clauses }
    }

    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clauses.is_empty() {
            return write!(f, "no filters applied");
        }
        write!(f, "{}", self.clauses.join(" AND "))
    }
}
