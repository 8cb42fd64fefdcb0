//! # Structured Violations
//!
//! A failed validation produces an ordered list of [`Violation`]s, one per
//! schema keyword that rejected the value. Each violation carries the JSON
//! Pointer of the offending value, the schema keyword path that rejected it,
//! and a human-readable message naming the expected and received values.

use std::fmt;

/// One schema keyword's objection to a channel value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Where in the channel value: `/var3`, `/0/nested`, or empty for the
    /// value itself.
    pub instance_path: String,
    /// The keyword that objected, e.g. `/properties/var3/type`.
    pub schema_path: String,
    /// What was expected and what arrived.
    pub message: String,
}

impl Violation {
    /// The instance path as shown in failure reports; `(root)` for the whole
    /// value.
    pub fn location(&self) -> &str {
        if self.instance_path.is_empty() {
            "(root)"
        } else {
            &self.instance_path
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.location(), self.message)
    }
}

/// Everything a channel value got wrong, in the order the validator found it.
///
/// Never empty when returned from [`SchemaRef::validate`](crate::SchemaRef::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolations {
    violations: Vec<Violation>,
    omitted: usize,
}

impl SchemaViolations {
    /// Report built from `violations`, none omitted yet.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self {
            violations,
            omitted: 0,
        }
    }

    /// Violations kept in the report.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether the report lists nothing.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Number of violations dropped by [`truncate`](Self::truncate).
    pub fn omitted(&self) -> usize {
        self.omitted
    }

    /// Keep at most `max` violations, counting the rest as omitted.
    pub fn truncate(mut self, max: usize) -> Self {
        if self.violations.len() > max {
            self.omitted += self.violations.len() - max;
            self.violations.truncate(max);
        }
        self
    }
}

impl fmt::Display for SchemaViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        if self.omitted > 0 {
            if !self.violations.is_empty() {
                writeln!(f)?;
            }
            write!(f, "  ... and {} more", self.omitted)?;
        }
        Ok(())
    }
}
