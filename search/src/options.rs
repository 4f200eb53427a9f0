//! Search run configuration.

use crate::error::SearchError;

/// Child admission rule for the depth-first engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdmissionPolicy {
    /// Skip a child whose id is closed OR already pending on the stack.
    #[default]
    Strict,
    /// The literal closed-AND-pending rule: skip a child only when its id is
    /// closed and pending at the same time.
    ///
    /// Admits re-pushes of visited states and duplicate stack entries. A
    /// re-expanded closed state fails the run with
    /// [`SearchError::DuplicateStateId`].
    Legacy,
}

impl AdmissionPolicy {
    /// Whether a child with the given membership flags is skipped.
    #[must_use]
    pub fn rejects(self, closed: bool, pending: bool) -> bool {
        match self {
            Self::Strict => closed || pending,
            Self::Legacy => closed && pending,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Legacy => "legacy",
        }
    }
}

/// Per-run search options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Stop once this many solutions have been accepted.
    pub requested_solutions: usize,
    /// Depth-first admission rule. Ignored by best-first.
    pub admission: AdmissionPolicy,
}

impl SearchOptions {
    #[must_use]
    pub fn with_requested_solutions(mut self, count: usize) -> Self {
        self.requested_solutions = count;
        self
    }

    #[must_use]
    pub fn with_admission(mut self, admission: AdmissionPolicy) -> Self {
        self.admission = admission;
        self
    }

    /// Pre-flight check.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidOptions`] if `requested_solutions` is 0.
    pub fn validate<E>(&self) -> Result<(), SearchError<E>> {
        if self.requested_solutions == 0 {
            return Err(SearchError::InvalidOptions {
                detail: "requested_solutions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            requested_solutions: 1,
            admission: AdmissionPolicy::Strict,
        }
    }
}
