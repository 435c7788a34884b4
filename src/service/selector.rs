//! Candidate selection.
//!
//! Selection is the one deliberately non-deterministic step in the
//! pipeline, so it sits behind a trait that tests can pin down.

/// Picks which candidate description to translate.
pub trait CandidateSelector: Send + Sync {
    /// Return an index in `0..len`. Callers guarantee `len >= 1`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl CandidateSelector for RandomSelector {
    fn pick(&self, len: usize) -> usize {
        fastrand::usize(..len)
    }
}
