//! Selection of the single best candidate.
//!
//! Candidates arrive in discovery order. The incumbent is replaced only by a
//! strictly lower total weight, so among equal totals the first discovered
//! candidate is kept.

use super::edges::EdgeId;

/// A complete path from origin to destination over the reduced graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Edges in travel order.
    pub edges: Vec<EdgeId>,
    /// Sum of edge weights, accumulated in travel order.
    pub weight: f64,
}

/// Best candidate seen so far.
#[derive(Debug, Default)]
pub struct Incumbent {
    best: Option<Candidate>,
    offered: usize,
}

impl Incumbent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate. Returns true if it became the new incumbent.
    pub fn offer(&mut self, candidate: Candidate) -> bool {
        self.offered += 1;

        let improves = self
            .best
            .as_ref()
            .is_none_or(|best| candidate.weight < best.weight);

        if improves {
            self.best = Some(candidate);
        }

        improves
    }

    /// Number of candidates offered so far.
    pub fn offered(&self) -> usize {
        self.offered
    }

    pub fn into_best(self) -> Option<Candidate> {
        self.best
    }
}
