//! # Similarity relation (§4.9)
//!
//! A monotone set of `(left, right)` [`StateExpr`] pairs, closed under whatever notion of
//! Boolean congruence the implementation chooses. The equivalence checker uses this to avoid
//! re-exploring a pair of configurations it has already proven bisimilar.

use crate::expr::StateExpr;
use std::collections::HashSet;

/// A memoized relation over pairs of configurations, used by
/// [`is_equivalent_with`](crate::equivalence::is_equivalent_with) to terminate the worklist
/// search. `add` records a pair; `is_member` answers whether a pair is implied by everything
/// recorded so far.
///
/// A conservative implementation may use plain syntactic equality (see
/// [`SyntacticSimilarity`]) and still be sound: it terminates more slowly (never treats two
/// differently-shaped but semantically equal expressions as "already seen"), but it never
/// wrongly calls two inequivalent automata equivalent. A caller with access to a real SAT
/// oracle over state atoms can implement a semantic, congruence-closure-backed relation
/// instead; the checker is generic over this trait specifically so that substitution is
/// possible without this crate depending on a concrete solver.
pub trait SimilarityRelation: Default {
    /// Records that `left` and `right` are known bisimilar.
    fn add(&mut self, left: &StateExpr, right: &StateExpr);

    /// Whether `(left, right)` is implied by everything recorded so far.
    fn is_member(&self, left: &StateExpr, right: &StateExpr) -> bool;
}

/// The conservative default: `is_member` is plain set membership (up to `StateExpr`'s
/// structural `PartialEq`), plus the trivial case `left == right`. Sound for any recorded
/// set, but not complete: two recorded pairs never compose into a third conclusion the way
/// a congruence closure would.
#[derive(Debug, Clone, Default)]
pub struct SyntacticSimilarity {
    pairs: HashSet<(StateExpr, StateExpr)>,
}

impl SimilarityRelation for SyntacticSimilarity {
    fn add(&mut self, left: &StateExpr, right: &StateExpr) {
        self.pairs.insert((left.clone(), right.clone()));
    }

    fn is_member(&self, left: &StateExpr, right: &StateExpr) -> bool {
        left == right || self.pairs.contains(&(left.clone(), right.clone()))
    }
}
