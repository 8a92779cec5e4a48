//! # Normalization (C6)
//!
//! Rebuilds a `Safa` so that every source state's outgoing guards are pairwise unsatisfiable
//! ("mintermized"): for any two distinct outgoing transitions of the same state, no input
//! symbol satisfies both guards. This is the canonical form [`Safa::new`] always returns,
//! and what the equivalence checker's transition-table enumeration relies on to avoid
//! double-counting a symbol under two different branches of the same state.

use crate::algebra::BooleanAlgebra;
use crate::automaton::{Safa, Transition};
use crate::error::Result;
use crate::expr::StateExpr;

impl<P: Clone + Eq> Safa<P> {
    /// Mintermizes every state's outgoing guards via [`BooleanAlgebra::get_minterms`] and
    /// rebuilds the transition set from the result (§4.6). For each source state `s` with
    /// outgoing guards `G_s`, each returned minterm with a non-empty positive set becomes one
    /// new transition from `s`, guarded by the minterm's predicate, targeting the `Or` of the
    /// original targets selected by the minterm's positive bits. Minterms with an empty
    /// positive set (none of `s`'s transitions fire) are dropped, not emitted as a transition
    /// to `False`.
    ///
    /// Idempotent up to `StateExpr` equivalence: normalizing an already-normalized `Safa`
    /// reproduces the same transitions, since each state's guards are already a partition and
    /// `get_minterms` of an existing partition returns that partition back (one minterm per
    /// input guard, plus a negative-only minterm that is dropped for having an empty positive
    /// set).
    pub fn normalize<A: BooleanAlgebra<Predicate = P>>(&self, ba: &A) -> Result<Safa<P>> {
        let mut transitions = Vec::new();

        for &s in &self.states {
            let outgoing = self.transitions_from(s);
            if outgoing.is_empty() {
                continue;
            }
            let guards: Vec<P> = outgoing.iter().map(|t| t.guard.clone()).collect();
            let minterms = ba.get_minterms(&guards)?;

            for (guard, positive) in minterms {
                if positive.is_empty() {
                    continue;
                }
                let combined_to = positive
                    .iter()
                    .fold(StateExpr::False, |acc, idx| acc.or(outgoing[idx].to.clone()));
                transitions.push(Transition::new(s, guard, combined_to));
            }
        }

        Ok(Safa::new_trusted(
            self.states.clone(),
            self.initial,
            self.finals.clone(),
            transitions,
        ))
    }
}
