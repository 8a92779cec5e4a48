//! # Transition-table enumeration (C5)
//!
//! Given a set of states and a constraining guard, [`Safa::transition_tables`] enumerates
//! every satisfiable combination of "what each of these states does next", refining one
//! state at a time and pruning unsatisfiable combinations with the algebra's SAT oracle as
//! soon as they arise. This is the algorithmic workhorse both the normalizer and the
//! equivalence checker are built on.

use crate::algebra::BooleanAlgebra;
use crate::automaton::{Safa, State};
use crate::error::Result;
use crate::expr::StateExpr;
use std::collections::BTreeSet;

/// A substitution table indexed by [`State`]: `table[s]` is the chosen successor for state
/// `s`, or `None` for a state the caller did not ask about. Callers must only substitute
/// atoms they themselves provided in the `states` set passed to
/// [`Safa::transition_tables`]; see [`StateExpr::substitute_table`](crate::expr::StateExpr::substitute_table).
pub type SubstitutionTable = Vec<Option<StateExpr>>;

impl<P: Clone + Eq> Safa<P> {
    /// Enumerates every satisfiable combination of outgoing guards chosen at each state in
    /// `states`, refined under `constraint`.
    ///
    /// Starts from the singleton list `[(constraint, empty_table)]` and, for each state in
    /// `states` (visited in ascending numeric order for determinism), replaces the current
    /// list with one entry per `(existing entry, outgoing transition of that state)` pair
    /// whose conjoined guard is satisfiable. On return:
    ///
    /// - the returned guards are pairwise unsatisfiable with each other's conjunction,
    /// - their disjunction equals the portion of `constraint` actually covered by some
    ///   combination of outgoing transitions from `states`,
    /// - every satisfiable combination appears exactly once,
    /// - table entries for states outside `states` are `None`.
    ///
    /// A state in `states` with no outgoing transitions collapses the whole list to empty:
    /// an alternating configuration needs every one of its atoms to have *some* successor,
    /// so if one cannot step at all, this constrained region of the joint state space has no
    /// successor configuration either.
    pub fn transition_tables<A: BooleanAlgebra<Predicate = P>>(
        &self,
        states: &BTreeSet<State>,
        ba: &A,
        constraint: &P,
    ) -> Result<Vec<(P, SubstitutionTable)>> {
        for &s in states {
            self.check_state_universe(s)?;
        }

        let empty_table: SubstitutionTable = vec![None; self.max_state_id + 1];
        let mut current = vec![(constraint.clone(), empty_table)];

        for &s in states {
            let mut next = Vec::new();
            for (guard, table) in &current {
                for t in self.transitions_from(s) {
                    let refined = ba.mk_and(guard, &t.guard);
                    if ba.is_satisfiable(&refined)? {
                        let mut table = table.clone();
                        table[s] = Some(t.to.clone());
                        next.push((refined, table));
                    }
                }
            }
            current = next;
        }

        Ok(current)
    }
}
