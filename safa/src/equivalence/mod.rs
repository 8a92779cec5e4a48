//! # Equivalence checking (C8)
//!
//! Decides whether two automata accept the same language by bisimulation up to congruence,
//! over pairs of [`StateExpr`] "configurations" rather than pairs of single states, the same
//! worklist shape as `Dfa::equivalent_to`/`Nfa::equivalent_to`, generalized from single states
//! to the positive-Boolean-formula configurations an alternating automaton needs.

pub mod similarity;

pub use similarity::{SimilarityRelation, SyntacticSimilarity};

use crate::algebra::BooleanAlgebra;
use crate::automaton::Safa;
use crate::error::Result;
use crate::expr::StateExpr;
use std::collections::VecDeque;

/// Decides whether `left` and `right` accept the same language, using [`SyntacticSimilarity`]
/// as the memoization relation. See [`is_equivalent_with`] to supply a different
/// [`SimilarityRelation`].
pub fn is_equivalent<A: BooleanAlgebra>(
    left: &Safa<A::Predicate>,
    right: &Safa<A::Predicate>,
    ba: &A,
) -> Result<bool> {
    is_equivalent_with::<A, SyntacticSimilarity>(left, right, ba)
}

/// Decides whether `left` and `right` accept the same language.
///
/// Seeds a worklist with the pair of initial configurations and repeatedly pops a pair
/// `(l, r)`: it enumerates every satisfiable combination of outgoing moves from the atoms of
/// `l`, unconstrained (`ba.mk_true()`); for each resulting guard `g_l` and successor
/// configuration `l'`, it enumerates `right`'s moves from the atoms of `r` *constrained to
/// `g_l`* (the asymmetry the design calls for: only `right`'s enumeration is refined under
/// the guard the left side chose, since the pair is only compared over inputs both sides
/// actually agree could occur). For every resulting `r'`, if `l'` and `r'` disagree on
/// acceptance the automata are inequivalent; otherwise the pair `(l', r')` is added to
/// `similar` and the worklist unless already present.
///
/// Terminates because configurations are built by repeated substitution over each
/// automaton's finite state set, so only finitely many distinct `(l', r')` pairs can ever be
/// produced; `similar` guarantees each is explored at most once.
pub fn is_equivalent_with<A: BooleanAlgebra, R: SimilarityRelation>(
    left: &Safa<A::Predicate>,
    right: &Safa<A::Predicate>,
    ba: &A,
) -> Result<bool> {
    let left_start = StateExpr::atom(left.initial_state());
    let right_start = StateExpr::atom(right.initial_state());

    if left_start.has_model(left.final_states()) != right_start.has_model(right.final_states()) {
        return Ok(false);
    }

    let mut similar = R::default();
    similar.add(&left_start, &right_start);

    let mut worklist = VecDeque::new();
    worklist.push_back((left_start, right_start));

    while let Some((l, r)) = worklist.pop_front() {
        let unconstrained = ba.mk_true();
        let left_moves = left.transition_tables(&l.states(), ba, &unconstrained)?;

        for (guard, left_table) in left_moves {
            let l_next = l.substitute_table(&left_table)?;
            let l_accepts = l_next.has_model(left.final_states());

            let right_moves = right.transition_tables(&r.states(), ba, &guard)?;

            for (_, right_table) in right_moves {
                let r_next = r.substitute_table(&right_table)?;
                let r_accepts = r_next.has_model(right.final_states());

                if l_accepts != r_accepts {
                    return Ok(false);
                }

                if similar.is_member(&l_next, &r_next) {
                    continue;
                }
                similar.add(&l_next, &r_next);
                worklist.push_back((l_next.clone(), r_next));
            }
        }
    }

    Ok(true)
}
