//! # Binary product (C7): union and intersection
//!
//! Builds the union or intersection of two automata by renaming the second automaton's
//! states out of the first's way and fusing a fresh initial state in. Final states are
//! the union of each side's (renamed) final states, plus the new initial state itself
//! when the empty word must be accepted: for union, when either operand's own initial
//! state was final; for intersection, when both were. Without this, an operand that
//! accepts the empty word would lose that acceptance in the product, since the fresh
//! initial state is otherwise never a member of either side's final set.

use crate::algebra::BooleanAlgebra;
use crate::automaton::{Safa, State, Transition};
use crate::error::Result;
use std::collections::BTreeSet;

/// Which binary operation [`Safa::binary_op`] performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProductOp {
    Union,
    Intersection,
}

impl<P: Clone + Eq> Safa<P> {
    /// The union of `self` and `other`: accepts a word iff either accepts it.
    pub fn union_with<A: BooleanAlgebra<Predicate = P>>(
        &self,
        other: &Safa<P>,
        ba: &A,
    ) -> Result<Safa<P>> {
        self.binary_op(other, ba, ProductOp::Union)
    }

    /// The intersection of `self` and `other`: accepts a word iff both accept it.
    pub fn intersection_with<A: BooleanAlgebra<Predicate = P>>(
        &self,
        other: &Safa<P>,
        ba: &A,
    ) -> Result<Safa<P>> {
        self.binary_op(other, ba, ProductOp::Intersection)
    }

    fn binary_op<A: BooleanAlgebra<Predicate = P>>(
        &self,
        other: &Safa<P>,
        ba: &A,
        op: ProductOp,
    ) -> Result<Safa<P>> {
        let offset: State = self.max_state_id + 1;
        let new_initial: State = self.max_state_id + other.max_state_id + 2;

        let mut transitions = Vec::new();

        for &s in &self.states {
            transitions.extend(self.transitions_from(s).iter().cloned());
        }
        for &s in &other.states {
            for t in other.transitions_from(s) {
                transitions.push(Transition::new(
                    t.from + offset,
                    t.guard.clone(),
                    t.to.offset(offset),
                ));
            }
        }

        match op {
            ProductOp::Union => {
                for t in self.transitions_from(self.initial) {
                    transitions.push(Transition::new(new_initial, t.guard.clone(), t.to.clone()));
                }
                for t in other.transitions_from(other.initial) {
                    transitions.push(Transition::new(
                        new_initial,
                        t.guard.clone(),
                        t.to.offset(offset),
                    ));
                }
            }
            ProductOp::Intersection => {
                for t1 in self.transitions_from(self.initial) {
                    for t2 in other.transitions_from(other.initial) {
                        let guard = ba.mk_and(&t1.guard, &t2.guard);
                        if ba.is_satisfiable(&guard)? {
                            let to = t1.to.clone().and(t2.to.offset(offset));
                            transitions.push(Transition::new(new_initial, guard, to));
                        }
                    }
                }
            }
        }

        let mut finals: BTreeSet<State> = self
            .finals
            .iter()
            .copied()
            .chain(other.finals.iter().map(|s| s + offset))
            .collect();

        let accepts_empty = match op {
            ProductOp::Union => {
                self.finals.contains(&self.initial) || other.finals.contains(&other.initial)
            }
            ProductOp::Intersection => {
                self.finals.contains(&self.initial) && other.finals.contains(&other.initial)
            }
        };
        if accepts_empty {
            finals.insert(new_initial);
        }

        Safa::new(transitions, new_initial, finals, ba)
    }
}
