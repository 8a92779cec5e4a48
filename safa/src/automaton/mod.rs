//! # Symbolic Alternating Finite Automata
//!
//! A [`Safa`] is a finite automaton whose transitions carry a predicate guard from an
//! abstract [`BooleanAlgebra`] instead of a concrete symbol, and whose transition target is
//! a positive Boolean formula over states ([`StateExpr`]) instead of a single successor
//! state. This module holds the data model (§3 of the design), construction (§4.3) and the
//! reference `accepts` semantics (§4.4). The transition-table enumerator, normalizer and
//! binary product live in the sibling [`enumerate`], [`normalize`] and [`product`] modules,
//! each re-exported as methods on [`Safa`] the way `dandy::nfa`'s `eval`/`parse`/`words`
//! submodules attach methods to `Nfa`.

pub mod enumerate;
pub mod normalize;
pub mod product;

use crate::algebra::BooleanAlgebra;
use crate::error::{Result, SafaError};
use crate::expr::StateExpr;
use std::collections::BTreeSet;

/// An opaque, dense, nonnegative state identifier.
pub type State = usize;

/// A single transition: leave `from` when the input satisfies `guard`, and land on every
/// state a model of `to` assigns `true`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<P> {
    pub from: State,
    pub guard: P,
    pub to: StateExpr,
}

impl<P> Transition<P> {
    pub fn new(from: State, guard: P, to: StateExpr) -> Self {
        Transition { from, guard, to }
    }
}

/// A Symbolic Alternating Finite Automaton over predicates of type `P`.
///
/// Constructed exclusively through [`Safa::new`] (the `mk_safa` of the design) or
/// [`Safa::empty`]; every other operation (`normalize`, `union_with`, `intersection_with`)
/// consumes `&self` and returns a new, independent `Safa`. `states`/`finals` are kept as
/// `BTreeSet` so iteration order, and therefore every downstream computation that iterates
/// them, is deterministic (see the design's §5 ordering requirement).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Safa<P> {
    pub(crate) states: BTreeSet<State>,
    pub(crate) initial: State,
    pub(crate) finals: BTreeSet<State>,
    /// Indexed by `State`, `moves_from[s]` holds every transition leaving `s`, in insertion
    /// order. Sized to `max_state_id + 1` so callers can size their own per-state arrays off
    /// [`Safa::max_state_id`] for O(1) access.
    pub(crate) moves_from: Vec<Vec<Transition<P>>>,
    pub(crate) max_state_id: State,
}

impl<P: Clone + Eq> Safa<P> {
    /// Builds a new `Safa` from a transition list, an initial state, and a set of final
    /// states, normalizing before returning (§4.3). Transitions whose guard is
    /// unsatisfiable under `ba` are silently dropped, not an error. Fails with
    /// [`SafaError::IllegalArgument`] if `initial`, or any transition's `from` or any atom of
    /// its `to`, is not among the states implied by `initial`/`finals`/the transition list
    /// itself.
    pub fn new<A: BooleanAlgebra<Predicate = P>>(
        transitions: Vec<Transition<P>>,
        initial: State,
        finals: BTreeSet<State>,
        ba: &A,
    ) -> Result<Safa<P>> {
        let mut states: BTreeSet<State> = BTreeSet::new();
        states.insert(initial);
        states.extend(finals.iter().copied());

        let mut kept = Vec::with_capacity(transitions.len());
        for t in transitions {
            if ba.is_satisfiable(&t.guard)? {
                states.insert(t.from);
                states.extend(t.to.states());
                kept.push(t);
            }
        }

        let max_state_id = states.iter().copied().max().unwrap_or(initial);
        let mut moves_from = vec![Vec::new(); max_state_id + 1];
        for t in kept {
            moves_from[t.from].push(t);
        }

        let safa = Safa {
            states,
            initial,
            finals,
            moves_from,
            max_state_id,
        };
        safa.normalize(ba)
    }

    /// Builds a new `Safa` from an already-mintermized transition list without
    /// re-normalizing or re-checking satisfiability. Used internally by
    /// [`normalize`](normalize) and [`product`](product), which construct their transitions
    /// from calls already routed through the algebra's satisfiability check.
    pub(crate) fn new_trusted(
        states: BTreeSet<State>,
        initial: State,
        finals: BTreeSet<State>,
        transitions: Vec<Transition<P>>,
    ) -> Safa<P> {
        let max_state_id = states.iter().copied().max().unwrap_or(initial);
        let mut moves_from = vec![Vec::new(); max_state_id + 1];
        for t in transitions {
            moves_from[t.from].push(t);
        }
        Safa {
            states,
            initial,
            finals,
            moves_from,
            max_state_id,
        }
    }

    /// The automaton accepting the empty language: one state, no transitions, no final
    /// states. Per the source this crate is grounded on, `max_state_id` is `1` even though
    /// only state `0` is populated (preserved deliberately, see DESIGN.md), since callers
    /// may size per-state arrays off it.
    pub fn empty<A: BooleanAlgebra<Predicate = P>>(_ba: &A) -> Safa<P> {
        Safa {
            states: BTreeSet::from([0]),
            initial: 0,
            finals: BTreeSet::new(),
            moves_from: vec![Vec::new(), Vec::new()],
            max_state_id: 1,
        }
    }

    /// Reference semantics: runs the automaton backward over `word`, as specified in §4.4.
    /// Intended for testing the faster incremental traversal the transition-table enumerator
    /// permits, not for production use (it is linear in transitions per symbol, with no
    /// sharing across symbols).
    pub fn accepts<A: BooleanAlgebra<Predicate = P>>(
        &self,
        word: &[A::Domain],
        ba: &A,
    ) -> Result<bool> {
        let mut current = self.finals.clone();
        for a in word.iter().rev() {
            let mut next = BTreeSet::new();
            for state in &self.states {
                for t in &self.moves_from[*state] {
                    if ba.eval(&t.guard, a) && t.to.has_model(&current) {
                        next.insert(t.from);
                    }
                }
            }
            if next.is_empty() {
                return Ok(false);
            }
            current = next;
        }
        Ok(current.contains(&self.initial))
    }

    /// The states of this automaton, in ascending order.
    pub fn states(&self) -> &BTreeSet<State> {
        &self.states
    }

    /// The initial state.
    pub fn initial_state(&self) -> State {
        self.initial
    }

    /// The final (accepting) states.
    pub fn final_states(&self) -> &BTreeSet<State> {
        &self.finals
    }

    /// The largest state identifier ever seen by this automaton; per-state arrays should be
    /// sized to `max_state_id() + 1`.
    pub fn max_state_id(&self) -> State {
        self.max_state_id
    }

    /// The transitions leaving `state`, in insertion order. Empty if `state` is out of range
    /// or has no outgoing transitions.
    pub fn transitions_from(&self, state: State) -> &[Transition<P>] {
        self.moves_from
            .get(state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The total number of transitions stored across all states.
    pub fn transition_count(&self) -> usize {
        self.moves_from.iter().map(Vec::len).sum()
    }

    pub(crate) fn check_state_universe(&self, state: State) -> Result<()> {
        if self.states.contains(&state) {
            Ok(())
        } else {
            Err(SafaError::IllegalArgument(format!(
                "state {state} is not part of this automaton's declared universe"
            )))
        }
    }
}

/// Constructs a new `Safa` from transitions, an initial state, and final states,
/// normalizing before returning. Free-function form of [`Safa::new`], matching the design's
/// `mk_safa(transitions, initial, finals, ba)` entry point.
pub fn mk_safa<A: BooleanAlgebra>(
    transitions: Vec<Transition<A::Predicate>>,
    initial: State,
    finals: BTreeSet<State>,
    ba: &A,
) -> Result<Safa<A::Predicate>> {
    Safa::new(transitions, initial, finals, ba)
}

/// The automaton accepting the empty language. Free-function form of [`Safa::empty`].
pub fn get_empty<A: BooleanAlgebra>(ba: &A) -> Safa<A::Predicate> {
    Safa::empty(ba)
}
