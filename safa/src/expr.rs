//! # State expressions
//!
//! A [`StateExpr`] is a positive Boolean formula whose atoms are state identifiers. It is
//! the shape of both a transition's target (§3 "StateExpression") and of a "configuration"
//! tracked while running or comparing automata: a set of states an alternating automaton
//! could simultaneously be in, combined with AND (all branches must eventually accept) and
//! OR (some branch must).
//!
//! `StateExpr` values are immutable and freely shared by structure; there is no
//! hash-consing here (see the module on [`crate::equivalence::SimilarityRelation`] for how
//! semantic, rather than structural, equality of expressions is recovered where it matters).

use crate::automaton::State;
use std::collections::BTreeSet;

/// A positive Boolean formula over state identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StateExpr {
    /// The formula satisfied by no model.
    False,
    /// The formula satisfied by every model.
    True,
    /// A single state atom.
    Atom(State),
    /// Disjunction.
    Or(Box<StateExpr>, Box<StateExpr>),
    /// Conjunction.
    And(Box<StateExpr>, Box<StateExpr>),
}

impl StateExpr {
    /// The formula denoting a single state.
    pub fn atom(state: State) -> Self {
        StateExpr::Atom(state)
    }

    /// Disjunction with `other`. Short-circuits on `True`/`False` to keep expressions small,
    /// but performs no deeper simplification; semantic equality of `StateExpr`s is never
    /// relied upon by the core, only [`StateExpr::has_model`].
    pub fn or(self, other: StateExpr) -> StateExpr {
        match (self, other) {
            (StateExpr::False, x) | (x, StateExpr::False) => x,
            (StateExpr::True, _) | (_, StateExpr::True) => StateExpr::True,
            (a, b) => StateExpr::Or(Box::new(a), Box::new(b)),
        }
    }

    /// Conjunction with `other`.
    pub fn and(self, other: StateExpr) -> StateExpr {
        match (self, other) {
            (StateExpr::True, x) | (x, StateExpr::True) => x,
            (StateExpr::False, _) | (_, StateExpr::False) => StateExpr::False,
            (a, b) => StateExpr::And(Box::new(a), Box::new(b)),
        }
    }

    /// Renames every atom `s` to `s + k`. Equivalent to, but cheaper than,
    /// `self.substitute(|s| StateExpr::atom(s + k))`.
    pub fn offset(&self, k: State) -> StateExpr {
        match self {
            StateExpr::False => StateExpr::False,
            StateExpr::True => StateExpr::True,
            StateExpr::Atom(s) => StateExpr::Atom(s + k),
            StateExpr::Or(a, b) => StateExpr::Or(Box::new(a.offset(k)), Box::new(b.offset(k))),
            StateExpr::And(a, b) => StateExpr::And(Box::new(a.offset(k)), Box::new(b.offset(k))),
        }
    }

    /// The atoms appearing in this formula.
    pub fn states(&self) -> BTreeSet<State> {
        let mut out = BTreeSet::new();
        self.collect_states(&mut out);
        out
    }

    fn collect_states(&self, out: &mut BTreeSet<State>) {
        match self {
            StateExpr::False | StateExpr::True => {}
            StateExpr::Atom(s) => {
                out.insert(*s);
            }
            StateExpr::Or(a, b) | StateExpr::And(a, b) => {
                a.collect_states(out);
                b.collect_states(out);
            }
        }
    }

    /// Whether assigning `true` to exactly the states in `model` satisfies this formula.
    pub fn has_model(&self, model: &BTreeSet<State>) -> bool {
        match self {
            StateExpr::False => false,
            StateExpr::True => true,
            StateExpr::Atom(s) => model.contains(s),
            StateExpr::Or(a, b) => a.has_model(model) || b.has_model(model),
            StateExpr::And(a, b) => a.has_model(model) && b.has_model(model),
        }
    }

    /// Structurally replaces each atom `s` with `sigma(s)`. Every atom in [`StateExpr::states`]
    /// must have an entry in `sigma`; the core never substitutes a `StateExpr` with atoms
    /// outside the substitution's domain (callers that do get a logic error, not silent
    /// truncation; see [`StateExpr::substitute_table`] for the table-based form the
    /// transition-table enumerator uses).
    pub fn substitute(&self, sigma: &impl Fn(State) -> StateExpr) -> StateExpr {
        match self {
            StateExpr::False => StateExpr::False,
            StateExpr::True => StateExpr::True,
            StateExpr::Atom(s) => sigma(*s),
            StateExpr::Or(a, b) => a.substitute(sigma).or(b.substitute(sigma)),
            StateExpr::And(a, b) => a.substitute(sigma).and(b.substitute(sigma)),
        }
    }

    /// Structural substitution against a dense table (`table[s]` is the replacement for atom
    /// `s`, `None` meaning "this atom was not provided by the caller"). Returns
    /// `Err(SafaError::IllegalArgument(_))` if an atom of `self` has no entry, instead of the
    /// `panic` a direct `table[s].unwrap()` would give; substitution tables here are built
    /// from solver-chosen transition refinements, not user input, but the bounds check is
    /// cheap and turns a would-be panic into a diagnosable error.
    pub fn substitute_table(
        &self,
        table: &[Option<StateExpr>],
    ) -> Result<StateExpr, crate::error::SafaError> {
        match self {
            StateExpr::False => Ok(StateExpr::False),
            StateExpr::True => Ok(StateExpr::True),
            StateExpr::Atom(s) => table.get(*s).cloned().flatten().ok_or_else(|| {
                crate::error::SafaError::IllegalArgument(format!(
                    "substitution table has no entry for state {s}"
                ))
            }),
            StateExpr::Or(a, b) => Ok(a.substitute_table(table)?.or(b.substitute_table(table)?)),
            StateExpr::And(a, b) => Ok(a.substitute_table(table)?.and(b.substitute_table(table)?)),
        }
    }
}
