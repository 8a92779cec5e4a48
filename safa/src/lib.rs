//! # safa
//!
//! `safa` is a library for Symbolic Alternating Finite Automata: automata whose transitions
//! carry a predicate drawn from an abstract Boolean algebra instead of a concrete alphabet
//! symbol, and whose transition target is a positive Boolean formula over states instead of
//! a single successor. Alternation (an `AND` of branches, all of which must accept) and
//! symbolic guards (one transition standing in for every symbol that satisfies its predicate)
//! let a single `Safa` represent automata that would blow up exponentially as a classical NFA.
//!
//! ## Usage
//!
//! The library never constructs predicates itself; callers supply a [`BooleanAlgebra`]
//! implementation describing their own theory of predicates (byte ranges, character classes,
//! tuples of sub-predicates, ...) and the core combines, refines and asks the algebra to
//! decide satisfiability:
//!
//! ```rust
//! use safa::algebra::{BooleanAlgebra, Minterm};
//! use safa::automaton::{Safa, Transition};
//! use safa::expr::StateExpr;
//! use safa::error::Result;
//! use std::collections::BTreeSet;
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! enum BytePred { True, False, Eq(u8) }
//!
//! struct ByteAlgebra;
//!
//! impl BooleanAlgebra for ByteAlgebra {
//!     type Predicate = BytePred;
//!     type Domain = u8;
//!
//!     fn mk_and(&self, p: &BytePred, q: &BytePred) -> BytePred {
//!         match (p, q) {
//!             (BytePred::False, _) | (_, BytePred::False) => BytePred::False,
//!             (BytePred::True, x) | (x, BytePred::True) => x.clone(),
//!             (BytePred::Eq(a), BytePred::Eq(b)) if a == b => BytePred::Eq(*a),
//!             _ => BytePred::False,
//!         }
//!     }
//!     fn mk_or(&self, p: &BytePred, q: &BytePred) -> BytePred {
//!         if p == q { p.clone() } else { BytePred::True }
//!     }
//!     fn mk_not(&self, p: &BytePred) -> BytePred {
//!         match p {
//!             BytePred::True => BytePred::False,
//!             BytePred::False => BytePred::True,
//!             BytePred::Eq(_) => BytePred::True,
//!         }
//!     }
//!     fn mk_true(&self) -> BytePred { BytePred::True }
//!     fn mk_false(&self) -> BytePred { BytePred::False }
//!     fn eval(&self, p: &BytePred, a: &u8) -> bool {
//!         match p {
//!             BytePred::True => true,
//!             BytePred::False => false,
//!             BytePred::Eq(b) => a == b,
//!         }
//!     }
//!     fn is_satisfiable(&self, p: &BytePred) -> Result<bool> {
//!         Ok(!matches!(p, BytePred::False))
//!     }
//!     fn get_minterms(&self, preds: &[BytePred]) -> Result<Vec<(BytePred, Minterm)>> {
//!         // A real algebra partitions the input space; this toy one only ever sees
//!         // `Eq` guards that are pairwise disjoint already, so each input predicate is
//!         // already its own minterm.
//!         Ok(preds
//!             .iter()
//!             .enumerate()
//!             .map(|(i, p)| (p.clone(), Minterm::from_positive_indices([i])))
//!             .collect())
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let ba = ByteAlgebra;
//!     // s0 --Eq(b'a')--> s1, s1 is final: accepts exactly the one-byte string "a"
//!     let transitions = vec![Transition::new(0, BytePred::Eq(b'a'), StateExpr::atom(1))];
//!     let safa: Safa<BytePred> = Safa::new(transitions, 0, BTreeSet::from([1]), &ba)?;
//!     assert!(safa.accepts(&[b'a'], &ba)?);
//!     assert!(!safa.accepts(&[b'b'], &ba)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Operations
//!
//! This library currently supports:
//!
//! * Constructing a [`Safa`](automaton::Safa) from a transition list ([`Safa::new`](automaton::Safa::new))
//! * [Evaluating](automaton::Safa::accepts) whether a word is accepted
//! * [Enumerating transition tables](automaton::Safa::transition_tables) under a constraining guard
//! * [Normalizing](automaton::Safa::normalize) an automaton's outgoing guards into a partition
//! * [Union](automaton::Safa::union_with) and [intersection](automaton::Safa::intersection_with) of two automata
//! * [Checking language equivalence](equivalence::is_equivalent) of two automata
//!
//! ## Work-in-progress notes
//!
//! Concrete Boolean-algebra theories (predicates over characters, integers, tuples of
//! sub-predicates) are out of scope for this crate; see the `examples` directory of the
//! workspace for theories built on top of it. Parsing a `Safa` from a textual format is not
//! yet implemented.

pub mod algebra;
pub mod automaton;
pub mod equivalence;
pub mod error;
pub mod expr;

pub use algebra::BooleanAlgebra;
pub use automaton::{Safa, Transition};
pub use equivalence::is_equivalent;
pub use error::{Result, SafaError};
pub use expr::StateExpr;
