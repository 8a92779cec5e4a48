//! # Predicate algebra
//!
//! The core is generic over an abstract Boolean algebra of predicates, supplied by the
//! caller. A [`BooleanAlgebra`] provides closure under conjunction, disjunction and
//! negation, a satisfiability oracle, and a minterm enumerator; the core never inspects
//! the structure of a predicate, only combines and asks the algebra about it.
//!
//! Concrete theories (predicates over characters, integers, tuples, ...) are collaborators
//! outside this crate: `safa` only consumes the capability set below. Implementors are
//! expected to have their own, possibly expensive, SAT backend; [`BooleanAlgebra::is_satisfiable`]
//! and [`BooleanAlgebra::get_minterms`] are the only fallible operations in this crate, since
//! a SAT query may time out.
//!
//! ## Example
//! A toy algebra over single bytes, used in this crate's own tests, looks like:
//! ```
//! use safa::algebra::{BooleanAlgebra, Minterm};
//! use safa::error::Result;
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
//!         if p == q { p.clone() } else { BytePred::True } // coarse, but a valid over-approximation
//!     }
//!     fn mk_not(&self, p: &BytePred) -> BytePred {
//!         match p {
//!             BytePred::True => BytePred::False,
//!             BytePred::False => BytePred::True,
//!             BytePred::Eq(_) => BytePred::True, // same coarseness as mk_or
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
//!         unimplemented!("see safa::tests for a full minterm-capable algebra")
//!     }
//! }
//! ```

use crate::error::Result;
use bit_set::BitSet;
use std::fmt::Debug;
use std::hash::Hash;

/// A minterm's positive-polarity set: if bit `i` is set, the `i`-th predicate passed to
/// [`BooleanAlgebra::get_minterms`] is required *positive* (not negated) in this minterm.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Minterm(BitSet);

impl Minterm {
    /// Builds a minterm from the positive indices.
    pub fn from_positive_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Minterm(indices.into_iter().collect())
    }

    /// Whether the `idx`-th input predicate is required positive in this minterm.
    pub fn contains(&self, idx: usize) -> bool {
        self.0.contains(idx)
    }

    /// Whether no input predicate is required positive (the minterm is the conjunction of
    /// all-negated inputs). Normalization drops transitions built from such an empty minterm.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the positive indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter()
    }
}

/// The capability set consumed by the core: closure operations, a satisfiability oracle,
/// and a minterm splitter. See the [module-level documentation](self) for the contract each
/// method must satisfy.
pub trait BooleanAlgebra {
    /// An opaque predicate value. The core only ever clones, hashes, compares and combines
    /// these through the algebra; it never inspects their structure.
    type Predicate: Clone + Eq + Hash + Debug;

    /// The concrete alphabet symbol type `eval` and [`Safa::accepts`](crate::automaton::Safa::accepts)
    /// operate over.
    type Domain;

    /// Conjunction.
    fn mk_and(&self, p: &Self::Predicate, q: &Self::Predicate) -> Self::Predicate;
    /// Disjunction.
    fn mk_or(&self, p: &Self::Predicate, q: &Self::Predicate) -> Self::Predicate;
    /// Negation.
    fn mk_not(&self, p: &Self::Predicate) -> Self::Predicate;
    /// The predicate satisfied by every symbol.
    fn mk_true(&self) -> Self::Predicate;
    /// The predicate satisfied by no symbol.
    fn mk_false(&self) -> Self::Predicate;

    /// Evaluates a predicate against a concrete symbol. Used only by the reference
    /// [`Safa::accepts`](crate::automaton::Safa::accepts) semantics.
    fn eval(&self, p: &Self::Predicate, a: &Self::Domain) -> bool;

    /// Whether some symbol satisfies `p`. May time out on a hard theory.
    fn is_satisfiable(&self, p: &Self::Predicate) -> Result<bool>;

    /// Splits `preds` into the satisfiable conjunctions of chosen polarities ("minterms").
    /// The union of the returned predicates is `true`; any two are pairwise unsatisfiable
    /// when conjoined; every satisfiable combination of `±preds[i]` is represented exactly
    /// once. May time out.
    fn get_minterms(&self, preds: &[Self::Predicate]) -> Result<Vec<(Self::Predicate, Minterm)>>;
}
