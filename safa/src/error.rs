//! Errors produced by the core. See the [module-level documentation](crate) for the
//! overall error handling philosophy: the only fallible boundary in this crate is the
//! user-supplied [`BooleanAlgebra`](crate::algebra::BooleanAlgebra)'s SAT oracle.

use thiserror::Error;

/// Errors that can escape the core.
///
/// `SolverTimeout` is surfaced unchanged from [`BooleanAlgebra::is_satisfiable`] and
/// [`BooleanAlgebra::get_minterms`](crate::algebra::BooleanAlgebra::get_minterms) through
/// every operation that calls them ([`Safa::normalize`](crate::automaton::Safa::normalize),
/// [`Safa::transition_tables`](crate::automaton::Safa::transition_tables),
/// [`is_equivalent`](crate::equivalence::is_equivalent), ...). `IllegalArgument` is raised at
/// construction time or when a caller misuses a substitution table; it is not recoverable
/// within the core and is not expected to occur for well-formed callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SafaError {
    /// The algebra's satisfiability or minterm oracle exceeded its budget.
    #[error("solver timed out while deciding satisfiability or minterms")]
    SolverTimeout,
    /// A transition, state, or substitution referenced something outside the automaton's
    /// declared universe.
    #[error("illegal argument: {0}")]
    IllegalArgument(String),
}

pub type Result<T> = std::result::Result<T, SafaError>;
