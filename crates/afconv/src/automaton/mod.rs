//! Finite automata and the conversions between them.
//!
//! This module provides:
//! - Epsilon closure computation (one-hop or transitive)
//! - Subset construction (NFA to DFA conversion)
//! - Complement, completion, final-state normalization and reversal
//! - Deterministic and set-based simulation

mod complement;
mod complete;
mod epsilon_closure;
mod model;
mod nfa;
mod normalize;
mod reverse;
mod simulate;
mod state;
mod subset_construction;
mod symbol;
mod transitions;

#[cfg(test)]
mod tests;

pub use complement::complement;
pub use complete::complete;
pub use epsilon_closure::{epsilon_closures, ClosurePolicy, EpsilonClosureTable};
pub use model::Automaton;
pub use nfa::Nfa;
pub use normalize::{normalize_final_states, SYNTHETIC_FINAL_LABEL};
pub use reverse::reverse;
pub use simulate::{simulate, simulate_nondeterministic};
pub use state::{CanonicalSet, State, StateLabel, StateSet, Targets};
pub use subset_construction::{determinize, state_numbering, subset_construction};
pub use symbol::{parse_word, Symbol, EPSILON_LABEL};
pub use transitions::{Edge, TransitionTable};
