//! Conversion of epsilon-NFAs into DFAs, and the complement and reverse
//! automata derived from them.

pub mod automaton;
pub mod description;
pub mod error;
pub mod notation;
pub mod pipeline;

pub use error::{Error, Result};
