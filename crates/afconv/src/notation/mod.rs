//! The line-oriented text notation for automata.
//!
//! ```text
//! states = q0, q1, q2
//! symbols = a, b, vazio
//! transitions = {
//! (q0, a) -> q1
//! (q1, vazio) -> q2
//! }
//! start_state = q0
//! final_states = q2
//! ```
//!
//! The reader also takes `q0: inicial` for the start state, `F: q2` for the
//! final states and `w: 101` for a word to simulate.

mod reader;
mod writer;

pub use reader::parse_description;
pub use writer::write_automaton;
