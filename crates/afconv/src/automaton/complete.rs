//! Completion of a partial deterministic automaton.

use crate::automaton::model::Automaton;
use crate::automaton::state::{State, StateSet};
use crate::error::{Error, Result};
use log::debug;
use std::borrow::Cow;

/// Route every missing transition to a sink state.
///
/// The sink is the empty composite state, which subset construction never
/// produces for a reachable state. It loops to itself on every symbol and is
/// not final. An automaton that is already total is returned as is.
pub fn complete(dfa: &Automaton) -> Result<Cow<'_, Automaton>> {
    if !dfa.is_deterministic() {
        return Err(Error::NondeterministicTable {
            operation: "completion",
        });
    }
    if dfa.is_total() {
        return Ok(Cow::Borrowed(dfa));
    }

    let sink = State::Composite(StateSet::new());
    let mut completed = dfa.clone().with_state(sink.clone());
    let states: Vec<State> = completed.states().iter().cloned().collect();
    let mut added = 0;
    for state in states {
        for symbol in dfa.alphabet() {
            if !completed.transitions().contains_key(&state, symbol) {
                completed = completed.with_transition(state.clone(), symbol.clone(), sink.clone());
                added += 1;
            }
        }
    }

    debug!("Completion: {added} transitions routed to {sink}");
    Ok(Cow::Owned(completed))
}
