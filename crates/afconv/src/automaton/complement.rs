//! Complement of a deterministic automaton.

use crate::automaton::model::Automaton;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use log::debug;

/// Swap final and non-final states.
///
/// Missing transitions stay missing and still reject, so this is the language
/// complement only when `dfa` is total. Use [`complete`](super::complete) first
/// when it is not.
pub fn complement(dfa: &Automaton) -> Result<Automaton> {
    if !dfa.is_deterministic() {
        return Err(Error::NondeterministicTable {
            operation: "complement",
        });
    }

    let final_states: IndexSet<_> = dfa
        .states()
        .iter()
        .filter(|state| !dfa.is_final(state))
        .cloned()
        .collect();

    debug!(
        "Complement: {} final states -> {}",
        dfa.final_states().len(),
        final_states.len()
    );

    Ok(Automaton::from_parts(
        dfa.states().clone(),
        dfa.alphabet().clone(),
        dfa.transitions().clone(),
        dfa.start_state().clone(),
        final_states,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::state::State;

    fn dfa() -> Automaton {
        Automaton::deterministic(State::atomic("q0"))
            .with_transition(State::atomic("q0"), "a".into(), State::atomic("q1"))
            .with_transition(State::atomic("q1"), "a".into(), State::atomic("q2"))
            .with_state(State::atomic("q3"))
            .with_final_state(State::atomic("q1"))
    }

    #[test]
    fn test_complement_flips_finals() {
        let original = dfa();
        let comp = complement(&original).unwrap();

        assert_eq!(comp.states(), original.states());
        assert_eq!(comp.transitions(), original.transitions());
        assert_eq!(comp.start_state(), original.start_state());
        assert_eq!(
            comp.final_states().iter().cloned().collect::<Vec<_>>(),
            vec![State::atomic("q0"), State::atomic("q2"), State::atomic("q3")]
        );
        // Input untouched.
        assert_eq!(original.final_states().len(), 1);
    }

    #[test]
    fn test_complement_involution() {
        let original = dfa();
        let twice = complement(&complement(&original).unwrap()).unwrap();
        assert_eq!(twice.final_states(), original.final_states());
        assert_eq!(twice, original);
    }

    #[test]
    fn test_complement_rejects_nfa_table() {
        let nfa = Automaton::nondeterministic(State::atomic("q0"));
        assert!(matches!(
            complement(&nfa),
            Err(Error::NondeterministicTable { .. })
        ));
    }
}
