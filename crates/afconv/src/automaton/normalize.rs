//! Reduction of a DFA to a single final state.

use crate::automaton::model::Automaton;
use crate::automaton::state::State;
use crate::automaton::symbol::Symbol;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use log::{debug, trace};
use std::borrow::Cow;

/// Base label of the synthetic final state.
pub const SYNTHETIC_FINAL_LABEL: &str = "qf";

/// Give `dfa` exactly one final state.
///
/// With more than one final state, a fresh synthetic state becomes the only
/// final state and every former final state gets an epsilon edge to it. The
/// start state and all other transitions are kept. With zero or one final
/// state the automaton is returned borrowed and unchanged.
pub fn normalize_final_states(dfa: &Automaton) -> Result<Cow<'_, Automaton>> {
    if !dfa.is_deterministic() {
        return Err(Error::NondeterministicTable {
            operation: "final state normalization",
        });
    }
    if dfa.final_states().len() <= 1 {
        trace!("Normalization skipped: {} final states", dfa.final_states().len());
        return Ok(Cow::Borrowed(dfa));
    }

    if let Some(state) = dfa
        .final_states()
        .iter()
        .find(|state| dfa.transitions().contains_key(state, &Symbol::Epsilon))
    {
        return Err(Error::ExistingEpsilonEdge {
            state: state.to_string(),
        });
    }

    let synthetic = State::Synthetic(dfa.fresh_label(SYNTHETIC_FINAL_LABEL));
    let mut transitions = dfa.transitions().clone();
    for state in dfa.final_states() {
        trace!("{state} -vazio-> {synthetic}");
        transitions.add(state.clone(), Symbol::Epsilon, synthetic.clone());
    }

    let mut states = dfa.states().clone();
    states.insert(synthetic.clone());
    let mut final_states = IndexSet::new();
    final_states.insert(synthetic.clone());

    debug!(
        "Normalization: {} final states merged into {synthetic}",
        dfa.final_states().len()
    );

    Ok(Cow::Owned(Automaton::from_parts(
        states,
        dfa.alphabet().clone(),
        transitions,
        dfa.start_state().clone(),
        final_states,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::simulate::simulate;
    use crate::automaton::symbol::parse_word;

    fn two_finals() -> Automaton {
        // q0 -a-> q1 (final), q1 -b-> q2, q2 -a-> q3 (final), q3 -b-> q0
        Automaton::deterministic(State::atomic("q0"))
            .with_transition(State::atomic("q0"), "a".into(), State::atomic("q1"))
            .with_transition(State::atomic("q1"), "b".into(), State::atomic("q2"))
            .with_transition(State::atomic("q2"), "a".into(), State::atomic("q3"))
            .with_transition(State::atomic("q3"), "b".into(), State::atomic("q0"))
            .with_final_state(State::atomic("q1"))
            .with_final_state(State::atomic("q3"))
    }

    #[test]
    fn test_single_synthetic_final() {
        let dfa = two_finals();
        let normalized = normalize_final_states(&dfa).unwrap();

        let synthetic = State::Synthetic("qf".into());
        assert_eq!(
            normalized.final_states().iter().collect::<Vec<_>>(),
            vec![&synthetic]
        );
        assert_eq!(normalized.states().len(), dfa.states().len() + 1);
        for state in [State::atomic("q1"), State::atomic("q3")] {
            assert_eq!(
                normalized.transitions().target(&state, &Symbol::Epsilon),
                Some(&synthetic)
            );
        }
        assert_eq!(normalized.transitions().len(), dfa.transitions().len() + 2);
        assert_eq!(normalized.start_state(), dfa.start_state());
        assert!(normalized.is_deterministic());
    }

    #[test]
    fn test_synthetic_does_not_collide() {
        let dfa = two_finals().with_state(State::atomic("qf"));
        let normalized = normalize_final_states(&dfa).unwrap();
        let synthetic = normalized.final_states().first().unwrap();
        assert_eq!(synthetic, &State::Synthetic("qf1".into()));
        assert!(!dfa.states().contains(synthetic));
    }

    #[test]
    fn test_single_final_passes_through() {
        let dfa = Automaton::deterministic(State::atomic("q0"))
            .with_transition(State::atomic("q0"), "a".into(), State::atomic("q1"))
            .with_final_state(State::atomic("q1"));
        let normalized = normalize_final_states(&dfa).unwrap();
        assert!(matches!(normalized, Cow::Borrowed(_)));
        assert_eq!(normalized.as_ref(), &dfa);

        let empty = Automaton::deterministic(State::atomic("q0"));
        assert!(matches!(
            normalize_final_states(&empty).unwrap(),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_normalized_agrees_with_dfa() {
        let dfa = two_finals();
        let normalized = normalize_final_states(&dfa).unwrap();
        for word in ["", "a", "ab", "aba", "abab", "ababa", "b", "aa", "abb"] {
            let word = parse_word(word);
            assert_eq!(
                simulate(&normalized, &word).unwrap(),
                simulate(&dfa, &word).unwrap(),
                "disagree on {word:?}"
            );
        }
    }

    #[test]
    fn test_existing_epsilon_edge_rejected() {
        let dfa = two_finals().with_transition(
            State::atomic("q1"),
            Symbol::Epsilon,
            State::atomic("q0"),
        );
        assert!(matches!(
            normalize_final_states(&dfa),
            Err(Error::ExistingEpsilonEdge { .. })
        ));
    }
}
