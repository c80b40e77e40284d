//! Reversal of an automaton with at most one final state.

use crate::automaton::model::Automaton;
use crate::automaton::transitions::TransitionTable;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use log::debug;

/// Reverse every edge and swap the roles of the start and final state.
///
/// The result accepts the reversal of every word `automaton` accepts. Several
/// edges may enter the same state on the same symbol, so the reversed table is
/// always nondeterministic and is not determinized here. Epsilon edges are
/// reversed like any other edge.
///
/// Fails with [`Error::MultipleAcceptingStates`] when there is more than one
/// final state; see [`normalize_final_states`](super::normalize_final_states).
/// Without any final state the language is empty: the start state is kept and
/// the result has no final state either.
pub fn reverse(automaton: &Automaton) -> Result<Automaton> {
    let count = automaton.final_states().len();
    if count > 1 {
        return Err(Error::MultipleAcceptingStates { count });
    }

    let mut transitions = TransitionTable::nondeterministic();
    for (src, sym, dst) in automaton.transitions().edges() {
        transitions.add(dst.clone(), sym.clone(), src.clone());
    }

    let (start_state, final_states) = match automaton.final_states().first() {
        Some(accepting) => {
            let mut final_states = IndexSet::new();
            final_states.insert(automaton.start_state().clone());
            (accepting.clone(), final_states)
        }
        None => (automaton.start_state().clone(), IndexSet::new()),
    };

    debug!(
        "Reverse: {} edges, start {start_state}",
        transitions.edges().count()
    );

    Ok(Automaton::from_parts(
        automaton.states().clone(),
        automaton.alphabet().clone(),
        transitions,
        start_state,
        final_states,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::epsilon_closure::ClosurePolicy;
    use crate::automaton::normalize::normalize_final_states;
    use crate::automaton::simulate::{simulate, simulate_nondeterministic};
    use crate::automaton::state::State;
    use crate::automaton::symbol::{parse_word, Symbol};

    fn single_final() -> Automaton {
        // Accepts words over {a, b} ending in "ab".
        Automaton::deterministic(State::atomic("q0"))
            .with_transition(State::atomic("q0"), "a".into(), State::atomic("q1"))
            .with_transition(State::atomic("q0"), "b".into(), State::atomic("q0"))
            .with_transition(State::atomic("q1"), "a".into(), State::atomic("q1"))
            .with_transition(State::atomic("q1"), "b".into(), State::atomic("q2"))
            .with_transition(State::atomic("q2"), "a".into(), State::atomic("q1"))
            .with_transition(State::atomic("q2"), "b".into(), State::atomic("q0"))
            .with_final_state(State::atomic("q2"))
    }

    #[test]
    fn test_reverse_structure() {
        let dfa = single_final();
        let rev = reverse(&dfa).unwrap();

        assert!(!rev.is_deterministic());
        assert_eq!(rev.start_state(), &State::atomic("q2"));
        assert_eq!(
            rev.final_states().iter().collect::<Vec<_>>(),
            vec![&State::atomic("q0")]
        );
        assert_eq!(rev.states(), dfa.states());
        assert_eq!(rev.alphabet(), dfa.alphabet());
        // q0 and q2 both reach q1 on `a`.
        assert_eq!(
            rev.transitions()
                .targets(&State::atomic("q1"), &"a".into()),
            &[State::atomic("q0"), State::atomic("q1"), State::atomic("q2")]
        );
        assert_eq!(rev.transitions().edges().count(), dfa.transitions().len());
    }

    #[test]
    fn test_reverse_language() {
        let dfa = single_final();
        let rev = reverse(&dfa).unwrap();
        for word in ["", "ab", "ba", "aab", "abab", "bab", "abb", "bbab"] {
            let forward = parse_word(word);
            let backward: Vec<Symbol> = forward.iter().rev().cloned().collect();
            assert_eq!(
                simulate_nondeterministic(&rev, &backward, ClosurePolicy::OneHop),
                simulate(&dfa, &forward).unwrap(),
                "disagree on {word:?}"
            );
        }
    }

    #[test]
    fn test_reverse_multiple_finals_fails() {
        let dfa = single_final().with_final_state(State::atomic("q1"));
        match reverse(&dfa) {
            Err(Error::MultipleAcceptingStates { count }) => assert_eq!(count, 2),
            other => panic!("expected precondition failure, got {other:?}"),
        }
    }

    #[test]
    fn test_reverse_normalized() {
        let dfa = single_final().with_final_state(State::atomic("q1"));
        let normalized = normalize_final_states(&dfa).unwrap();
        let rev = reverse(&normalized).unwrap();

        assert_eq!(rev.start_state(), &State::Synthetic("qf".into()));
        assert_eq!(
            rev.transitions()
                .targets(&State::Synthetic("qf".into()), &Symbol::Epsilon),
            &[State::atomic("q1"), State::atomic("q2")]
        );
        for word in ["", "a", "ab", "ba", "bb", "aba", "bba"] {
            let forward = parse_word(word);
            let backward: Vec<Symbol> = forward.iter().rev().cloned().collect();
            assert_eq!(
                simulate_nondeterministic(&rev, &backward, ClosurePolicy::OneHop),
                simulate(&dfa, &forward).unwrap(),
                "disagree on {word:?}"
            );
        }
    }

    #[test]
    fn test_reverse_twice() {
        let dfa = single_final();
        let twice = reverse(&reverse(&dfa).unwrap()).unwrap();
        assert_eq!(twice.start_state(), dfa.start_state());
        assert_eq!(twice.final_states(), dfa.final_states());
        for word in ["", "ab", "bab", "abb"] {
            let word = parse_word(word);
            assert_eq!(
                simulate_nondeterministic(&twice, &word, ClosurePolicy::OneHop),
                simulate(&dfa, &word).unwrap()
            );
        }
    }

    #[test]
    fn test_reverse_without_finals() {
        let dfa = Automaton::deterministic(State::atomic("q0"))
            .with_transition(State::atomic("q0"), "a".into(), State::atomic("q0"));
        let rev = reverse(&dfa).unwrap();
        assert_eq!(rev.start_state(), &State::atomic("q0"));
        assert!(rev.final_states().is_empty());
    }
}
