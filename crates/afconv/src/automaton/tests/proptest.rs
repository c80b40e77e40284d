use proptest::{collection, prelude::*};

use super::super::{
    complement, complete, determinize, epsilon_closures, normalize_final_states, reverse,
    simulate, simulate_nondeterministic, subset_construction, Automaton, ClosurePolicy, Nfa,
    Symbol,
};

const SYMBOLS: [&str; 3] = ["a", "b", "vazio"];

fn nfa_strategy() -> impl Strategy<Value = Nfa> {
    (1usize..=5).prop_flat_map(|num_states| {
        (
            collection::vec((0..num_states, 0..SYMBOLS.len(), 0..num_states), 0..12),
            collection::vec(any::<bool>(), num_states),
        )
            .prop_map(move |(edges, finals)| {
                let mut nfa = Nfa::new("q0");
                for i in 1..num_states {
                    nfa.add_state(format!("q{i}"));
                }
                nfa.add_symbol("a");
                nfa.add_symbol("b");
                for (src, sym, dst) in edges {
                    nfa.add_transition(
                        format!("q{src}"),
                        SYMBOLS[sym],
                        format!("q{dst}"),
                    );
                }
                for (i, is_final) in finals.into_iter().enumerate() {
                    if is_final {
                        nfa.add_final_state(format!("q{i}"));
                    }
                }
                nfa
            })
    })
}

fn word_strategy() -> impl Strategy<Value = Vec<Symbol>> {
    collection::vec(prop_oneof![Just(Symbol::from("a")), Just(Symbol::from("b"))], 0..7)
}

fn reversed(word: &[Symbol]) -> Vec<Symbol> {
    word.iter().rev().cloned().collect()
}

proptest! {
    #[test]
    fn dfa_agrees_with_nfa(nfa in nfa_strategy(), word in word_strategy()) {
        let view = Automaton::from(&nfa);
        for policy in [ClosurePolicy::OneHop, ClosurePolicy::Transitive] {
            let dfa = determinize(&nfa, policy);
            prop_assert_eq!(
                simulate(&dfa, &word).unwrap(),
                simulate_nondeterministic(&view, &word, policy)
            );
        }
    }

    #[test]
    fn dfa_states_are_canonical(nfa in nfa_strategy()) {
        let closures = epsilon_closures(&nfa, ClosurePolicy::Transitive);
        let dfa = subset_construction(&nfa, &closures);
        for state in dfa.states() {
            let set = state.as_composite().unwrap();
            prop_assert!(!set.is_empty());
            prop_assert_eq!(&closures.closure_of(set), set);
        }
        prop_assert!(dfa.is_deterministic());
        prop_assert!(dfa.transitions().edges().all(|(_, symbol, _)| !symbol.is_epsilon()));
    }

    #[test]
    fn reverse_accepts_reversed_words(nfa in nfa_strategy(), word in word_strategy()) {
        let dfa = determinize(&nfa, ClosurePolicy::OneHop);
        let normalized = normalize_final_states(&dfa).unwrap();
        let rev = reverse(&normalized).unwrap();
        prop_assert_eq!(
            simulate_nondeterministic(&rev, &reversed(&word), ClosurePolicy::OneHop),
            simulate(&dfa, &word).unwrap()
        );
    }

    #[test]
    fn normalization_preserves_language(nfa in nfa_strategy(), word in word_strategy()) {
        let dfa = determinize(&nfa, ClosurePolicy::OneHop);
        let normalized = normalize_final_states(&dfa).unwrap();
        prop_assert!(normalized.final_states().len() <= 1);
        prop_assert_eq!(
            simulate(&normalized, &word).unwrap(),
            simulate(&dfa, &word).unwrap()
        );
    }

    #[test]
    fn complement_of_total_dfa(nfa in nfa_strategy(), word in word_strategy()) {
        let dfa = determinize(&nfa, ClosurePolicy::OneHop);
        let total = complete(&dfa).unwrap();
        let comp = complement(&total).unwrap();
        prop_assert_ne!(
            simulate(&comp, &word).unwrap(),
            simulate(&dfa, &word).unwrap()
        );
        let twice = complement(&comp).unwrap();
        prop_assert_eq!(twice.final_states(), total.final_states());
    }
}
