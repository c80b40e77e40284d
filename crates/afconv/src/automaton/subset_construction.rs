//! Subset construction algorithm for converting ε-NFA to DFA.

use crate::automaton::epsilon_closure::{epsilon_closures, ClosurePolicy, EpsilonClosureTable};
use crate::automaton::model::Automaton;
use crate::automaton::nfa::Nfa;
use crate::automaton::state::{State, StateSet};
use crate::automaton::symbol::Symbol;
use crate::automaton::transitions::TransitionTable;
use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};
use std::collections::VecDeque;

/// Convert an epsilon-NFA to a DFA using the powerset construction algorithm.
///
/// Each DFA state is the composite of the NFA states it stands for. States are
/// discovered breadth-first, so the resulting state order is stable for a given
/// input. A symbol that leads nowhere from a DFA state gets no transition at
/// all; no dead state is created.
pub fn subset_construction(nfa: &Nfa, closures: &EpsilonClosureTable) -> Automaton {
    let alphabet: IndexSet<Symbol> = nfa.alphabet().cloned().collect();

    // Each DFA state corresponds to a set of NFA states, in discovery order
    let mut discovered: IndexSet<StateSet> = IndexSet::new();
    let mut transitions = TransitionTable::deterministic();
    let mut worklist: VecDeque<StateSet> = VecDeque::new();

    // Initial DFA state is the epsilon closure of the NFA start state
    let initial_set = closures.closure(nfa.start_state());
    trace!("Initial DFA state: {initial_set}");
    discovered.insert(initial_set.clone());
    worklist.push_back(initial_set.clone());

    while let Some(current_set) = worklist.pop_front() {
        for symbol in &alphabet {
            let mut reachable = StateSet::new();
            for state in current_set.iter() {
                for target in nfa.targets(state, symbol) {
                    reachable.insert(target.clone());
                }
            }

            if reachable.is_empty() {
                trace!("{current_set} has no move on {symbol}");
                continue;
            }

            let next_set = closures.closure_of(&reachable);
            if discovered.insert(next_set.clone()) {
                trace!("Add state {}: {next_set}", discovered.len() - 1);
                worklist.push_back(next_set.clone());
            }

            transitions.add(
                State::Composite(current_set.clone()),
                symbol.clone(),
                State::Composite(next_set),
            );
        }
    }

    let final_states: IndexSet<State> = discovered
        .iter()
        .filter(|set| set.intersects(nfa.final_states()))
        .cloned()
        .map(State::Composite)
        .collect();

    debug!(
        "Subset construction: {} NFA states -> {} DFA states, {} transitions, {} final",
        nfa.states().len(),
        discovered.len(),
        transitions.len(),
        final_states.len()
    );

    Automaton::from_parts(
        discovered.into_iter().map(State::Composite).collect(),
        alphabet,
        transitions,
        State::Composite(initial_set),
        final_states,
    )
}

/// Compute the closure table under `policy` and run subset construction.
pub fn determinize(nfa: &Nfa, policy: ClosurePolicy) -> Automaton {
    let closures = epsilon_closures(nfa, policy);
    subset_construction(nfa, &closures)
}

/// Index each DFA state by discovery order, e.g. for short display names.
pub fn state_numbering(dfa: &Automaton) -> IndexMap<&State, usize> {
    dfa.states().iter().enumerate().map(|(i, s)| (s, i)).collect()
}
