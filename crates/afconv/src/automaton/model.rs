//! The automaton value passed between conversion stages.

use crate::automaton::nfa::Nfa;
use crate::automaton::state::{State, StateLabel};
use crate::automaton::symbol::Symbol;
use crate::automaton::transitions::TransitionTable;
use indexmap::IndexSet;

/// A finite automaton produced by one stage of the pipeline.
///
/// Every transform takes an `&Automaton` and returns a new one; none of them
/// mutate their input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    /// States in discovery order
    states: IndexSet<State>,
    /// Effective alphabet, never containing epsilon
    alphabet: IndexSet<Symbol>,
    transitions: TransitionTable,
    start_state: State,
    /// Final (accepting) states
    final_states: IndexSet<State>,
}

impl Automaton {
    /// Create an automaton with a deterministic table and only a start state.
    pub fn deterministic(start_state: State) -> Self {
        Self::with_table(start_state, TransitionTable::deterministic())
    }

    /// Create an automaton with a nondeterministic table and only a start state.
    pub fn nondeterministic(start_state: State) -> Self {
        Self::with_table(start_state, TransitionTable::nondeterministic())
    }

    fn with_table(start_state: State, transitions: TransitionTable) -> Self {
        let mut states = IndexSet::new();
        states.insert(start_state.clone());
        Self {
            states,
            alphabet: IndexSet::new(),
            transitions,
            start_state,
            final_states: IndexSet::new(),
        }
    }

    /// Assemble an automaton from its parts.
    ///
    /// The start state, final states and transition endpoints are added to the
    /// state set if missing, and epsilon is dropped from the alphabet.
    pub fn from_parts(
        states: IndexSet<State>,
        alphabet: IndexSet<Symbol>,
        transitions: TransitionTable,
        start_state: State,
        final_states: IndexSet<State>,
    ) -> Self {
        let mut automaton = Self {
            states,
            alphabet: alphabet.into_iter().filter(|s| !s.is_epsilon()).collect(),
            transitions,
            start_state,
            final_states,
        };
        automaton.states.insert(automaton.start_state.clone());
        automaton
            .states
            .extend(automaton.final_states.iter().cloned());
        let endpoints: Vec<State> = automaton
            .transitions
            .edges()
            .flat_map(|(src, _, dst)| [src.clone(), dst.clone()])
            .collect();
        automaton.states.extend(endpoints);
        automaton
    }

    /// Add a state.
    pub fn with_state(mut self, state: State) -> Self {
        self.states.insert(state);
        self
    }

    /// Add an alphabet symbol. Epsilon is ignored.
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        if !symbol.is_epsilon() {
            self.alphabet.insert(symbol);
        }
        self
    }

    /// Add a transition, declaring its states and symbol if needed.
    pub fn with_transition(mut self, source: State, symbol: Symbol, destination: State) -> Self {
        self.states.insert(source.clone());
        self.states.insert(destination.clone());
        if !symbol.is_epsilon() {
            self.alphabet.insert(symbol.clone());
        }
        self.transitions.add(source, symbol, destination);
        self
    }

    /// Add a final state, declaring it if needed.
    pub fn with_final_state(mut self, state: State) -> Self {
        self.states.insert(state.clone());
        self.final_states.insert(state);
        self
    }

    /// Get the states.
    pub fn states(&self) -> &IndexSet<State> {
        &self.states
    }

    /// Get the alphabet.
    pub fn alphabet(&self) -> &IndexSet<Symbol> {
        &self.alphabet
    }

    /// Get the transition table.
    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// Get the start state.
    pub fn start_state(&self) -> &State {
        &self.start_state
    }

    /// Get the final states.
    pub fn final_states(&self) -> &IndexSet<State> {
        &self.final_states
    }

    /// Check if a state is final.
    pub fn is_final(&self, state: &State) -> bool {
        self.final_states.contains(state)
    }

    /// Check if the table has single targets.
    pub fn is_deterministic(&self) -> bool {
        self.transitions.is_deterministic()
    }

    /// Check if every state has a transition on every alphabet symbol.
    pub fn is_total(&self) -> bool {
        self.transitions.is_total(&self.states, &self.alphabet)
    }

    /// A synthetic label, starting from `base`, that no state renders as.
    pub fn fresh_label(&self, base: &str) -> StateLabel {
        let taken: IndexSet<String> = self.states.iter().map(ToString::to_string).collect();
        if !taken.contains(base) {
            return StateLabel::new(base);
        }
        (1..)
            .map(|n| format!("{base}{n}"))
            .find(|candidate| !taken.contains(candidate.as_str()))
            .map(StateLabel::new)
            .unwrap_or_else(|| StateLabel::new(base))
    }
}

impl From<&Nfa> for Automaton {
    /// View the input NFA as an automaton over atomic states.
    fn from(nfa: &Nfa) -> Self {
        let mut transitions = TransitionTable::nondeterministic();
        for (src, sym, dst) in nfa.transitions() {
            transitions.add(
                State::Atomic(src.clone()),
                sym.clone(),
                State::Atomic(dst.clone()),
            );
        }
        Self::from_parts(
            nfa.states().iter().cloned().map(State::Atomic).collect(),
            nfa.alphabet().cloned().collect(),
            transitions,
            State::Atomic(nfa.start_state().clone()),
            nfa.final_states().iter().cloned().map(State::Atomic).collect(),
        )
    }
}
