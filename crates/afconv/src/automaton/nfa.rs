//! Epsilon Non-deterministic Finite Automaton (ε-NFA) over labeled states.

use crate::automaton::state::{StateLabel, StateSet};
use crate::automaton::symbol::Symbol;
use crate::automaton::transitions::KeyRef;
use indexmap::{IndexMap, IndexSet};

/// The input automaton of the conversion pipeline.
///
/// States are atomic labels. A transition key may have any number of targets,
/// and the epsilon symbol is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    /// States in declaration order
    states: IndexSet<StateLabel>,
    /// Declared symbols in declaration order, epsilon included if declared
    symbols: IndexSet<Symbol>,
    /// Transitions: (source, symbol) -> set of destination states
    transitions: IndexMap<(StateLabel, Symbol), StateSet>,
    start_state: StateLabel,
    final_states: StateSet,
}

impl Nfa {
    /// Create an NFA with a single start state and nothing else.
    pub fn new(start_state: impl Into<StateLabel>) -> Self {
        let start_state = start_state.into();
        let mut states = IndexSet::new();
        states.insert(start_state.clone());
        Self {
            states,
            symbols: IndexSet::new(),
            transitions: IndexMap::new(),
            start_state,
            final_states: StateSet::new(),
        }
    }

    /// Create an NFA over `states` in the given order. The start state is
    /// appended if it is not among them.
    pub fn with_states<L: Into<StateLabel>>(
        states: impl IntoIterator<Item = L>,
        start_state: impl Into<StateLabel>,
    ) -> Self {
        let start_state = start_state.into();
        let mut states: IndexSet<StateLabel> = states.into_iter().map(Into::into).collect();
        states.insert(start_state.clone());
        Self {
            states,
            symbols: IndexSet::new(),
            transitions: IndexMap::new(),
            start_state,
            final_states: StateSet::new(),
        }
    }

    /// Declare a state. Declaration order is kept.
    pub fn add_state(&mut self, state: impl Into<StateLabel>) {
        self.states.insert(state.into());
    }

    /// Declare a symbol. Declaration order is kept.
    pub fn add_symbol(&mut self, symbol: impl Into<Symbol>) {
        self.symbols.insert(symbol.into());
    }

    /// Add a transition, declaring its states and symbol if needed.
    pub fn add_transition(
        &mut self,
        source: impl Into<StateLabel>,
        symbol: impl Into<Symbol>,
        destination: impl Into<StateLabel>,
    ) {
        let (source, symbol, destination) = (source.into(), symbol.into(), destination.into());
        self.states.insert(source.clone());
        self.states.insert(destination.clone());
        self.symbols.insert(symbol.clone());
        self.transitions
            .entry((source, symbol))
            .or_default()
            .insert(destination);
    }

    /// Add an epsilon transition from source to destination.
    pub fn add_epsilon_transition(
        &mut self,
        source: impl Into<StateLabel>,
        destination: impl Into<StateLabel>,
    ) {
        self.add_transition(source, Symbol::Epsilon, destination);
    }

    /// Add a final (accepting) state.
    pub fn add_final_state(&mut self, state: impl Into<StateLabel>) {
        let state = state.into();
        self.states.insert(state.clone());
        self.final_states.insert(state);
    }

    pub fn states(&self) -> &IndexSet<StateLabel> {
        &self.states
    }

    /// Declared symbols, epsilon included.
    pub fn symbols(&self) -> &IndexSet<Symbol> {
        &self.symbols
    }

    /// The effective alphabet: declared symbols without epsilon.
    pub fn alphabet(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.symbols.iter().filter(|symbol| !symbol.is_epsilon())
    }

    pub fn start_state(&self) -> &StateLabel {
        &self.start_state
    }

    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    /// Targets of a transition; empty when there is none.
    pub fn targets(&self, source: &StateLabel, symbol: &Symbol) -> &[StateLabel] {
        self.transitions
            .get(&KeyRef(source, symbol))
            .map(StateSet::as_slice)
            .unwrap_or_default()
    }

    /// Direct epsilon targets of a state.
    pub fn epsilon_targets(&self, source: &StateLabel) -> &[StateLabel] {
        self.targets(source, &Symbol::Epsilon)
    }

    /// Get all transitions as an iterator.
    pub fn transitions(&self) -> impl Iterator<Item = (&StateLabel, &Symbol, &StateLabel)> + '_ {
        self.transitions
            .iter()
            .flat_map(|((src, sym), dsts)| dsts.iter().map(move |dst| (src, sym, dst)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfa_basic() {
        // 0 -a-> 1 -ε-> 2 (final)
        let mut nfa = Nfa::new("q0");
        nfa.add_transition("q0", "a", "q1");
        nfa.add_epsilon_transition("q1", "q2");
        nfa.add_final_state("q2");

        assert_eq!(nfa.states().len(), 3);
        assert_eq!(nfa.symbols().len(), 2);
        assert_eq!(nfa.alphabet().collect::<Vec<_>>(), vec![&Symbol::from("a")]);
        assert_eq!(nfa.epsilon_targets(&"q1".into()), &[StateLabel::from("q2")]);
        assert!(nfa.epsilon_targets(&"q0".into()).is_empty());
    }

    #[test]
    fn test_nfa_multiple_targets() {
        let mut nfa = Nfa::new("q0");
        nfa.add_transition("q0", "a", "q2");
        nfa.add_transition("q0", "a", "q1");

        assert_eq!(
            nfa.targets(&"q0".into(), &"a".into()),
            &[StateLabel::from("q1"), StateLabel::from("q2")]
        );
        assert_eq!(nfa.transitions().count(), 2);
    }
}
