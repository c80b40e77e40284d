//! Transition tables keyed by (state, symbol) pairs.

use crate::automaton::state::{State, Targets};
use crate::automaton::symbol::Symbol;
use indexmap::{Equivalent, IndexMap, IndexSet};
use std::hash::{Hash, Hasher};

/// Borrowed form of a `(state, symbol)` key, so lookups don't clone either half.
pub(crate) struct KeyRef<'a, S>(pub &'a S, pub &'a Symbol);

impl<S: Hash> Hash for KeyRef<'_, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must match the derived hash of `(S, Symbol)`.
        self.0.hash(state);
        self.1.hash(state);
    }
}

impl<S: Eq> Equivalent<(S, Symbol)> for KeyRef<'_, S> {
    fn equivalent(&self, key: &(S, Symbol)) -> bool {
        *self.0 == key.0 && *self.1 == key.1
    }
}

/// A labeled edge: (source, symbol, destination).
pub type Edge<'a> = (&'a State, &'a Symbol, &'a State);

/// The transition function of an automaton.
///
/// Both shapes keep insertion order, which is the order transitions were
/// discovered in and the order they are rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionTable {
    /// At most one target per key; a missing key is an implicit rejection.
    Deterministic(IndexMap<(State, Symbol), State>),
    /// Any number of targets per key.
    Nondeterministic(IndexMap<(State, Symbol), Targets>),
}

impl TransitionTable {
    /// Create an empty single-target table.
    pub fn deterministic() -> Self {
        TransitionTable::Deterministic(IndexMap::new())
    }

    /// Create an empty multi-target table.
    pub fn nondeterministic() -> Self {
        TransitionTable::Nondeterministic(IndexMap::new())
    }

    /// Check if this is a single-target table.
    pub fn is_deterministic(&self) -> bool {
        matches!(self, TransitionTable::Deterministic(_))
    }

    /// Add a transition.
    ///
    /// A deterministic table replaces any previous target for the key; a
    /// nondeterministic table accumulates it.
    pub fn add(&mut self, source: State, symbol: Symbol, destination: State) {
        match self {
            TransitionTable::Deterministic(map) => {
                map.insert((source, symbol), destination);
            }
            TransitionTable::Nondeterministic(map) => {
                map.entry((source, symbol)).or_default().insert(destination);
            }
        }
    }

    /// The single target of a deterministic table. Always `None` for a
    /// nondeterministic table.
    pub fn target(&self, source: &State, symbol: &Symbol) -> Option<&State> {
        match self {
            TransitionTable::Deterministic(map) => map.get(&KeyRef(source, symbol)),
            TransitionTable::Nondeterministic(_) => None,
        }
    }

    /// All targets for a key, in canonical order for nondeterministic tables.
    pub fn targets(&self, source: &State, symbol: &Symbol) -> &[State] {
        match self {
            TransitionTable::Deterministic(map) => map
                .get(&KeyRef(source, symbol))
                .map(std::slice::from_ref)
                .unwrap_or_default(),
            TransitionTable::Nondeterministic(map) => map
                .get(&KeyRef(source, symbol))
                .map(Targets::as_slice)
                .unwrap_or_default(),
        }
    }

    /// Check if any target exists for a key.
    pub fn contains_key(&self, source: &State, symbol: &Symbol) -> bool {
        !self.targets(source, symbol).is_empty()
    }

    /// Number of (state, symbol) keys.
    pub fn len(&self) -> usize {
        match self {
            TransitionTable::Deterministic(map) => map.len(),
            TransitionTable::Nondeterministic(map) => map.len(),
        }
    }

    /// Check if the table has no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over keys and their targets in table order.
    pub fn entries(&self) -> Box<dyn Iterator<Item = (&State, &Symbol, &[State])> + '_> {
        match self {
            TransitionTable::Deterministic(map) => Box::new(
                map.iter()
                    .map(|((src, sym), dst)| (src, sym, std::slice::from_ref(dst))),
            ),
            TransitionTable::Nondeterministic(map) => Box::new(
                map.iter()
                    .map(|((src, sym), dsts)| (src, sym, dsts.as_slice())),
            ),
        }
    }

    /// Iterate over every individual edge.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.entries()
            .flat_map(|(src, sym, dsts)| dsts.iter().map(move |dst| (src, sym, dst)))
    }

    /// Check if every state has a transition on every symbol of the alphabet.
    pub fn is_total(&self, states: &IndexSet<State>, alphabet: &IndexSet<Symbol>) -> bool {
        states
            .iter()
            .all(|state| alphabet.iter().all(|symbol| self.contains_key(state, symbol)))
    }
}
