//! Epsilon-closure tables for NFA states.

use crate::automaton::nfa::Nfa;
use crate::automaton::state::{StateLabel, StateSet};
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// How far epsilon edges are followed when computing a closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosurePolicy {
    /// A state and its direct epsilon targets. Chains longer than one edge
    /// are not followed.
    #[default]
    OneHop,
    /// Every state reachable through any number of epsilon edges.
    Transitive,
}

impl FromStr for ClosurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-hop" => Ok(ClosurePolicy::OneHop),
            "transitive" => Ok(ClosurePolicy::Transitive),
            other => Err(format!(
                "unknown closure policy `{other}` (expected `one-hop` or `transitive`)"
            )),
        }
    }
}

impl fmt::Display for ClosurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosurePolicy::OneHop => f.write_str("one-hop"),
            ClosurePolicy::Transitive => f.write_str("transitive"),
        }
    }
}

/// The epsilon-closure of every NFA state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpsilonClosureTable {
    closures: IndexMap<StateLabel, StateSet>,
}

impl EpsilonClosureTable {
    /// Closure of a single state. States unknown to the table close to themselves.
    pub fn closure(&self, state: &StateLabel) -> StateSet {
        self.closures
            .get(state)
            .cloned()
            .unwrap_or_else(|| StateSet::singleton(state.clone()))
    }

    /// Closure of a set of states: the union of the members' closures.
    pub fn closure_of<'a>(&self, states: impl IntoIterator<Item = &'a StateLabel>) -> StateSet {
        let mut closure = StateSet::new();
        for state in states {
            match self.closures.get(state) {
                Some(cached) => closure.union_with(cached),
                None => {
                    closure.insert(state.clone());
                }
            }
        }
        closure
    }

    /// Iterate over states and their closures in NFA declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateLabel, &StateSet)> + '_ {
        self.closures.iter()
    }
}

/// Compute the epsilon-closure of every state of `nfa`.
pub fn epsilon_closures(nfa: &Nfa, policy: ClosurePolicy) -> EpsilonClosureTable {
    let closures = nfa
        .states()
        .iter()
        .map(|state| {
            let closure = match policy {
                ClosurePolicy::OneHop => one_hop_closure(nfa, state),
                ClosurePolicy::Transitive => transitive_closure(nfa, state),
            };
            (state.clone(), closure)
        })
        .collect();
    EpsilonClosureTable { closures }
}

fn one_hop_closure(nfa: &Nfa, state: &StateLabel) -> StateSet {
    let mut closure = StateSet::singleton(state.clone());
    for target in nfa.epsilon_targets(state) {
        closure.insert(target.clone());
    }
    closure
}

fn transitive_closure(nfa: &Nfa, state: &StateLabel) -> StateSet {
    let mut closure = StateSet::new();
    let mut stack = vec![state];

    while let Some(s) = stack.pop() {
        if !closure.insert(s.clone()) {
            continue;
        }
        for dest in nfa.epsilon_targets(s) {
            if !closure.contains(dest) {
                stack.push(dest);
            }
        }
    }

    closure
}
