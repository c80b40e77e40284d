//! Running words through automata.

use crate::automaton::epsilon_closure::ClosurePolicy;
use crate::automaton::model::Automaton;
use crate::automaton::state::State;
use crate::automaton::symbol::Symbol;
use crate::error::{Error, Result};
use fixedbitset::FixedBitSet;
use log::trace;

/// Run `word` through a deterministic automaton.
///
/// A missing transition rejects at once; the rest of the word is not read.
/// Once the word is consumed, epsilon edges are followed as free moves until a
/// final state is reached or no epsilon edge leaves the current state. An
/// automaton without epsilon edges therefore accepts iff the walk ends in a
/// final state.
pub fn simulate(automaton: &Automaton, word: &[Symbol]) -> Result<bool> {
    if !automaton.is_deterministic() {
        return Err(Error::NondeterministicTable {
            operation: "deterministic simulation",
        });
    }

    let transitions = automaton.transitions();
    let mut current = automaton.start_state();
    for (position, symbol) in word.iter().enumerate() {
        match transitions.target(current, symbol) {
            Some(next) => current = next,
            None => {
                trace!("No transition from {current} on {symbol} at {position}");
                return Ok(false);
            }
        }
    }

    // Each state has at most one epsilon edge, so a walk longer than the state
    // count is a cycle.
    for _ in 0..automaton.states().len() {
        if automaton.is_final(current) {
            return Ok(true);
        }
        match transitions.target(current, &Symbol::Epsilon) {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(automaton.is_final(current))
}

/// Run `word` through any automaton by tracking every state it could be in.
///
/// Epsilon edges are followed under `policy` from the start state and after
/// every symbol. The word is accepted iff a final state is active at the end.
pub fn simulate_nondeterministic(
    automaton: &Automaton,
    word: &[Symbol],
    policy: ClosurePolicy,
) -> bool {
    let runner = SetRunner::new(automaton, policy);

    let mut active = runner.singleton(automaton.start_state());
    runner.close(&mut active);

    for symbol in word {
        active = runner.step(&active, symbol);
        if active.is_clear() {
            trace!("No active states left on {symbol}");
            return false;
        }
        runner.close(&mut active);
    }

    active.ones().any(|index| {
        automaton
            .states()
            .get_index(index)
            .is_some_and(|state| automaton.is_final(state))
    })
}

/// Active-set bookkeeping over the automaton's state indices.
struct SetRunner<'a> {
    automaton: &'a Automaton,
    policy: ClosurePolicy,
}

impl<'a> SetRunner<'a> {
    fn new(automaton: &'a Automaton, policy: ClosurePolicy) -> Self {
        Self { automaton, policy }
    }

    fn capacity(&self) -> usize {
        self.automaton.states().len()
    }

    fn state(&self, index: usize) -> Option<&'a State> {
        self.automaton.states().get_index(index)
    }

    fn singleton(&self, state: &State) -> FixedBitSet {
        let mut set = FixedBitSet::with_capacity(self.capacity());
        self.insert(&mut set, state);
        set
    }

    fn insert(&self, set: &mut FixedBitSet, state: &State) -> bool {
        match self.automaton.states().get_index_of(state) {
            Some(index) => !set.put(index),
            None => false,
        }
    }

    fn close(&self, active: &mut FixedBitSet) {
        let mut frontier: Vec<usize> = active.ones().collect();
        while let Some(index) = frontier.pop() {
            let Some(state) = self.state(index) else {
                continue;
            };
            for target in self.automaton.transitions().targets(state, &Symbol::Epsilon) {
                let added = self.insert(active, target);
                if added && self.policy == ClosurePolicy::Transitive {
                    if let Some(target_index) = self.automaton.states().get_index_of(target) {
                        frontier.push(target_index);
                    }
                }
            }
        }
    }

    fn step(&self, active: &FixedBitSet, symbol: &Symbol) -> FixedBitSet {
        let mut next = FixedBitSet::with_capacity(self.capacity());
        for index in active.ones() {
            let Some(state) = self.state(index) else {
                continue;
            };
            for target in self.automaton.transitions().targets(state, symbol) {
                self.insert(&mut next, target);
            }
        }
        next
    }
}
