//! The parsed shape of an input automaton, before validation.

use crate::automaton::{Nfa, EPSILON_LABEL};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One `(from, symbol) -> to...` line of an automaton description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDescription {
    pub from: String,
    pub symbol: String,
    pub to: Vec<String>,
}

/// An automaton as written by the user: declared labels, transitions, start
/// and final states, and optionally a word to simulate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NfaDescription {
    pub states: Vec<String>,
    pub symbols: Vec<String>,
    #[serde(default)]
    pub transitions: Vec<TransitionDescription>,
    pub start: Option<String>,
    #[serde(default, alias = "final")]
    pub finals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
}

impl NfaDescription {
    /// Parse a JSON description.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl TryFrom<&NfaDescription> for Nfa {
    type Error = Error;

    /// Build the NFA, checking that every label used is declared. The epsilon
    /// symbol may be used without being declared.
    fn try_from(description: &NfaDescription) -> Result<Self> {
        if description.states.is_empty() {
            return Err(Error::MissingField { field: "states" });
        }
        let start = description
            .start
            .as_deref()
            .ok_or(Error::MissingField { field: "start_state" })?;

        let states: HashSet<&str> = description.states.iter().map(String::as_str).collect();
        let symbols: HashSet<&str> = description.symbols.iter().map(String::as_str).collect();
        let check_state = |state: &str| {
            if states.contains(state) {
                Ok(())
            } else {
                Err(Error::UndeclaredState {
                    state: state.to_string(),
                })
            }
        };

        check_state(start)?;
        let mut nfa = Nfa::with_states(description.states.iter().map(String::as_str), start);
        for symbol in &description.symbols {
            nfa.add_symbol(symbol.as_str());
        }

        for transition in &description.transitions {
            check_state(&transition.from)?;
            if transition.symbol != EPSILON_LABEL && !symbols.contains(transition.symbol.as_str())
            {
                return Err(Error::UndeclaredSymbol {
                    symbol: transition.symbol.clone(),
                });
            }
            for target in &transition.to {
                check_state(target)?;
                nfa.add_transition(
                    transition.from.as_str(),
                    transition.symbol.as_str(),
                    target.as_str(),
                );
            }
        }

        for state in &description.finals {
            check_state(state)?;
            nfa.add_final_state(state.as_str());
        }

        Ok(nfa)
    }
}

impl TryFrom<NfaDescription> for Nfa {
    type Error = Error;

    fn try_from(description: NfaDescription) -> Result<Self> {
        Nfa::try_from(&description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{StateLabel, Symbol};

    fn description() -> NfaDescription {
        NfaDescription {
            states: vec!["q0".into(), "q1".into(), "q2".into()],
            symbols: vec!["a".into(), "b".into()],
            transitions: vec![
                TransitionDescription {
                    from: "q0".into(),
                    symbol: "a".into(),
                    to: vec!["q1".into()],
                },
                TransitionDescription {
                    from: "q1".into(),
                    symbol: "vazio".into(),
                    to: vec!["q2".into(), "q0".into()],
                },
            ],
            start: Some("q0".into()),
            finals: vec!["q2".into()],
            word: None,
        }
    }

    #[test]
    fn test_declared_state_order_is_kept() {
        let mut desc = description();
        desc.start = Some("q2".into());
        let nfa = Nfa::try_from(desc).unwrap();

        let order: Vec<&str> = nfa.states().iter().map(StateLabel::as_str).collect();
        assert_eq!(order, vec!["q0", "q1", "q2"]);
        assert_eq!(nfa.start_state(), &StateLabel::from("q2"));
    }

    #[test]
    fn test_description_to_nfa() {
        let nfa = Nfa::try_from(&description()).unwrap();
        assert_eq!(nfa.states().len(), 3);
        assert_eq!(nfa.start_state(), &StateLabel::from("q0"));
        assert_eq!(
            nfa.epsilon_targets(&"q1".into()),
            &[StateLabel::from("q0"), StateLabel::from("q2")]
        );
        assert!(nfa.symbols().contains(&Symbol::Epsilon));
        assert_eq!(nfa.alphabet().count(), 2);
    }

    #[test]
    fn test_undeclared_state() {
        let mut desc = description();
        desc.finals.push("q7".into());
        assert!(matches!(
            Nfa::try_from(&desc),
            Err(Error::UndeclaredState { state }) if state == "q7"
        ));
    }

    #[test]
    fn test_undeclared_symbol() {
        let mut desc = description();
        desc.transitions[0].symbol = "c".into();
        assert!(matches!(
            Nfa::try_from(&desc),
            Err(Error::UndeclaredSymbol { symbol }) if symbol == "c"
        ));
    }

    #[test]
    fn test_missing_start() {
        let mut desc = description();
        desc.start = None;
        assert!(matches!(
            Nfa::try_from(desc),
            Err(Error::MissingField { field: "start_state" })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{
            "states": ["q0", "q1"],
            "symbols": ["0", "1"],
            "transitions": [{"from": "q0", "symbol": "1", "to": ["q1"]}],
            "start": "q0",
            "final": ["q1"],
            "word": "1"
        }"#;
        let desc = NfaDescription::from_json(json).unwrap();
        assert_eq!(desc.finals, vec!["q1".to_string()]);
        assert_eq!(desc.word.as_deref(), Some("1"));
        let back = NfaDescription::from_json(&desc.to_json().unwrap()).unwrap();
        assert_eq!(back, desc);
    }

    #[test]
    fn test_json_invalid() {
        assert!(matches!(
            NfaDescription::from_json("{\"states\": 3}"),
            Err(Error::Json(_))
        ));
    }
}
