//! Symbol types for automata transitions.

use std::fmt;

/// Label of the reserved epsilon symbol in the automaton notation.
pub const EPSILON_LABEL: &str = "vazio";

/// An input-alphabet token.
///
/// The reserved label [`EPSILON_LABEL`] always maps to [`Symbol::Epsilon`], so an
/// epsilon move can never be confused with an ordinary letter.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// Empty-string transition, consumed without reading input.
    Epsilon,
    /// Ordinary alphabet symbol.
    Letter(String),
}

impl Symbol {
    /// Create a symbol from its notation label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == EPSILON_LABEL {
            Symbol::Epsilon
        } else {
            Symbol::Letter(label)
        }
    }

    /// Check if this is the epsilon symbol.
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// The notation label of this symbol.
    pub fn label(&self) -> &str {
        match self {
            Symbol::Epsilon => EPSILON_LABEL,
            Symbol::Letter(label) => label,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.label())
    }
}

impl From<&str> for Symbol {
    fn from(label: &str) -> Self {
        Symbol::new(label)
    }
}

impl From<String> for Symbol {
    fn from(label: String) -> Self {
        Symbol::new(label)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::new(c.to_string())
    }
}

/// Split an input word into symbols.
///
/// Words containing whitespace or commas are split on them, so multi-character
/// symbols can be written as `ab, cd`. Otherwise every character is one symbol.
pub fn parse_word(text: &str) -> Vec<Symbol> {
    let text = text.trim();
    if text.contains(|c: char| c.is_whitespace() || c == ',') {
        text.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(Symbol::from)
            .collect()
    } else {
        text.chars().map(Symbol::from).collect()
    }
}
