//!
//! Error codes
//!

use std::fmt::Display;

/// Errors produced while reading automata or running the conversion pipeline.
#[derive(Debug)]
pub enum Error {
    /// Reverse was given an automaton with more than one final state.
    ///
    /// The automaton must go through final-state normalization first, since the
    /// start state of the reversed automaton has to be a single state.
    MultipleAcceptingStates { count: usize },

    /// An operation that needs a deterministic transition table got a
    /// nondeterministic one.
    NondeterministicTable { operation: &'static str },

    /// Normalization would overwrite an epsilon edge the automaton already has.
    ExistingEpsilonEdge { state: String },

    /// A line of automaton notation could not be parsed.
    Parse { line: usize, message: String },

    /// A description references a state it never declared.
    UndeclaredState { state: String },

    /// A description references a symbol it never declared.
    UndeclaredSymbol { symbol: String },

    /// A description lacks a required part.
    MissingField { field: &'static str },

    Json(serde_json::Error),

    Io(std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MultipleAcceptingStates { count } => write!(
                f,
                "cannot reverse an automaton with {count} final states; normalize it to a single final state first"
            ),
            Self::NondeterministicTable { operation } => {
                write!(f, "{operation} requires a deterministic transition table")
            }
            Self::ExistingEpsilonEdge { state } => {
                write!(f, "state {state} already has an epsilon transition")
            }
            Self::Parse { line, message } => write!(f, "line {line}: {message}"),
            Self::UndeclaredState { state } => write!(f, "undeclared state `{state}`"),
            Self::UndeclaredSymbol { symbol } => write!(f, "undeclared symbol `{symbol}`"),
            Self::MissingField { field } => write!(f, "missing `{field}`"),
            Self::Json(err) => write!(f, "invalid automaton description: {err}"),
            Self::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
