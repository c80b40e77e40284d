use crate::automaton::Automaton;
use std::fmt;
use std::io;

fn join<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Automaton {
    /// Render in the notation the reader accepts. Composite states are
    /// written as `{q0,q1}` and read back as single braced labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "states = {}", join(self.states()))?;
        writeln!(f, "symbols = {}", join(self.alphabet()))?;
        writeln!(f, "transitions = {{")?;
        for (src, sym, dsts) in self.transitions().entries() {
            writeln!(f, "({src}, {sym}) -> {}", join(dsts))?;
        }
        writeln!(f, "}}")?;
        writeln!(f, "start_state = {}", self.start_state())?;
        writeln!(f, "final_states = {}", join(self.final_states()))
    }
}

/// Write `automaton` in automaton notation.
pub fn write_automaton<W: io::Write>(out: &mut W, automaton: &Automaton) -> io::Result<()> {
    write!(out, "{automaton}")
}
