//! One conversion run: NFA in, DFA, complement and reverse out.

use crate::automaton::{
    complement, complete, epsilon_closures, normalize_final_states, parse_word, reverse,
    simulate, simulate_nondeterministic, state_numbering, subset_construction, Automaton,
    ClosurePolicy, Nfa, Symbol,
};
use crate::error::Result;
use crate::notation::write_automaton;
use log::{debug, info, trace};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Settings for a conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// How epsilon edges are followed, both for subset construction and for
    /// simulating the input NFA.
    pub closure: ClosurePolicy,
    /// Complete the DFA with a sink state before taking its complement.
    pub complete: bool,
}

/// The automata a run reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Nfa,
    Dfa,
    Complement,
    Reverse,
}

impl Variant {
    /// Every variant in report order.
    pub const ALL: [Variant; 4] = [
        Variant::Nfa,
        Variant::Dfa,
        Variant::Complement,
        Variant::Reverse,
    ];

    /// Short name used in messages and file names.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Nfa => "AFN",
            Variant::Dfa => "AFD",
            Variant::Complement => "COMP",
            Variant::Reverse => "REV",
        }
    }

    /// Output file name, e.g. `AFD.txt`.
    pub fn file_name(self) -> String {
        format!("{}.txt", self.name())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether one automaton accepted a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub variant: Variant,
    pub word: String,
    pub accepted: bool,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A cadeia '{}' foi {} pelo {}.",
            self.word,
            if self.accepted { "ACEITA" } else { "REJEITADA" },
            self.variant
        )
    }
}

/// Runs the conversion stages in order.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: Options,
}

impl Pipeline {
    /// Create a pipeline with the given options.
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Run every stage on `nfa`.
    pub fn run(&self, nfa: &Nfa) -> Result<Conversion> {
        let closures = epsilon_closures(nfa, self.options.closure);
        for (state, closure) in closures.iter() {
            trace!("{} closure of {state}: {closure}", self.options.closure);
        }
        let dfa = subset_construction(nfa, &closures);
        for (state, index) in state_numbering(&dfa) {
            trace!("AFD state {index}: {state}");
        }

        let complement = if self.options.complete {
            let total = complete(&dfa)?;
            complement(&total)?
        } else {
            complement(&dfa)?
        };

        let normalized = normalize_final_states(&dfa)?.into_owned();
        let reverse = reverse(&normalized)?;

        debug!(
            "Run finished: AFD {} states, COMP {} final, REV {} edges",
            dfa.states().len(),
            complement.final_states().len(),
            reverse.transitions().edges().count()
        );

        Ok(Conversion {
            nfa: Automaton::from(nfa),
            dfa,
            complement,
            normalized,
            reverse,
            closure: self.options.closure,
        })
    }
}

/// Every automaton produced by one run. Intermediate stages are kept for
/// inspection.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub nfa: Automaton,
    pub dfa: Automaton,
    pub complement: Automaton,
    /// The DFA with a single final state, input to the reversal.
    pub normalized: Automaton,
    pub reverse: Automaton,
    closure: ClosurePolicy,
}

impl Conversion {
    /// Get the automaton for a variant.
    pub fn automaton(&self, variant: Variant) -> &Automaton {
        match variant {
            Variant::Nfa => &self.nfa,
            Variant::Dfa => &self.dfa,
            Variant::Complement => &self.complement,
            Variant::Reverse => &self.reverse,
        }
    }

    /// Run `word` through one automaton.
    ///
    /// The reverse automaton is run on `word` as given, so its verdict says
    /// whether the AFD accepts `word` read backwards.
    pub fn accepts(&self, variant: Variant, word: &[Symbol]) -> Result<bool> {
        match variant {
            Variant::Dfa | Variant::Complement => simulate(self.automaton(variant), word),
            Variant::Nfa | Variant::Reverse => Ok(simulate_nondeterministic(
                self.automaton(variant),
                word,
                self.closure,
            )),
        }
    }

    /// Run `word` through every automaton, in report order.
    pub fn verdicts(&self, word: &str) -> Result<Vec<Verdict>> {
        let symbols = parse_word(word);
        Variant::ALL
            .iter()
            .map(|&variant| -> Result<Verdict> {
                Ok(Verdict {
                    variant,
                    word: word.to_string(),
                    accepted: self.accepts(variant, &symbols)?,
                })
            })
            .collect()
    }

    /// Hand every automaton, and the verdicts for `word` if given, to `sink`.
    pub fn emit(&self, sink: &mut dyn OutputSink, word: Option<&str>) -> Result<()> {
        for variant in Variant::ALL {
            sink.write_automaton(variant, self.automaton(variant))?;
        }
        if let Some(word) = word {
            for verdict in self.verdicts(word)? {
                sink.report(&verdict)?;
            }
        }
        Ok(())
    }
}

/// Where a run's automata and verdicts go.
pub trait OutputSink {
    /// Output one automaton.
    fn write_automaton(&mut self, variant: Variant, automaton: &Automaton) -> Result<()>;

    /// Output one verdict.
    fn report(&mut self, verdict: &Verdict) -> Result<()>;
}

/// Writes each automaton to `<dir>/<NAME>.txt` and messages to a stream.
pub struct DirectorySink<W: Write> {
    dir: PathBuf,
    messages: W,
}

impl<W: Write> DirectorySink<W> {
    /// Create a sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>, messages: W) -> Self {
        Self {
            dir: dir.into(),
            messages,
        }
    }

    /// Get the message stream back.
    pub fn into_messages(self) -> W {
        self.messages
    }
}

impl<W: Write> OutputSink for DirectorySink<W> {
    fn write_automaton(&mut self, variant: Variant, automaton: &Automaton) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(variant.file_name());
        let mut file = BufWriter::new(File::create(&path)?);
        write_automaton(&mut file, automaton)?;
        file.flush()?;
        info!("Wrote {variant} to {}", path.display());
        writeln!(self.messages, "Arquivo salvo: {}", path.display())?;
        Ok(())
    }

    fn report(&mut self, verdict: &Verdict) -> Result<()> {
        writeln!(self.messages, "{verdict}")?;
        Ok(())
    }
}

/// Writes everything to one stream, each automaton under a `# NAME` header.
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    /// Create a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Get the stream back.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriterSink<io::Stdout> {
    /// Create a sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write_automaton(&mut self, variant: Variant, automaton: &Automaton) -> Result<()> {
        writeln!(self.out, "# {variant}")?;
        write_automaton(&mut self.out, automaton)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn report(&mut self, verdict: &Verdict) -> Result<()> {
        writeln!(self.out, "{verdict}")?;
        Ok(())
    }
}
