use afconv::automaton::{ClosurePolicy, Nfa};
use afconv::description::NfaDescription;
use afconv::notation::parse_description;
use afconv::pipeline::{DirectorySink, Options, OutputSink, Pipeline, WriterSink};
use afconv::Result;
use log::debug;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Convert an NFA to a DFA and derive its complement and reverse")]
struct Opts {
    /// Automaton notation file, or a JSON description with --json
    #[structopt(long, parse(from_os_str))]
    input: PathBuf,
    /// Read the input as a JSON description
    #[structopt(long)]
    json: bool,
    /// Write AFN.txt, AFD.txt, COMP.txt and REV.txt here instead of stdout
    #[structopt(long, parse(from_os_str))]
    output_dir: Option<PathBuf>,
    /// Word to simulate; defaults to the input's `w:` line
    #[structopt(long)]
    word: Option<String>,
    /// Epsilon closure policy: one-hop or transitive
    #[structopt(long, default_value = "one-hop")]
    closure: ClosurePolicy,
    /// Complete the DFA with a sink state before taking its complement
    #[structopt(long)]
    complete: bool,
}

fn read_description(opts: &Opts) -> Result<NfaDescription> {
    let content = fs::read_to_string(&opts.input)?;
    if opts.json {
        NfaDescription::from_json(&content)
    } else {
        parse_description(&content)
    }
}

fn run(opts: Opts) -> Result<()> {
    let description = read_description(&opts)?;
    let nfa = Nfa::try_from(&description)?;
    debug!(
        "Read {} states, {} transitions from {}",
        nfa.states().len(),
        nfa.transitions().count(),
        opts.input.display()
    );

    let pipeline = Pipeline::new(Options {
        closure: opts.closure,
        complete: opts.complete,
    });
    let conversion = pipeline.run(&nfa)?;

    let word = opts.word.as_deref().or(description.word.as_deref());
    let mut sink: Box<dyn OutputSink> = match opts.output_dir {
        Some(dir) => Box::new(DirectorySink::new(dir, io::stdout())),
        None => Box::new(WriterSink::stdout()),
    };
    conversion.emit(sink.as_mut(), word)
}

fn main() -> ExitCode {
    env_logger::init();
    let opts = Opts::from_args();
    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
