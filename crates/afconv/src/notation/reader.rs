use crate::description::{NfaDescription, TransitionDescription};
use crate::error::{Error, Result};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, space0},
    combinator::{all_consuming, map, opt, recognize, rest},
    multi::separated_list0,
    sequence::{delimited, preceded, separated_pair, terminated, tuple},
    IResult, Parser,
};

#[derive(Debug, PartialEq)]
enum Line<'a> {
    States(Vec<&'a str>),
    Symbols(Vec<&'a str>),
    OpenTransitions,
    CloseTransitions,
    Transition(&'a str, &'a str, Vec<&'a str>),
    Start(&'a str),
    Finals(Vec<&'a str>),
    Word(&'a str),
}

/// A word label, or a braced composite label such as `{q0,q1}` as written
/// for subset-construction states.
fn label(input: &str) -> IResult<&str, &str> {
    alt((
        take_while1(|c: char| c.is_alphanumeric() || c == '_'),
        recognize(delimited(char('{'), take_while(|c: char| c != '}'), char('}'))),
    ))
    .parse(input)
}

/// Comma-separated labels; a trailing comma is allowed.
fn label_list(input: &str) -> IResult<&str, Vec<&str>> {
    terminated(
        separated_list0(delimited(space0, char(','), space0), label),
        opt(preceded(space0, char(','))),
    )
    .parse(input)
}

/// `keyword =` or `keyword:` followed by optional spaces.
fn key<'a>(keyword: &'static str, separator: char) -> impl FnMut(&'a str) -> IResult<&'a str, ()> {
    map(
        tuple((tag(keyword), space0, char(separator), space0)),
        |_| (),
    )
}

fn transition(input: &str) -> IResult<&str, Line<'_>> {
    map(
        separated_pair(
            delimited(
                terminated(char('('), space0),
                separated_pair(label, delimited(space0, char(','), space0), label),
                preceded(space0, char(')')),
            ),
            delimited(space0, tag("->"), space0),
            label_list,
        ),
        |((from, symbol), to)| Line::Transition(from, symbol, to),
    )
    .parse(input)
}

fn start_line(input: &str) -> IResult<&str, Line<'_>> {
    alt((
        map(preceded(key("start_state", '='), label), Line::Start),
        map(
            terminated(label, tuple((space0, char(':'), space0, tag("inicial")))),
            Line::Start,
        ),
    ))
    .parse(input)
}

/// Each alternative must consume the whole line, so a branch matching only
/// a prefix (`F: inicial1` read as a start marker) falls through to the next.
fn line(input: &str) -> IResult<&str, Line<'_>> {
    alt((
        all_consuming(map(preceded(key("states", '='), label_list), Line::States)),
        all_consuming(map(preceded(key("symbols", '='), label_list), Line::Symbols)),
        all_consuming(map(
            tuple((tag("transitions"), space0, char('='), space0, char('{'))),
            |_| Line::OpenTransitions,
        )),
        all_consuming(map(char('}'), |_| Line::CloseTransitions)),
        all_consuming(transition),
        all_consuming(start_line),
        all_consuming(map(preceded(key("final_states", '='), label_list), Line::Finals)),
        all_consuming(map(preceded(key("F", ':'), label_list), Line::Finals)),
        all_consuming(map(preceded(key("w", ':'), rest), |word: &str| {
            Line::Word(word.trim())
        })),
    ))
    .parse(input)
}

/// Parse automaton notation into a description.
///
/// Blank lines are skipped. Any other line that is not part of the notation
/// is reported with its 1-based line number.
pub fn parse_description(text: &str) -> Result<NfaDescription> {
    let mut description = NfaDescription::default();
    let mut seen_states = false;

    for (index, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (_, parsed) = line(trimmed).map_err(|_| Error::Parse {
            line: index + 1,
            message: format!("unrecognized line `{trimmed}`"),
        })?;

        match parsed {
            Line::States(states) => {
                seen_states = true;
                description.states = states.into_iter().map(String::from).collect();
            }
            Line::Symbols(symbols) => {
                description.symbols = symbols.into_iter().map(String::from).collect();
            }
            Line::OpenTransitions | Line::CloseTransitions => {}
            Line::Transition(from, symbol, to) => {
                description.transitions.push(TransitionDescription {
                    from: from.to_string(),
                    symbol: symbol.to_string(),
                    to: to.into_iter().map(String::from).collect(),
                });
            }
            Line::Start(state) => description.start = Some(state.to_string()),
            Line::Finals(states) => {
                description.finals = states.into_iter().map(String::from).collect();
            }
            Line::Word(word) => description.word = Some(word.to_string()),
        }
    }

    if !seen_states {
        return Err(Error::MissingField { field: "states" });
    }
    Ok(description)
}
