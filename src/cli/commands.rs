//! Command implementations for the lexreply CLI.

use std::io::{self, BufRead, Write};

use log::{error, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ResponderConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::responder::Responder;

/// Words that end a chat session.
const EXIT_WORDS: &[&str] = &["quit", "exit"];

/// Execute a CLI command.
pub fn execute_command(args: LexreplyArgs) -> Result<()> {
    let responder = build_responder(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Ask(ask_args) => ask(&responder, ask_args, &args, &mut out),
        Command::Explain(explain_args) => explain(&responder, explain_args, &args, &mut out),
        Command::Intents => list_intents(&responder, &args, &mut out),
        Command::Chat => {
            if args.verbosity() > 0 && args.output_format == OutputFormat::Human {
                eprintln!("Customer Support Chatbot. Type 'quit' or 'exit' to leave.");
            }
            let stdin = io::stdin();
            chat(&responder, stdin.lock(), &mut out, &args)
        }
    }
}

/// Load the corpus and configuration named on the command line.
pub fn build_responder(args: &LexreplyArgs) -> Result<Responder> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ResponderConfig::from_file(path)?
        }
        None => ResponderConfig::default(),
    };

    let corpus = match &args.corpus {
        Some(path) => Corpus::from_file(path)?,
        None => Corpus::builtin()?,
    };

    Responder::build(corpus, &config)
}

/// Answer one question.
pub fn ask<W: Write>(
    responder: &Responder,
    ask_args: &AskArgs,
    args: &LexreplyArgs,
    out: &mut W,
) -> Result<()> {
    let response = responder.get_response(&ask_args.query)?;
    output_result(
        &AnswerResult {
            query: ask_args.query.clone(),
            response,
        },
        args,
        out,
    )
}

/// Explain how one question is matched.
pub fn explain<W: Write>(
    responder: &Responder,
    explain_args: &ExplainArgs,
    args: &LexreplyArgs,
    out: &mut W,
) -> Result<()> {
    let explanation = responder.explain(&explain_args.query)?;
    output_result(
        &ExplainResult {
            explanation,
            top: explain_args.top,
        },
        args,
        out,
    )
}

/// List the loaded intents.
pub fn list_intents<W: Write>(responder: &Responder, args: &LexreplyArgs, out: &mut W) -> Result<()> {
    output_result(
        &IntentList {
            intents: responder.intents().to_vec(),
        },
        args,
        out,
    )
}

/// Run an interactive session, one question per input line.
///
/// Blank lines are skipped. `quit`, `exit` or end of input ends the
/// session. A question whose response cannot be rendered is logged and
/// the session continues.
pub fn chat<R: BufRead, W: Write>(
    responder: &Responder,
    input: R,
    out: &mut W,
    args: &LexreplyArgs,
) -> Result<()> {
    let mut answered = 0usize;

    for line in input.lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if EXIT_WORDS.iter().any(|word| query.eq_ignore_ascii_case(word)) {
            break;
        }

        let response = match responder.get_response(query) {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to answer {query:?}: {e}");
                continue;
            }
        };
        answered += 1;

        match args.output_format {
            OutputFormat::Human => {
                writeln!(out, "You: {query}")?;
                writeln!(out, "Chatbot: {response}")?;
                writeln!(out)?;
            }
            OutputFormat::Json => {
                let answer = AnswerResult {
                    query: query.to_string(),
                    response,
                };
                output_json(&answer, args.pretty, out)?;
            }
        }
        out.flush()?;
    }

    info!("Chat session ended after {answered} questions");
    Ok(())
}
