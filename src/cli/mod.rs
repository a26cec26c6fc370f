//! The annotree Command-Line Interface.
//!
//! A thin shell over the library: read a serialized tree, run one command,
//! write the result.

use crate::annotate::Annotator;
use crate::ast::{Node, Path};
use crate::cli::args::{options_from_flags, AnnotreeArgs, Command, InputArgs};
use crate::diagnostics::AnnotateError;
use crate::{codec, logging};
use clap::Parser;
use std::io::Read;
use std::{fs, process};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    logging::init_tracing();
    let args = AnnotreeArgs::parse();

    let result = match args.command {
        Command::Annotate {
            input,
            parsable,
            record_unsupported,
            compact,
            summary,
        } => handle_annotate(&input, parsable, record_unsupported, compact, summary),
        Command::Dump { input, path } => handle_dump(&input, &path),
    };

    if let Err(e) = result {
        output::print_error(e);
        process::exit(1);
    }
}

/// Handles the `annotate` subcommand.
fn handle_annotate(
    input: &InputArgs,
    parsable: bool,
    record_unsupported: bool,
    compact: bool,
    show_summary: bool,
) -> Result<(), AnnotateError> {
    let mut tree = read_tree(input)?;
    let annotator = Annotator::new(options_from_flags(parsable, record_unsupported));
    let summary = annotator.annotate_in_place(&mut tree)?;
    output::print_tree(&codec::encode(&tree, input.output_format(), compact)?)
        .map_err(|source| AnnotateError::Output { source })?;
    if show_summary {
        output::print_summary(&summary);
    }
    Ok(())
}

/// Handles the `dump` subcommand.
fn handle_dump(input: &InputArgs, path: &Path) -> Result<(), AnnotateError> {
    let tree = read_tree(input)?;
    let node = crate::resolve_path(&tree, path)?;
    output::print_dump(path, &codec::encode(node, input.output_format(), false)?)
        .map_err(|source| AnnotateError::Output { source })?;
    Ok(())
}

fn read_tree(input: &InputArgs) -> Result<Node, AnnotateError> {
    let io_err = |source: std::io::Error| AnnotateError::Io {
        path: input.file.clone(),
        source,
    };
    let text = if input.reads_stdin() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_err)?;
        buf
    } else {
        fs::read_to_string(&input.file).map_err(io_err)?
    };
    codec::decode(&text, input.resolved_format())
}
