//! Defines the command-line arguments and subcommands for the annotree CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::annotate::{AnnotateOptions, Mode, UnsupportedPolicy};
use crate::ast::Path;
use crate::codec::Format;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "annotree",
    version,
    about = "Flattens constructor calls in serialized Python syntax trees."
)]
pub struct AnnotreeArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Where a tree is read from and how it is encoded.
#[derive(Debug, clap::Args)]
pub struct InputArgs {
    /// Serialized tree to read; `-` reads stdin.
    #[arg(required = true)]
    pub file: PathBuf,
    /// Input format. Inferred from the file extension, JSON otherwise.
    #[arg(long, value_enum)]
    pub format: Option<Format>,
    /// Output format. Defaults to the input format.
    #[arg(long, value_enum)]
    pub to: Option<Format>,
}

impl InputArgs {
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }

    pub fn resolved_format(&self) -> Format {
        self.format
            .or_else(|| Format::from_path(&self.file))
            .unwrap_or_default()
    }

    pub fn output_format(&self) -> Format {
        self.to.unwrap_or_else(|| self.resolved_format())
    }
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Annotate constructor calls and print the resulting tree.
    Annotate {
        #[command(flatten)]
        input: InputArgs,
        /// Keep the original call fields so the tree can still be unparsed.
        #[arg(long)]
        parsable: bool,
        /// Write `null` for keyword values that have no flattened form
        /// instead of leaving them out.
        #[arg(long)]
        record_unsupported: bool,
        /// Single-line JSON output.
        #[arg(long)]
        compact: bool,
        /// Print traversal statistics and skipped arguments to stderr.
        #[arg(long)]
        summary: bool,
    },
    /// Print the subtree found at a path, e.g. `$.body[0].value`.
    Dump {
        #[command(flatten)]
        input: InputArgs,
        /// Location of the subtree.
        #[arg(long, default_value = "$")]
        path: Path,
    },
}

/// Builds annotation options from the `annotate` flags.
pub fn options_from_flags(parsable: bool, record_unsupported: bool) -> AnnotateOptions {
    let mode = if parsable { Mode::Parsable } else { Mode::Slim };
    let unsupported = if record_unsupported {
        UnsupportedPolicy::Null
    } else {
        UnsupportedPolicy::Omit
    };
    AnnotateOptions::new(mode).with_unsupported(unsupported)
}
