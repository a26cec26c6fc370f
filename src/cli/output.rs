//! Handles all user-facing output for the CLI.
//!
//! Trees go to stdout untouched so they can be piped; headers, statistics
//! and diagnostics go to stderr or are colored only when the stream is a
//! terminal. A failed write of the tree itself is an error; cosmetic writes
//! (colors, statistics) are best effort.

use std::io::{self, IsTerminal, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::annotate::Summary;
use crate::ast::Path;
use crate::diagnostics::AnnotateError;

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Prints a serialized tree to stdout.
pub fn print_tree(text: &str) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Never);
    writeln!(stdout, "{}", text.trim_end())?;
    stdout.flush()
}

/// Prints the subtree found at `path` under a colored header.
pub fn print_dump(path: &Path, text: &str) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(io::stdout().is_terminal()));
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    writeln!(stdout, "--- {} ---", path)?;
    let _ = stdout.reset();
    writeln!(stdout, "{}", text.trim_end())?;
    stdout.flush()
}

/// Prints traversal statistics and skipped keyword arguments to stderr.
pub fn print_summary(summary: &Summary) {
    let mut stderr = StandardStream::stderr(color_choice(io::stderr().is_terminal()));
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    let _ = writeln!(
        stderr,
        "{} constructor call(s) flattened, {} node(s) visited",
        summary.rewritten, summary.visited
    );
    let _ = stderr.reset();
    for skipped in &summary.skipped {
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
        let _ = write!(stderr, "skipped");
        let _ = stderr.reset();
        let _ = writeln!(
            stderr,
            " {}={} at {}",
            skipped.keyword.as_deref().unwrap_or("**"),
            skipped.found,
            skipped.path
        );
    }
}

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Renders an error as a miette diagnostic on stderr.
pub fn print_error(error: AnnotateError) {
    eprintln!("{:?}", miette::Report::new(error));
}
