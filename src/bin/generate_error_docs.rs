//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `PuzzleError` and `SolverError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;
use std::io;

use letterboxed::errors::PuzzleError;
use letterboxed::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! write_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            let out: &mut String = $out;
            let _ = writeln!(out, "### {}: {}\n", error.code(), error.description());
            let _ = writeln!(out, "**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                let _ = writeln!(out, "**How to fix:**\n```\n{help_text}\n```\n");
            }

            let _ = writeln!(out, "**Example error message:**\n```\n{error}\n```\n");
            let _ = writeln!(out, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed());
            let _ = writeln!(out, "---\n");
        }
    };
}

/// Helper to create all `PuzzleError` variants for documentation
fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::InvalidLetterCount { count: 2 },
        PuzzleError::NonAlphabeticLetters { invalid_char: '-' },
        PuzzleError::DuplicateLetters { letter: 'A' },
    ]
}

/// Helper to create all `SolverError` variants for documentation
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::InvalidPuzzle(PuzzleError::InvalidLetterCount { count: 2 }),
        SolverError::DictionaryUnavailable {
            source_name: "dictionary.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
    ]
}

fn render_docs() -> String {
    let mut out = String::new();
    out.push_str("# Error Code Reference\n\n");
    out.push_str("**This document is auto-generated from the source code. Do not edit manually.**\n\n");

    out.push_str("## Table of Contents\n\n");
    out.push_str("- [Solver Errors (S001–S002)](#solver-errors)\n");
    out.push_str("- [Puzzle Errors (P001–P003)](#puzzle-errors)\n\n");

    out.push_str("## Solver Errors\n\n");
    out.push_str("Top-level errors from a solve. These wrap puzzle validation errors or report a missing dictionary.\n\n");
    write_error_docs!(&mut out, all_solver_error_variants());

    out.push_str("## Puzzle Errors\n\n");
    out.push_str("Errors from validating the 12 puzzle letters. Only the first failing check is reported, in code order.\n\n");
    write_error_docs!(&mut out, all_puzzle_error_variants());

    out.push_str("## Error Display Formats\n\n");
    out.push_str("### Simple Format\n```\nError: <message>\n```\n\n");
    out.push_str("### Detailed Format (via `display_detailed()`)\n```\n<message> (<code>)\n<help text if available>\n```\n");
    out
}

fn main() {
    print!("{}", render_docs());
}
