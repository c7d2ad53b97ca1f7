use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use letterboxed::solver::{self, SolveConfig, SolveStatus};
use letterboxed::word_list::DictionaryFile;

/// Letter Boxed two-word solver
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// The 12 puzzle letters, ordered so that each run of three consecutive letters is one side
    #[arg(
        short,
        long,
        visible_alias = "puzzle-letters",
        alias = "puzzle_letters",
        short_alias = 'p',
        default_value = "XLBOCUIMQAYT"
    )]
    letters: String,

    /// Path to the dictionary file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/dictionary.txt")
    )]
    dictionary: String,

    /// Give up searching after this many seconds (default: search the whole dictionary)
    #[arg(short = 't', long)]
    time_budget_secs: Option<f64>,
}

/// Entry point of the Letter Boxed CLI solver.
///
/// Delegates to [`try_main`], printing any error in detail and exiting
/// with code 1. Finding no solutions is still a successful run.
fn main() -> ExitCode {
    let debug_enabled = std::env::var(letterboxed::log::DEBUG_ENV_VAR).is_ok();
    letterboxed::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the Letter Boxed CLI solver.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Build a [`SolveConfig`] from the letters, the dictionary path and the optional time budget.
/// 3. Solve (validates the letters, loads and filters the dictionary, searches for pairs).
/// 4. Print the report on stdout.
/// 5. Print timeout notice and diagnostics (word counts, timing) on stderr.
///
/// Returns `Ok(())` whether or not solutions were found, or an error
/// (invalid letters, unreadable dictionary, bad time budget) which bubbles
/// up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let dictionary = DictionaryFile::new(&cli.dictionary);
    let mut config = SolveConfig::new(cli.letters, &dictionary);
    if let Some(secs) = cli.time_budget_secs {
        config = config.with_time_budget(Duration::try_from_secs_f64(secs)?);
    }

    let result = solver::solve(&config)?;

    print!("{}", solver::render_report(&result.puzzle, &result.solutions));

    if let SolveStatus::TimedOut { elapsed } = result.status {
        eprintln!(
            "Timed out after {:.1}s; some solutions may not have been returned",
            elapsed.as_secs_f64()
        );
    }

    eprintln!(
        "Loaded {} words ({} usable); solved in {:.3}s.",
        result.stats.words_loaded,
        result.stats.words_usable,
        result.stats.elapsed.as_secs_f64()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["letterboxed"]).unwrap();
        assert_eq!(cli.letters, "XLBOCUIMQAYT");
        assert!(cli.dictionary.ends_with("/data/dictionary.txt"));
        assert_eq!(cli.time_budget_secs, None);
    }

    #[test]
    fn test_letters_spellings() {
        for args in [
            vec!["letterboxed", "-l", "matdlbeunrix"],
            vec!["letterboxed", "--letters", "matdlbeunrix"],
            vec!["letterboxed", "--puzzle-letters", "matdlbeunrix"],
            vec!["letterboxed", "--puzzle_letters", "matdlbeunrix"],
            vec!["letterboxed", "-p", "matdlbeunrix"],
        ] {
            let cli = Cli::try_parse_from(&args).unwrap();
            assert_eq!(cli.letters, "matdlbeunrix", "{args:?}");
        }
    }

    #[test]
    fn test_dictionary_and_time_budget() {
        let cli = Cli::try_parse_from(["letterboxed", "-d", "words.txt", "-t", "2.5"]).unwrap();
        assert_eq!(cli.dictionary, "words.txt");
        assert_eq!(cli.time_budget_secs, Some(2.5));
    }
}
