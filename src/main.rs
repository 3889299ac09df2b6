//! Word Search Solver
//!
//! Reads a puzzle file holding a square letter grid and a list of words,
//! finds every word reading in any of eight straight directions, and writes
//! the answer as a text file and a printable HTML page.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use wordsearch::grid::{format_overlay, format_solution};
use wordsearch::persistence::{self, OutputPaths};
use wordsearch::{Puzzle, Solution};

/// Solves word search puzzles and writes printable answers.
#[derive(Parser)]
#[command(name = "wordsearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory the answer files are written into.
    #[arg(long, global = true, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle file and write the text and HTML answers.
    Solve {
        /// Path of the puzzle file.
        puzzle: PathBuf,
    },
    /// Solve a puzzle file and print the answer without writing files.
    Print {
        /// Path of the puzzle file.
        puzzle: PathBuf,
        /// Show only the found letters.
        #[arg(long)]
        only_found: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let paths = OutputPaths::in_dir(&cli.out_dir);

    let result = match cli.command {
        Some(Command::Solve { puzzle }) => run_solve(&puzzle, &paths),
        Some(Command::Print { puzzle, only_found }) => run_print(&puzzle, only_found),
        None => {
            run_prompt_loop(&paths);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Solves a puzzle file and saves both answer files.
fn run_solve(path: &Path, paths: &OutputPaths) -> wordsearch::Result<()> {
    let puzzle = persistence::load_puzzle(path)?;
    let solution = puzzle.solve();
    persistence::save(&puzzle.grid, &solution, paths)?;

    println!("{}", summary(&solution));
    println!(
        "Wrote {} and {}",
        paths.text.display(),
        paths.html.display()
    );
    Ok(())
}

/// Solves a puzzle file and prints the answer to stdout.
fn run_print(path: &Path, only_found: bool) -> wordsearch::Result<()> {
    let puzzle = persistence::load_puzzle(path)?;
    let solution = puzzle.solve();
    print!("{}", format_report(&puzzle, &solution, only_found));
    Ok(())
}

/// Asks for puzzle file names until stdin is exhausted.
///
/// The `.txt` extension is appended to each name. A file that cannot be used
/// is reported and the loop asks again.
fn run_prompt_loop(paths: &OutputPaths) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Please enter the file name: ");
        let _ = io::stdout().flush();

        let name = match lines.next() {
            Some(Ok(name)) => name,
            Some(Err(e)) => {
                log::error!("failed to read file name: {e}");
                break;
            }
            None => {
                println!();
                break;
            }
        };

        let path = PathBuf::from(format!("{}.txt", name.trim()));
        let puzzle = match persistence::load_puzzle(&path) {
            Ok(puzzle) => puzzle,
            Err(e) => {
                log::warn!("{e}");
                println!("Error: File cannot be used\n");
                continue;
            }
        };

        let solution = puzzle.solve();
        match persistence::save(&puzzle.grid, &solution, paths) {
            Ok(()) => println!("Please check the output folder to see the solved puzzle\n"),
            Err(e) => {
                log::warn!("{e}");
                println!("Error: Unable to create new files\n");
            }
        }
    }
}

/// One-line count of found and missing words.
fn summary(solution: &Solution) -> String {
    let mut line = format!(
        "Found {} of {} words",
        solution.placements.len(),
        solution.placements.len() + solution.missing.len()
    );
    if !solution.missing.is_empty() {
        line.push_str(&format!(" (not found: {})", solution.missing.join(", ")));
    }
    line
}

/// Formats the answer grid followed by the located placements.
fn format_report(puzzle: &Puzzle, solution: &Solution, only_found: bool) -> String {
    let mut output = if only_found {
        format_overlay(&solution.solved)
    } else {
        format_solution(&puzzle.grid, &solution.solved)
    };
    output.push('\n');
    for placement in &solution.placements {
        output.push_str(&format!(
            "{} at ({}, {}) reading {}\n",
            placement.word, placement.start.0, placement.start.1, placement.direction
        ));
    }
    output.push_str(&summary(solution));
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str = "\
B I R D X
O X X O X
W W X G X
X X L X X
C A T X Z
bird
bow
dog
cat
owl
god
zebra
";

    #[test]
    fn test_report_snapshot() {
        let puzzle = persistence::parse_puzzle(PUZZLE).unwrap();
        let solution = puzzle.solve();

        insta::assert_snapshot!(format_report(&puzzle, &solution, false), @r"
        B I R D X
        O X X O X
        W W X G X
        X X L X X
        C A T X Z

        BIRD at (0, 0) reading right
        BOW at (0, 0) reading down
        DOG at (0, 3) reading down
        CAT at (4, 0) reading right
        OWL at (1, 0) reading down-right
        GOD at (2, 3) reading up
        Found 6 of 7 words (not found: zebra)
        ");
    }

    #[test]
    fn test_report_only_found_snapshot() {
        let puzzle = persistence::parse_puzzle(PUZZLE).unwrap();
        let solution = puzzle.solve();

        insta::assert_snapshot!(format_report(&puzzle, &solution, true), @r"
        B I R D .
        O . . O .
        W W . G .
        . . L . .
        C A T . .

        BIRD at (0, 0) reading right
        BOW at (0, 0) reading down
        DOG at (0, 3) reading down
        CAT at (4, 0) reading right
        OWL at (1, 0) reading down-right
        GOD at (2, 3) reading up
        Found 6 of 7 words (not found: zebra)
        ");
    }

    #[test]
    fn test_summary_without_missing_words() {
        let puzzle = persistence::parse_puzzle("C A T\nX X X\nX X X\ncat\n").unwrap();
        assert_eq!(summary(&puzzle.solve()), "Found 1 of 1 words");
    }
}
