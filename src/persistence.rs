//! File I/O for reading puzzles and saving answers.
//!
//! Puzzle file format, one entry per line:
//! - a line containing a space is a grid row; each whitespace-separated token
//!   is a cell, and only its first character is kept
//! - any other non-blank line is a word to find
//! - blank lines are ignored
//!
//! Rows and words may be interleaved; their relative order is kept.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PuzzleError, Result};
use crate::grid::{format_solution, Grid};
use crate::html::render_answer_sheet;
use crate::puzzle::{Puzzle, WordList};
use crate::solver::Solution;

/// Default name of the plain-text answer file.
pub const SOLVED_TXT: &str = "Solved Word Search.txt";
/// Default name of the printable HTML answer file.
pub const ANSWER_HTML: &str = "Answer Print Out.html";

/// Parses a puzzle from the text of a puzzle file.
pub fn parse_puzzle(text: &str) -> Result<Puzzle> {
    let mut rows = Vec::new();
    let mut words = Vec::new();

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if line.contains(' ') {
            rows.push(
                line.split_whitespace()
                    .filter_map(|token| token.chars().next())
                    .collect::<Vec<_>>(),
            );
        } else {
            words.push(line.trim());
        }
    }

    log::debug!("parsed {} grid rows and {} words", rows.len(), words.len());
    let grid = Grid::new(rows)?;
    Ok(Puzzle::new(grid, WordList::new(words)))
}

/// Reads and parses a puzzle file.
pub fn load_puzzle(path: &Path) -> Result<Puzzle> {
    let text = fs::read_to_string(path).map_err(|source| PuzzleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_puzzle(&text)
}

/// Where the answer files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub text: PathBuf,
    pub html: PathBuf,
}

impl OutputPaths {
    /// Uses the default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            text: dir.join(SOLVED_TXT),
            html: dir.join(ANSWER_HTML),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            text: PathBuf::from(SOLVED_TXT),
            html: PathBuf::from(ANSWER_HTML),
        }
    }
}

/// Formats the plain-text answer: remaining words, then the answer grid.
pub fn format_text(grid: &Grid, solution: &Solution) -> String {
    let mut output = String::new();
    for word in solution.words.iter() {
        output.push_str(word);
        output.push('\n');
    }
    output.push_str(&format_solution(grid, &solution.solved));
    output
}

/// Saves the answer to both the text and the HTML file.
pub fn save(grid: &Grid, solution: &Solution, paths: &OutputPaths) -> Result<()> {
    write_file(&paths.text, &format_text(grid, solution))?;
    write_file(&paths.html, &render_answer_sheet(grid, solution))?;
    log::info!(
        "wrote {} and {}",
        paths.text.display(),
        paths.html.display()
    );
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| PuzzleError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT_PUZZLE: &str = "cat\nC A T\nX X X\r\n\nX X X\ndog\n";

    #[test]
    fn test_parse_splits_rows_and_words() {
        let puzzle = parse_puzzle(CAT_PUZZLE).unwrap();
        assert_eq!(puzzle.grid.dim(), 3);
        assert_eq!(puzzle.grid.letter((0, 2)), 'T');
        assert_eq!(puzzle.grid.letter((2, 2)), 'X');
        assert_eq!(puzzle.words.as_slice(), ["cat", "dog"]);
    }

    #[test]
    fn test_parse_keeps_first_char_of_each_token() {
        let puzzle = parse_puzzle("Ab  Cd\nEf Gh\n").unwrap();
        assert_eq!(puzzle.grid, Grid::from_rows(&["AC", "EG"]).unwrap());
        assert!(puzzle.words.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_grids() {
        assert!(matches!(
            parse_puzzle("cat\ndog\n"),
            Err(PuzzleError::EmptyGrid)
        ));
        assert!(matches!(
            parse_puzzle("A B C\nD E F\n"),
            Err(PuzzleError::NotSquare { row: 0, len: 3, expected: 2 })
        ));
    }

    #[test]
    fn test_format_text_lists_remaining_words_then_grid() {
        let puzzle = parse_puzzle("c a t\nx x x\nx x x\ncat\ndog\n").unwrap();
        let solution = puzzle.solve();
        assert_eq!(
            format_text(&puzzle.grid, &solution),
            "cat\nC A T\nx x x\nx x x\n"
        );
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let path = Path::new("definitely/not/a/puzzle.txt");
        let err = load_puzzle(path).unwrap_err();
        assert!(matches!(err, PuzzleError::Read { .. }));
        assert!(err.to_string().starts_with("cannot read definitely/not/a/puzzle.txt"));
    }

    #[test]
    fn test_save_and_load_roundtrip_through_files() {
        let dir = std::env::temp_dir().join(format!("wordsearch-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("puzzle.txt");
        fs::write(&input, CAT_PUZZLE).unwrap();

        let puzzle = load_puzzle(&input).unwrap();
        let solution = puzzle.solve();
        let paths = OutputPaths::in_dir(&dir);
        save(&puzzle.grid, &solution, &paths).unwrap();

        let text = fs::read_to_string(&paths.text).unwrap();
        assert_eq!(text, "cat\nC A T\nX X X\nX X X\n");
        let html = fs::read_to_string(&paths.html).unwrap();
        assert!(html.contains("<th>C</th>"));
        assert!(!html.contains("dog"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_default_output_paths() {
        let paths = OutputPaths::default();
        assert_eq!(paths.text, PathBuf::from("Solved Word Search.txt"));
        assert_eq!(paths.html, PathBuf::from("Answer Print Out.html"));
        assert_eq!(
            OutputPaths::in_dir(Path::new("out")).html,
            Path::new("out").join(ANSWER_HTML)
        );
    }
}
