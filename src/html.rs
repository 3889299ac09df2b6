//! Printable HTML answer sheet.
//!
//! Found letters are rendered as `<th>` cells so browsers draw them bold;
//! every other cell is a plain `<td>` holding the original letter.

use std::fmt::Write;

use crate::grid::Grid;
use crate::solver::Solution;

const TITLE: &str = "Word Search Answer";

const STYLE: &str = "table { border-collapse: collapse; }\n\
td, th { border: 1px solid black; text-align: center; width: 40px; }";

/// Renders the answer grid and the remaining word list as an HTML document.
pub fn render_answer_sheet(grid: &Grid, solution: &Solution) -> String {
    let mut html = String::new();

    // writing into a String cannot fail
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html>");
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "<title>{TITLE}</title>");
    let _ = writeln!(html, "<style>\n{STYLE}\n</style>");
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, "<h1>{TITLE}</h1>");
    let _ = writeln!(html, "<table>");

    for row in 0..grid.dim() {
        let _ = writeln!(html, "<tr>");
        for col in 0..grid.dim() {
            let coord = (row, col);
            match solution.solved.get(coord) {
                Some(letter) => {
                    let _ = writeln!(html, "<th>{}</th>", escape(letter));
                }
                None => {
                    let _ = writeln!(html, "<td>{}</td>", escape(grid.letter(coord)));
                }
            }
        }
        let _ = writeln!(html, "</tr>");
    }

    let _ = writeln!(html, "</table>");
    let _ = writeln!(html, "<p>");
    let _ = writeln!(html, "Words to find:<br>");
    for word in solution.words.iter() {
        let escaped: String = word.chars().map(escape).collect();
        let _ = writeln!(html, "<br>{escaped}");
    }
    let _ = writeln!(html, "</p>");
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");

    html
}

/// Escapes a single character for HTML text content.
fn escape(c: char) -> String {
    match c {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        '"' => "&quot;".to_string(),
        _ => c.to_string(),
    }
}
