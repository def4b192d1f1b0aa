// src/import.rs
//
// Turns an exported HTML machine list into machine records.
//
// Layout assumptions (fixed by the export format):
// - the first <table> in the document is the machine table
// - the first two rows are headers and carry no data
// - data cells are addressed by position, see config::consts
//
// Rows that are too short, or whose id/name is empty after trimming,
// are dropped without raising an error. Tests assert on this: it is
// the documented leniency policy for malformed export rows, not an
// accident.

use std::{error::Error, fmt, io};

use crate::config::options::ImportOptions;
use crate::core::html::{cell_text, next_tag_block_ci, slice_between_ci};
use crate::machines::Machine;

#[derive(Debug)]
pub enum ImportError {
    /// The document contains no <table> element at all.
    NoTableFound,
    /// Opening, reading or decoding the selected file failed.
    Read(io::Error),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::NoTableFound => write!(f, "No table found in file"),
            ImportError::Read(e) => write!(f, "Failed to read file: {e}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::NoTableFound => None,
            ImportError::Read(e) => Some(e),
        }
    }
}

/// Parse with the export's stock layout.
pub fn parse(html: &str) -> Result<Vec<Machine>, ImportError> {
    parse_with(html, &ImportOptions::default())
}

/// Parse against an explicit layout. Pure; touches nothing but `html`.
pub fn parse_with(html: &str, opts: &ImportOptions) -> Result<Vec<Machine>, ImportError> {
    let table = slice_between_ci(html, "<table", "</table>")
        .ok_or(ImportError::NoTableFound)?;

    let cols = &opts.columns;
    let min_len = cols.min_row_len();

    let mut machines = Vec::new();
    let mut row_ix = 0usize;
    let mut pos = 0usize;

    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        let ix = row_ix;
        row_ix += 1;
        if ix < opts.header_rows { continue; }

        let cells = read_cells(tr);
        if cells.len() < min_len { continue; }

        let id = cells[cols.id].clone();
        let name = cells[cols.name].clone();
        if id.is_empty() || name.is_empty() { continue; }

        machines.push(Machine {
            id,
            name,
            category: cells[cols.category].clone(),
            status: cells[cols.status].clone(),
        });
    }

    Ok(machines)
}

/// All <td> cells of one row, cleaned for display.
fn read_cells(tr: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", pos) {
        cells.push(cell_text(&tr[td_s..td_e]));
        pos = td_e;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> String {
        let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
        format!("<tr>{tds}</tr>")
    }

    #[test]
    fn read_cells_cleans_each_td() {
        let tr = "<tr><td> 7 </td><td><b>Press</b></td><td>&amp;co</td></tr>";
        assert_eq!(read_cells(tr), vec!["7", "Press", "&co"]);
    }

    #[test]
    fn header_rows_skip_is_positional() {
        // Data placed in the first two rows is lost on purpose.
        let html = format!(
            "<table>{}{}{}</table>",
            row(&["x", "Tools", "1", "Lathe", "", "", "", "Active"]),
            row(&["x", "Tools", "2", "Mill", "", "", "", "Active"]),
            row(&["x", "Tools", "3", "Press", "", "", "", "Idle"]),
        );
        let out = parse(&html).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "3");
    }

    #[test]
    fn custom_layout_reads_other_offsets() {
        use crate::config::options::{ColumnMap, ImportOptions};
        let opts = ImportOptions {
            columns: ColumnMap { category: 3, id: 0, name: 1, status: 2 },
            header_rows: 0,
        };
        let html = format!("<table>{}</table>", row(&["9", "Saw", "Idle", "Wood"]));
        let out = parse_with(&html, &opts).unwrap();
        assert_eq!(out[0], Machine {
            id: s!("9"),
            name: s!("Saw"),
            category: s!("Wood"),
            status: s!("Idle"),
        });
    }
}
