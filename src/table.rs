//! Box-drawing table renderer.
//!
//! The first row is the header. Every column is as wide as its widest cell, 
//! padded with one space on each side; rows are separated by rules.
//!
//! ```text
//! ┌───┬──────┐
//! │ x │ f(x) │
//! ├───┼──────┤
//! │ 1 │ 2    │
//! └───┴──────┘
//! ```

use std::fmt::Write as _; 
use thiserror::Error; 


const VERTICAL:     char = '│'; 
const HORIZONTAL:   char = '─'; 
const TOP_LEFT:     char = '┌'; 
const TOP_RIGHT:    char = '┐'; 
const BOTTOM_LEFT:  char = '└'; 
const BOTTOM_RIGHT: char = '┘'; 
const T_DOWN:       char = '┬'; 
const T_UP:         char = '┴'; 
const T_RIGHT:      char = '├'; 
const T_LEFT:       char = '┤'; 
const CROSS:        char = '┼'; 


#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError { 
    #[error("table has no rows")]
    Empty, 

    #[error("row {row} has {got} cells, header has {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize }, 
}


fn cell_width(cell: &str) -> usize { 
    cell.chars().count()
}

fn rule(out: &mut String, widths: &[usize], (left, mid, right): (char, char, char)) { 
    out.push(left); 
    for (i, w) in widths.iter().enumerate() { 
        if i > 0 { 
            out.push(mid); 
        }
        out.extend(std::iter::repeat(HORIZONTAL).take(w + 2)); 
    }
    out.push(right); 
    out.push('\n'); 
}


/// Renders `table` (header first) as a bordered grid, one line per `\n`.
///
/// # Errors 
/// - [`TableError::Empty`]     : no header row 
/// - [`TableError::RaggedRow`] : a row's cell count differs from the header's 
pub fn render<S: AsRef<str>>(table: &[Vec<S>]) -> Result<String, TableError> { 
    let header = table.first().ok_or(TableError::Empty)?; 
    let columns = header.len(); 

    let mut widths = vec![0usize; columns]; 
    for (i, row) in table.iter().enumerate() { 
        if row.len() != columns { 
            return Err(TableError::RaggedRow { row: i, expected: columns, got: row.len() }); 
        }
        for (w, cell) in widths.iter_mut().zip(row) { 
            *w = (*w).max(cell_width(cell.as_ref())); 
        }
    }

    let mut out = String::new(); 
    rule(&mut out, &widths, (TOP_LEFT, T_DOWN, TOP_RIGHT)); 
    for (i, row) in table.iter().enumerate() { 
        out.push(VERTICAL); 
        for (w, cell) in widths.iter().zip(row) { 
            // writing into a String cannot fail
            let _ = write!(out, " {:<w$} {VERTICAL}", cell.as_ref(), w = *w); 
        }
        out.push('\n'); 

        if i + 1 < table.len() { 
            rule(&mut out, &widths, (T_RIGHT, CROSS, T_LEFT)); 
        }
    }
    rule(&mut out, &widths, (BOTTOM_LEFT, T_UP, BOTTOM_RIGHT)); 

    Ok(out)
}
