use std::fmt;

use super::{Board, Coord};

impl fmt::Display for Board {
    /// Row 1 at the bottom, White uppercase, Black lowercase, `.` for empty.
    /// Columns are as wide as the longest file label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self.rows.to_string().len();
        let files: Vec<String> = (0..self.cols).map(|col| Coord(0, col).file_label()).collect();
        let cell = files.iter().map(String::len).max().unwrap_or(1);

        for row in (0..self.rows).rev() {
            write!(f, "{:>label_width$} |", row + 1)?;
            for col in 0..self.cols {
                let ch = self
                    .piece_at(Coord(row, col))
                    .map_or('.', |p| p.kind().to_display_char(p.color()));
                write!(f, " {ch:>cell$}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{:>label_width$}  ", "")?;
        for file in &files {
            write!(f, " {file:>cell$}")?;
        }
        writeln!(f)
    }
}
