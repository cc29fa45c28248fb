use colored::Colorize;

/// Table formatting utilities
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    max_widths: Vec<usize>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        let max_widths = headers.iter().map(|h| h.len()).collect();
        Self {
            headers,
            rows: Vec::new(),
            max_widths,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        // Update max widths
        for (i, cell) in row.iter().enumerate() {
            if i < self.max_widths.len() {
                self.max_widths[i] = self.max_widths[i].max(cell.chars().count());
            }
        }
        self.rows.push(row);
    }

    pub fn print(&self) {
        self.print_separator();
        self.print_header();
        self.print_separator();

        for row in &self.rows {
            self.print_row(row);
        }

        self.print_separator();
    }

    fn print_separator(&self) {
        print!("+");
        for &width in &self.max_widths {
            print!("{}", "-".repeat(width + 2));
            print!("+");
        }
        println!();
    }

    fn print_header(&self) {
        print!("|");
        for (i, header) in self.headers.iter().enumerate() {
            print!(" {:<width$} ", header.bold(), width = self.max_widths[i]);
            print!("|");
        }
        println!();
    }

    fn print_row(&self, row: &[String]) {
        print!("|");
        for (i, cell) in row.iter().enumerate() {
            let width = if i < self.max_widths.len() {
                self.max_widths[i]
            } else {
                0
            };
            print!(" {:<width$} ", cell, width = width);
            print!("|");
        }
        println!();
    }
}

/// Status messages, kept off stdout so tables stay pipeable.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "[Error]".red().bold(), message);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "[Warning]".yellow().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_track_widest_cell() {
        let mut table = Table::new(vec!["A".to_string(), "LONGHEAD".to_string()]);
        table.add_row(vec!["wide-cell".to_string(), "x".to_string()]);
        assert_eq!(table.max_widths, vec![9, 8]);
    }

    #[test]
    fn test_extra_cells_are_ignored_for_widths() {
        let mut table = Table::new(vec!["ONLY".to_string()]);
        table.add_row(vec!["a".to_string(), "spurious".to_string()]);
        assert_eq!(table.max_widths, vec![4]);
    }
}
