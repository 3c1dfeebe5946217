//! End-of-run summary table

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Counters collected across the run, displayed once at the end.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub input_rows: usize,
    pub skipped_rows: usize,
    pub dropped_rows: usize,
    pub selected: usize,
    pub requested: usize,
    pub genre_count: usize,
    pub range_count: usize,
    pub output_bytes: u64,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("BUNDLE SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📂 Rows loaded"),
            Cell::new(self.input_rows),
        ]);

        let total_dropped = self.skipped_rows + self.dropped_rows;
        table.add_row(vec![
            Cell::new("🗑️  Rows dropped"),
            Cell::new(total_dropped).fg(if total_dropped == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        let selected_cell = Cell::new(format!("{} / {}", self.selected, self.requested)).fg(
            if self.selected < self.requested {
                Color::Yellow
            } else {
                Color::Green
            },
        );
        table.add_row(vec![
            Cell::new("⭐ Selected"),
            selected_cell.add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("🎭 Genres"), Cell::new(self.genre_count)]);
        table.add_row(vec![
            Cell::new("📺 Episode ranges"),
            Cell::new(self.range_count),
        ]);

        table.add_row(vec![
            Cell::new("💾 Bundle size"),
            Cell::new(format!("{:.1} KB", self.output_bytes as f64 / 1024.0))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("⏱️  Elapsed"),
            Cell::new(format!("{:.2}s", self.elapsed.as_secs_f64())),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
