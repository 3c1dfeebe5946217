//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static STAR: Emoji<'_, '_> = Emoji("⭐ ", "");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
     █████╗ ███╗   ██╗██╗███╗   ███╗███████╗██████╗  █████╗  ██████╗██╗  ██╗
    ██╔══██╗████╗  ██║██║████╗ ████║██╔════╝██╔══██╗██╔══██╗██╔════╝██║ ██╔╝
    ███████║██╔██╗ ██║██║██╔████╔██║█████╗  ██████╔╝███████║██║     █████╔╝
    ██╔══██║██║╚██╗██║██║██║╚██╔╝██║██╔══╝  ██╔═══╝ ██╔══██║██║     ██╔═██╗
    ██║  ██║██║ ╚████║██║██║ ╚═╝ ██║███████╗██║     ██║  ██║╚██████╗██║  ██╗
    ╚═╝  ╚═╝╚═╝  ╚═══╝╚═╝╚═╝     ╚═╝╚══════╝╚═╝     ╚═╝  ╚═╝ ╚═════╝╚═╝  ╚═╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}",
        style("Catalog CSV in, dashboard bundle out").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(input: &Path, output: &Path, top: usize, source_label: &str) {
    println!(
        "    {} Input:  {}",
        FOLDER,
        style(truncate_path(input, 48)).white()
    );
    println!(
        "    {} Output: {}",
        SAVE,
        style(truncate_path(output, 48)).white()
    );
    println!(
        "    {} Top:    {}",
        STAR,
        style(top).yellow()
    );
    println!(
        "    {} Source: {}",
        INFO,
        style(truncate_string(source_label, 48)).dim()
    );
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, extra: Option<&str>) {
    if let Some(info) = extra {
        println!(
            "      {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!("      {} {}", style(count).yellow().bold(), description);
    }
}

/// Print a step timing line
pub fn print_step_time(elapsed: std::time::Duration) {
    println!(
        "      {}",
        style(format!("done in {:.3}s", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion(output: &Path) {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Bundle ready for the dashboard!").green().bold()
    );
    println!(
        "    {}",
        style(format!("Output file: {}", output.display())).dim()
    );
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let tail: String = s
            .chars()
            .rev()
            .take(max_len.saturating_sub(3))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    }
}
