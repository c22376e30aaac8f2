use crate::storage::InteractionRecord;
use colored::*;

pub fn print_header(text: &str) {
    println!("\n{}", text.bright_cyan().bold());
    println!("{}", "=".repeat(text.len()).bright_cyan());
}

pub fn print_success(text: &str) {
    println!("{}", text.green());
}

pub fn print_error(text: &str) {
    eprintln!("{}", text.red().bold());
}

pub fn print_info(text: &str) {
    println!("{}", text.blue());
}

pub fn print_record(record: &InteractionRecord) {
    println!(
        "{} {} {}",
        format!("#{}", record.id).yellow().bold(),
        format!("[{}]", record.category).dimmed(),
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed()
    );
    println!("  {} {}", "You:".bold(), record.prompt);
    println!("  {} {}", "AI:".cyan().bold(), record.response);
}
