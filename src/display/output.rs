use crate::analysis::stats_table::StatsTable;
use colored::*;
use serde_json::Value;
use tabled::{builder::Builder, settings::Style};

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => format!("[{} entries]", items.len()),
        Some(other) => other.to_string(),
    }
}

pub fn render_table(table: &StatsTable) -> String {
    let columns = table.columns();
    let mut builder = Builder::default();
    builder.push_record(columns.clone());

    for row in table.rows() {
        builder.push_record(columns.iter().map(|c| cell_text(row.get(c))));
    }

    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    rendered.to_string()
}

pub fn display_stats_table(table: &StatsTable, title: &str) {
    println!("\n{}", format!("📊 {} ", title).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if table.is_empty() {
        println!("{}", "No stats rows match the given filters".yellow());
        return;
    }

    println!("{}", render_table(table));
    println!("{} {}\n", "Rows:".bold(), table.len());
}

fn pretty_json(value: &Value) -> String {
    format!("{:#}", value)
}

pub fn display_json(value: &Value) {
    println!("{}", pretty_json(value));
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
