//! Output formatting for CLI

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::{Deserialize, Serialize};

use testboard_common::RecordView;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Plain text format
    Plain,
}

/// Trait for items that can be displayed in a table
pub trait TableDisplay {
    fn headers() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
}

/// A record as listed, with its position in the full list
#[derive(Debug, Clone, Serialize)]
pub struct RecordRow {
    pub index: usize,
    #[serde(flatten)]
    pub view: RecordView,
}

impl TableDisplay for RecordRow {
    fn headers() -> Vec<&'static str> {
        vec!["#", "Date", "Test", "Browser", "Platform", "Proxy", "Status", "Build"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.index.to_string(),
            self.view.timestamp.clone(),
            self.view.test_name.clone(),
            format!("{} {}", self.view.browser, self.view.browser_version),
            self.view.platform_logo.clone(),
            self.view.proxy_name.clone(),
            colored_status(&self.view.test_status),
            self.view.build.clone(),
        ]
    }
}

fn colored_status(status: &str) -> String {
    match status.to_uppercase().as_str() {
        "SUCCESS" | "PASSED" => status.green().to_string(),
        "FAILED" => status.red().to_string(),
        _ => status.to_string(),
    }
}

/// Print a list of items
pub fn print_list<T: Serialize + TableDisplay>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No tests found.");
                return;
            }

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic);

            table.set_header(T::headers());
            for item in items {
                table.add_row(item.row());
            }

            println!("{table}");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(items).unwrap_or_default());
        }
        OutputFormat::Plain => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    println!("---");
                }
                let row = item.row();
                for (header, value) in T::headers().iter().zip(row.iter()) {
                    println!("{}: {}", header, value);
                }
            }
        }
    }
}

/// Print label/value pairs
pub fn print_pairs(pairs: &[(&str, String)], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic);
            for (label, value) in pairs {
                table.add_row(vec![label.to_string(), value.clone()]);
            }
            println!("{table}");
        }
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.clone())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map).unwrap_or_default());
        }
        OutputFormat::Plain => {
            for (label, value) in pairs {
                println!("{}: {}", label, value);
            }
        }
    }
}

/// Print success message
pub fn print_success(message: &str) {
    println!("✅ {}", message);
}

/// Print error message
pub fn print_error(message: &str) {
    eprintln!("❌ {}", message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    println!("⚠️  {}", message);
}

/// Print info message
pub fn print_info(message: &str) {
    println!("ℹ️  {}", message);
}
