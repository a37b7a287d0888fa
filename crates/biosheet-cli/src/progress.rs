//! Progress indicators for long-running commands

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for a blocking fetch
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Format a share of `total` as a percentage with one decimal
pub fn format_percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 / total as f64 * 100.0)
}
