//! Terminal output for interactive runs
//!
//! A spinner tracks listings and artifacts while the walk runs; a short
//! report is printed before and after. Nothing here is written when
//! `--quiet` is set.

use crate::walker::{WalkProgress, WalkStats};
use console::style;
use humansize::{format_size, BINARY};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner showing live walk counters
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();

        let style = ProgressStyle::with_template("{spinner:.cyan} {elapsed:>4} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message("listing repository root");
        bar.enable_steady_tick(Duration::from_millis(120));

        Self { bar }
    }

    /// Refresh the spinner from a walk snapshot
    pub fn update(&self, progress: &WalkProgress) {
        self.bar.set_message(format!(
            "{} listings, {} artifacts ({}), {:.0} artifacts/s, depth {}",
            group_digits(progress.dirs),
            group_digits(progress.files),
            format_size(progress.bytes, BINARY),
            progress.files_per_second(),
            progress.depth,
        ));
    }

    /// Remove the spinner from the terminal
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// `1234567` -> `1,234,567`
fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Report printed after a successful walk
pub fn print_summary(stats: &WalkStats, output_path: &str) {
    println!();
    println!(
        "{} {} artifacts, {} in {} listings ({:.1}s)",
        style("Inventory:").green().bold(),
        group_digits(stats.files),
        format_size(stats.bytes, BINARY),
        group_digits(stats.dirs),
        stats.duration.as_secs_f64(),
    );
    if stats.duplicates > 0 {
        println!(
            "  {} duplicate directory entries skipped",
            group_digits(stats.duplicates)
        );
    }
    if stats.zero_size > 0 {
        println!(
            "  {} artifacts reported sizeOnDisk == 0",
            style(group_digits(stats.zero_size)).yellow()
        );
    }
    println!("  written to {}", style(output_path).bold());
}

/// Banner printed before the walk starts
pub fn print_header(content_url: &str, prefix: &str, output: &str) {
    println!(
        "{} {}",
        style("nexus-walker").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("  {} {}{}", style("walking").dim(), content_url, prefix);
    println!("  {} {}", style("into").dim(), output);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(123456), "123,456");
        assert_eq!(group_digits(1234567), "1,234,567");
        assert_eq!(group_digits(u64::MAX), "18,446,744,073,709,551,615");
    }
}
