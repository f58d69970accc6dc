use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::Path;
use std::time::Duration;

use crate::error::{AssetError, Result};

/// Create a styled progress bar for the generation stages
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(progress_style) = ProgressStyle::with_template(
        "{spinner:.blue} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
    ) {
        pb.set_style(progress_style.progress_chars("#>-"));
    }
    pb
}

/// Format duration in a human-readable way
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_secs >= 60 {
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        format!("{}m {}s", mins, secs)
    } else if total_secs > 0 {
        format!("{}.{:03}s", total_secs, millis)
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// Format a byte count with a binary unit suffix
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Check the source path before any work is done
///
/// The output directory is not checked here: it only matters once the
/// source has decoded, and the first PNG write reports it.
pub fn validate_inputs(source_path: &Path) -> Result<()> {
    if !source_path.exists() {
        return Err(AssetError::decode(
            source_path,
            io::Error::new(io::ErrorKind::NotFound, "source image does not exist"),
        ));
    }
    if !source_path.is_file() {
        return Err(AssetError::decode(
            source_path,
            io::Error::new(io::ErrorKind::InvalidInput, "source path is not a file"),
        ));
    }

    Ok(())
}

/// Render an error and its causes on a single line
///
/// Decoder errors from `image` repeat their underlying cause in their own
/// message, so a cause already contained in the previous level is skipped.
pub fn format_error_chain(err: &anyhow::Error) -> String {
    let mut parts: Vec<String> = Vec::new();

    for cause in err.chain() {
        let text = cause.to_string().split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() || parts.last().is_some_and(|prev| prev.contains(&text)) {
            continue;
        }
        parts.push(text);
    }

    parts.join(": ")
}

/// Print verbose message if verbose mode is enabled
pub fn verbose_println(verbose: bool, message: &str) {
    if verbose {
        println!("{} {}", style("[VERBOSE]").dim(), message);
    }
}

/// Print warning message
pub fn warn_println(message: &str) {
    println!("{} {}", style("[WARNING]").yellow().bold(), message);
}

/// Print error message
pub fn error_println(message: &str) {
    eprintln!("{} {}", style("[ERROR]").red().bold(), message);
}
