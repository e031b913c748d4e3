//! Terminal output for the tool-util binary.
//!
//! Results go to stdout one item per line so they can be piped. Diagnostics go
//! to stderr and are colored when stderr is a terminal.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().for_stderr(), message);
}

/// Format and print a warning message in yellow.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("WARNING:").yellow().for_stderr(), message);
}

/// Print each item on its own line.
pub fn display_items(items: &[String]) {
    for item in items {
        println!("{}", item);
    }
}

/// Print a single result value.
pub fn display_value(value: &str) {
    println!("{}", value);
}

/// Build the warning shown for versions that could not be parsed.
pub fn format_malformed_warning(malformed: &[String]) -> Option<String> {
    match malformed.len() {
        0 => None,
        1 => Some(format!("Skipped malformed version: {}", malformed[0])),
        n => Some(format!(
            "Skipped {} malformed versions: {}",
            n,
            malformed.join(", ")
        )),
    }
}

/// Print the outcome of a version sort: sorted versions on stdout, a warning
/// for malformed ones on stderr.
pub fn display_version_report(malformed: &[String], sorted: &[String]) {
    display_items(sorted);
    if let Some(warning) = format_malformed_warning(malformed) {
        display_warning(&warning);
    }
}

/// Format a split module spec as two `key: value` lines.
pub fn format_module_split(path: &str, version: &str) -> String {
    format!("path: {}\nversion: {}", path, version)
}
