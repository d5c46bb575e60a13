//! Pure formatting functions for UI output.
//!
//! This module contains all display logic separated from user interaction.

use console::style;

use crate::version::Version;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print the usage screen, with the current version when it is known.
pub fn display_usage(current: Option<&Version>) {
    eprintln!("Usage: git-release --part {{major|minor|patch}}");
    eprintln!();
    eprintln!("Bumps the project version, rewrites it into the metadata file");
    eprintln!("and the package manifest, commits both and tags the commit.");
    if let Some(version) = current {
        eprintln!();
        eprintln!("Current version: {}", style(version).bold());
    }
}

/// Display the proposed version change.
pub fn display_release_plan(current: &Version, next: &Version) {
    println!("\n{}", style("Proposed release:").bold());
    println!("  From: {}", style(current).red());
    println!("  To:   {}", style(next).green());
}

/// Remind the operator that publishing is a separate, manual step.
pub fn display_push_reminder(remote: &str) {
    display_status(&format!(
        "Nothing was pushed. Publish with: git push {} && git push {} --tags",
        remote, remote
    ));
}
