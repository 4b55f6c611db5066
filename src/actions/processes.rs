use anyhow::Result;
use std::io::{BufRead, Write};

use super::Session;
use crate::console::Color;
use crate::runner::{run_lossy, Invocation};

// Lines of `listing` containing `keyword`
#[must_use]
pub fn filter_listing<'a>(listing: &'a str, keyword: &str) -> Vec<&'a str> {
    listing
        .lines()
        .filter(|line| line.contains(keyword))
        .collect()
}

/// Show the process table and optionally filter it by keyword.
///
/// Returns the number of matching lines, or `None` when no keyword was given.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn run<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<Option<usize>> {
    let console = &mut session.console;
    console.say(Color::Blue, "Listing Active Processes...")?;

    // One snapshot serves both the full listing and the filter
    let listing = run_lossy(session.runner, &Invocation::new("ps", ["aux"])).combined();

    console.say(Color::Magenta, "All active processes:")?;
    console.raw(&listing)?;
    console.blank()?;

    let keyword = console.ask("Enter a keyword to filter processes:")?;
    if keyword.is_empty() {
        console.say(Color::Yellow, "No keyword provided.")?;
        return Ok(None);
    }

    let matches = filter_listing(&listing, &keyword);
    console.say(
        Color::Magenta,
        &format!("Processes matching '{keyword}':"),
    )?;
    for line in &matches {
        console.plain(line)?;
    }
    console.say(
        Color::Green,
        &format!(
            "Number of processes matching '{keyword}': {}",
            matches.len()
        ),
    )?;

    Ok(Some(matches.len()))
}
