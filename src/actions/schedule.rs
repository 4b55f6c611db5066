use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{self, Path};
use tracing::info;

use super::Session;
use crate::console::Color;
use crate::runner::{run_lossy, CommandRunner, Invocation};
use crate::validate::{existing_file, ScheduleField};

// Daily crontab line for the given time fields
#[must_use]
pub fn cron_entry(minute: &ScheduleField, hour: &ScheduleField, script: &Path) -> String {
    format!("{minute} {hour} * * * {}", script.display())
}

// Append `entry` after every existing line of `table`
#[must_use]
pub fn append_entry(table: &str, entry: &str) -> String {
    let mut updated = table.to_string();
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(entry);
    updated.push('\n');
    updated
}

// Current crontab; only "no crontab for <user>" reads as an empty table
fn current_table(runner: &dyn CommandRunner) -> Result<String> {
    let output = runner
        .run(&Invocation::new("crontab", ["-l"]))
        .context("failed to read the current crontab")?;
    if output.success() {
        return Ok(output.stdout);
    }
    if output.stderr.contains("no crontab for") {
        return Ok(String::new());
    }
    bail!(
        "failed to read the current crontab: {}",
        output.combined().trim()
    );
}

fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)
            .with_context(|| format!("failed to get metadata for {}", path.display()))?
            .permissions();
        perms.set_mode(perms.mode() | 0o111);
        fs::set_permissions(path, perms)
            .with_context(|| format!("failed to set permissions for {}", path.display()))?;
    }
    Ok(())
}

/// Register a script to run daily at the given minute and hour.
///
/// Returns the crontab line that was added.
///
/// # Errors
///
/// Returns `ActionError` for a missing script or a malformed time field,
/// in which case nothing has been changed. Also fails without changes when
/// the current table cannot be read, and when the scheduler rejects the
/// updated table.
pub fn run<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<String> {
    let runner = session.runner;
    let console = &mut session.console;

    console.say(Color::Blue, "Scheduled Task Setup...")?;
    let script = existing_file(&console.ask("Enter script path:")?)?;

    console.blank()?;
    let minute = console.ask("Enter minute (0-59):")?;
    let hour = console.ask("Enter hour (0-23):")?;
    let minute = ScheduleField::parse(&minute)?;
    let hour = ScheduleField::parse(&hour)?;

    let script = path::absolute(&script)
        .with_context(|| format!("failed to resolve {}", script.display()))?;
    let existing = current_table(runner)?;
    make_executable(&script)?;

    let entry = cron_entry(&minute, &hour, &script);
    let table = append_entry(&existing, &entry);
    let installed = run_lossy(runner, &Invocation::new("crontab", ["-"]).with_stdin(table));
    if !installed.success() {
        bail!("crontab rejected the new table: {}", installed.stderr.trim());
    }
    info!(%entry, "cron job added");

    console.say(Color::Green, "Cron job added!")?;
    console.say(Color::Green, &format!("Schedule: {entry}"))?;
    console.raw(&run_lossy(runner, &Invocation::new("crontab", ["-l"])).combined())?;

    Ok(entry)
}
