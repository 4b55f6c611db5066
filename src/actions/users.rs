use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::Session;
use crate::console::Color;
use crate::error::ActionError;
use crate::runner::{run_lossy, CommandOutput, Invocation};
use crate::validate::Username;

const MARKER_FILE: &str = "test_file.txt";

/// Create an account with a same-named group, a default password and a
/// marker file in its home directory. Requires root.
///
/// # Errors
///
/// Returns `ActionError` for missing privilege, a bad name or an existing
/// account, and a plain error if `useradd` fails or the marker cannot be
/// written.
pub fn run<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<Username> {
    let runner = session.runner;
    let config = session.config;
    let console = &mut session.console;

    console.say(Color::Blue, "User and Group Management...")?;

    if runner.effective_uid() != 0 {
        return Err(ActionError::NotPrivileged.into());
    }

    console.blank()?;
    let username = Username::parse(&console.ask("Enter new username:")?)?;
    let name = username.as_str();

    if account_exists(runner.run(&Invocation::new("id", [name]))) {
        return Err(ActionError::UserExists(name.to_string()).into());
    }

    let created = run_lossy(
        runner,
        &Invocation::new("useradd", ["-m", "-s", config.default_shell.as_str(), name]),
    );
    if !created.success() {
        bail!("useradd failed for '{name}': {}", created.stderr.trim());
    }

    // Systems with user-private groups already created it alongside the user
    let group_exists = account_exists(runner.run(&Invocation::new("getent", ["group", name])));
    if !group_exists {
        run_lossy(runner, &Invocation::new("groupadd", [name]));
    }
    run_lossy(runner, &Invocation::new("usermod", ["-a", "-G", name, name]));

    let password = format!("{name}:{}\n", config.default_password);
    let chpasswd = run_lossy(
        runner,
        &Invocation::new("chpasswd", Vec::<String>::new()).with_stdin(password),
    );
    if !chpasswd.success() {
        warn!(user = name, "setting the default password failed");
    }

    let marker = write_marker(&config.home_root, name)?;
    run_lossy(
        runner,
        &Invocation::new("chown", [format!("{name}:{name}"), marker.display().to_string()]),
    );
    info!(user = name, "account created");

    console.say(Color::Green, &format!("User '{name}' created successfully!"))?;
    console.say(
        Color::Green,
        &format!("Default password: {}", config.default_password),
    )?;
    console.say(Color::Yellow, "Please change the default password!")?;

    Ok(username)
}

// A lookup that could not even start is treated as "not found"
fn account_exists(lookup: Result<CommandOutput>) -> bool {
    lookup.is_ok_and(|output| output.success())
}

fn write_marker(home_root: &Path, name: &str) -> Result<PathBuf> {
    let path = home_root.join(name).join(MARKER_FILE);
    fs::write(&path, format!("This is a test file for user {name}\n"))
        .with_context(|| format!("failed to write marker file {}", path.display()))?;
    Ok(path)
}
