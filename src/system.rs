use anyhow::{Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

use crate::runner::{CommandOutput, CommandRunner, Invocation};

// Runs collaborators as real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    // Hand the terminal to the child; only the exit status comes back
    fn run_interactive(command: &mut Command, invocation: &Invocation) -> Result<CommandOutput> {
        let status = command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("failed to execute {}", invocation.program))?;

        Ok(CommandOutput {
            status: status.code(),
            ..CommandOutput::default()
        })
    }

    fn run_captured(command: &mut Command, invocation: &Invocation) -> Result<CommandOutput> {
        command.stdout(Stdio::piped()).stderr(Stdio::piped());

        // Never let a captured collaborator steal the menu's terminal input
        if invocation.stdin.is_some() {
            command.stdin(Stdio::piped());
        } else {
            command.stdin(Stdio::null());
        }

        let mut child = command
            .spawn()
            .with_context(|| format!("failed to execute {}", invocation.program))?;

        if let Some(input) = &invocation.stdin {
            // Dropping the handle closes the pipe so the child sees EOF
            if let Some(mut pipe) = child.stdin.take() {
                pipe.write_all(input.as_bytes()).with_context(|| {
                    format!("failed to write stdin of {}", invocation.program)
                })?;
            }
        }

        let output = child
            .wait_with_output()
            .with_context(|| format!("failed to wait for {}", invocation.program))?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        debug!(command = %invocation, interactive = invocation.interactive, "running collaborator");

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);

        let output = if invocation.interactive {
            Self::run_interactive(&mut command, invocation)?
        } else {
            Self::run_captured(&mut command, invocation)?
        };

        debug!(command = %invocation, status = ?output.status, "collaborator finished");
        Ok(output)
    }

    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn effective_uid(&self) -> u32 {
        unsafe { libc::geteuid() }
    }
}
