use anyhow::Result;
use std::fmt;
use tracing::warn;

/// A single external program call: program name, argument list and optional
/// data fed to its stdin.
///
/// An interactive invocation shares the terminal with the user instead of
/// having its output captured, so the program can ask its own questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub stdin: Option<String>,
    pub interactive: bool,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            stdin: None,
            interactive: false,
        }
    }

    #[must_use]
    pub fn with_stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    #[must_use]
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    // None when the process was killed by a signal or never started
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    // stdout followed by stderr, the way `cmd >> file 2>&1` would record it
    #[must_use]
    pub fn combined(&self) -> String {
        let mut text = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&self.stderr);
        }
        text
    }
}

/// The boundary between the menu and the operating system.
///
/// Every external tool goes through `run`, so handlers never spawn
/// processes directly and tests can swap in a fake.
pub trait CommandRunner {
    /// Run a program to completion and capture its output. Interactive
    /// invocations inherit the terminal and only report their exit status.
    ///
    /// # Errors
    ///
    /// Returns an error only when the program could not be started at all.
    /// A non-zero exit status is reported through `CommandOutput::status`.
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput>;

    /// Whether `program` can be found on the search path.
    fn is_available(&self, program: &str) -> bool;

    /// Effective user id of the running process.
    fn effective_uid(&self) -> u32;
}

// Run a collaborator whose failure must not stop the action: a spawn error
// becomes stderr text so it still ends up in the report or on screen.
pub fn run_lossy(runner: &dyn CommandRunner, invocation: &Invocation) -> CommandOutput {
    match runner.run(invocation) {
        Ok(output) => {
            if !output.success() {
                warn!(
                    command = %invocation,
                    status = ?output.status,
                    "collaborator exited unsuccessfully"
                );
            }
            output
        }
        Err(e) => {
            warn!(command = %invocation, "failed to start collaborator: {e:#}");
            CommandOutput {
                status: None,
                stdout: String::new(),
                stderr: format!("{}: {e:#}\n", invocation.program),
            }
        }
    }
}
