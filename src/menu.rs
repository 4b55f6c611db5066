use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::warn;

use crate::actions::{self, Session};
use crate::console::{Color, BANNER_RULE};
use crate::error::ActionError;

// Menu entries in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    HealthCheck,
    Processes,
    Users,
    Organize,
    Network,
    Schedule,
    SshKeys,
    Exit,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::HealthCheck,
        Action::Processes,
        Action::Users,
        Action::Organize,
        Action::Network,
        Action::Schedule,
        Action::SshKeys,
        Action::Exit,
    ];

    // Exact match on "1".."8"
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.number().to_string() == choice)
    }

    #[must_use]
    pub fn number(self) -> usize {
        self as usize + 1
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::HealthCheck => "System Health Check",
            Self::Processes => "Active Processes",
            Self::Users => "User & Group Management",
            Self::Organize => "File Organizer",
            Self::Network => "Network Diagnostics",
            Self::Schedule => "Scheduled Task Setup",
            Self::SshKeys => "SSH Key Setup",
            Self::Exit => "Exit",
        }
    }
}

fn render_menu<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    let console = &mut session.console;
    console.clear()?;
    console.say(Color::Cyan, BANNER_RULE)?;
    console.say(Color::Cyan, "    SYSTEM HEALTH MONITORING TOOL")?;
    console.say(Color::Cyan, BANNER_RULE)?;
    for action in Action::ALL {
        console.say(
            Color::Yellow,
            &format!("{}. {}", action.number(), action.label()),
        )?;
    }
    console.say(Color::Cyan, BANNER_RULE)?;
    Ok(())
}

fn farewell<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    session
        .console
        .say(Color::Green, "Thank you for using System Health Tool!")?;
    session.console.say(Color::Green, "Goodbye!")?;
    Ok(())
}

/// Run one action to completion.
///
/// # Errors
///
/// Propagates the handler's error; the caller decides how to report it.
pub fn dispatch<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
    action: Action,
) -> Result<()> {
    match action {
        Action::HealthCheck => actions::health::run(session).map(drop),
        Action::Processes => actions::processes::run(session).map(drop),
        Action::Users => actions::users::run(session).map(drop),
        Action::Organize => actions::organizer::run(session).map(drop),
        Action::Network => actions::network::run(session).map(drop),
        Action::Schedule => actions::schedule::run(session).map(drop),
        Action::SshKeys => actions::ssh::run(session).map(drop),
        Action::Exit => farewell(session),
    }
}

// Action failures end the action, never the loop
fn report_failure<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
    action: Action,
    err: &anyhow::Error,
) -> Result<()> {
    let message = match err.downcast_ref::<ActionError>() {
        Some(precondition) => precondition.to_string(),
        None => format!("{err:#}"),
    };
    warn!(action = action.label(), "action aborted: {message}");
    session.console.say(Color::Red, &message)?;
    Ok(())
}

/// Show the menu until the user picks Exit or input ends.
///
/// # Errors
///
/// Returns an error only when the terminal itself cannot be read or
/// written.
pub fn run_menu<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    loop {
        render_menu(session)?;
        session.console.say(Color::Cyan, "Select option (1-8):")?;

        let Some(choice) = session.console.read_line()? else {
            return farewell(session);
        };

        match Action::from_choice(&choice) {
            Some(Action::Exit) => return farewell(session),
            Some(action) => {
                if let Err(err) = dispatch(session, action) {
                    report_failure(session, action, &err)?;
                }
            }
            None => session.console.say(Color::Red, "Invalid option!")?,
        }

        session.console.blank()?;
        session
            .console
            .say(Color::Yellow, "Press Enter to continue...")?;
        if session.console.read_line()?.is_none() {
            return farewell(session);
        }
    }
}
