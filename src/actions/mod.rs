//! Handlers for the seven menu actions.
//!
//! Each handler reads its own input through the session console, talks to
//! the OS only through the session's `CommandRunner`, and returns once every
//! file it touched is closed.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::console::Console;
use crate::runner::CommandRunner;

pub mod health;
pub mod network;
pub mod organizer;
pub mod processes;
pub mod schedule;
pub mod ssh;
pub mod users;

// Everything a handler may touch during one invocation
pub struct Session<'a, R, W> {
    pub config: &'a Config,
    pub runner: &'a dyn CommandRunner,
    pub console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(config: &'a Config, runner: &'a dyn CommandRunner, console: Console<R, W>) -> Self {
        Self {
            config,
            runner,
            console,
        }
    }
}
