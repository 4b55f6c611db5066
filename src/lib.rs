pub mod actions;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod report;
pub mod runner;
pub mod system;
pub mod validate;

pub use actions::Session;
pub use config::Config;
pub use console::{Color, Console, Palette};
pub use error::ActionError;
pub use menu::{run_menu, Action};
pub use runner::{CommandOutput, CommandRunner, Invocation};
pub use system::SystemRunner;
