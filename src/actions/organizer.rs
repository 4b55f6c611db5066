use anyhow::{Context, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use super::Session;
use crate::console::Color;
use crate::runner::{run_lossy, Invocation};
use crate::validate::existing_dir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Images,
    Docs,
    Scripts,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Images, Category::Docs, Category::Scripts];

    // Case-sensitive, the same way a shell glob matches
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "jpg" | "jpeg" | "png" => Some(Self::Images),
            "txt" | "md" => Some(Self::Docs),
            "sh" => Some(Self::Scripts),
            _ => None,
        }
    }

    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Docs => "docs",
            Self::Scripts => "scripts",
        }
    }
}

// Category for a top-level entry name; hidden files never match
#[must_use]
pub fn classify(file_name: &str) -> Option<Category> {
    if file_name.starts_with('.') {
        return None;
    }
    let (_, extension) = file_name.rsplit_once('.')?;
    Category::from_extension(extension)
}

/// Move the flat files of `dir` into their category subdirectories.
///
/// Returns the moved file names with their category, grouped by category
/// and sorted by name within each group.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or a file cannot be
/// moved.
pub fn organize(dir: &Path) -> Result<Vec<(String, Category)>> {
    for category in Category::ALL {
        let sub = dir.join(category.dir_name());
        fs::create_dir_all(&sub)
            .with_context(|| format!("failed to create {}", sub.display()))?;
    }

    let mut entries = Vec::new();
    let listing = fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
    for entry in listing {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        // Follows symlinks, so a link to a file is moved like the file
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(category) = classify(&name) {
            entries.push((name, category));
        }
    }
    // Images first, then docs, then scripts; by name within each
    entries.sort_by(|(a_name, a_cat), (b_name, b_cat)| (a_cat, a_name).cmp(&(b_cat, b_name)));

    for (name, category) in &entries {
        let target = dir.join(category.dir_name()).join(name);
        fs::rename(dir.join(name), &target)
            .with_context(|| format!("failed to move {name} to {}", target.display()))?;
    }

    Ok(entries)
}

/// Prompt for a directory, sort it, and show the resulting tree.
///
/// # Errors
///
/// Returns `ActionError::MissingDirectory` for a path that is not a
/// directory, or an error from moving files.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
) -> Result<Vec<(String, Category)>> {
    let runner = session.runner;
    let console = &mut session.console;

    console.say(Color::Blue, "File Organizer...")?;
    let dir = existing_dir(&console.ask("Enter directory path to organize:")?)?;

    let moved = organize(&dir)?;
    for (name, category) in &moved {
        console.say(
            Color::Green,
            &format!("Moved {name} to {}/", category.dir_name()),
        )?;
    }

    console.say(Color::Magenta, "Directory structure after organization:")?;
    let target = dir.display().to_string();
    let listing = if runner.is_available("tree") {
        Invocation::new("tree", [target])
    } else {
        Invocation::new("ls", ["-la".to_string(), target])
    };
    console.raw(&run_lossy(runner, &listing).combined())?;

    Ok(moved)
}
