use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ActionError;

const MAX_USERNAME_LEN: usize = 32;
pub const DEFAULT_KEY_ALGORITHM: &str = "rsa";

/// An account name accepted by `useradd`'s default naming rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// # Errors
    ///
    /// Returns `ActionError::InvalidUsername` when the name is empty, too
    /// long or contains characters outside `[a-z0-9_-]`.
    pub fn parse(input: &str) -> Result<Self, ActionError> {
        let invalid = || ActionError::InvalidUsername(input.to_string());

        if input.is_empty() || input.len() > MAX_USERNAME_LEN {
            return Err(invalid());
        }

        // A trailing '$' is allowed for machine accounts
        let body = input.strip_suffix('$').unwrap_or(input);
        let mut chars = body.chars();
        match chars.next() {
            Some(c) if c.is_ascii_lowercase() || c == '_' => {}
            _ => return Err(invalid()),
        }
        if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-') {
            return Err(invalid());
        }

        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A crontab minute or hour field: one or more digits or `*`.
///
/// Only the character set is checked, so `99` is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleField(String);

impl ScheduleField {
    /// # Errors
    ///
    /// Returns `ActionError::InvalidTimeFormat` for empty input or any
    /// character other than an ASCII digit or `*`.
    pub fn parse(input: &str) -> Result<Self, ActionError> {
        if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit() || c == '*') {
            return Err(ActionError::InvalidTimeFormat);
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScheduleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key type handed to `ssh-keygen -t`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAlgorithm(String);

impl KeyAlgorithm {
    /// Blank input selects `rsa`.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidKeyType` when the name contains
    /// characters that no `ssh-keygen` key type uses.
    pub fn parse(input: &str) -> Result<Self, ActionError> {
        if input.is_empty() {
            return Ok(Self(DEFAULT_KEY_ALGORITHM.to_string()));
        }
        let valid = input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'));
        if !valid {
            return Err(ActionError::InvalidKeyType(input.to_string()));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// # Errors
///
/// Returns `ActionError::MissingDirectory` unless `input` names an existing
/// directory.
pub fn existing_dir(input: &str) -> Result<PathBuf, ActionError> {
    let path = PathBuf::from(input);
    if input.is_empty() || !path.is_dir() {
        return Err(ActionError::MissingDirectory(path));
    }
    Ok(path)
}

/// # Errors
///
/// Returns `ActionError::MissingScript` unless `input` names an existing
/// regular file.
pub fn existing_file(input: &str) -> Result<PathBuf, ActionError> {
    let path = PathBuf::from(input);
    if input.is_empty() || !path.is_file() {
        return Err(ActionError::MissingScript(path));
    }
    Ok(path)
}

// Expand a leading "~/" against the given home directory
#[must_use]
pub fn expand_home(input: &str, home: Option<&Path>) -> PathBuf {
    match (input.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if input == "~" => home.map_or_else(|| PathBuf::from(input), Path::to_path_buf),
        _ => PathBuf::from(input),
    }
}
