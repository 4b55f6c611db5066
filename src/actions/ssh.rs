use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::Session;
use crate::console::Color;
use crate::runner::{run_lossy, Invocation};
use crate::validate::{expand_home, KeyAlgorithm};

pub const DEFAULT_KEY_PATH: &str = "~/.ssh/id_rsa";

// Key file location; blank input picks the default under the user's home
#[must_use]
pub fn resolve_key_path(input: &str, home: Option<&Path>) -> PathBuf {
    let raw = if input.is_empty() { DEFAULT_KEY_PATH } else { input };
    expand_home(raw, home)
}

#[must_use]
pub fn public_key_path(key: &Path) -> PathBuf {
    let mut name = key.as_os_str().to_owned();
    name.push(".pub");
    PathBuf::from(name)
}

fn ensure_key_dir(key: &Path) -> Result<()> {
    let Some(parent) = key.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(parent, fs::Permissions::from_mode(0o700))
            .with_context(|| format!("failed to set permissions for {}", parent.display()))?;
    }
    Ok(())
}

/// Generate a passphrase-less key pair and print the public half.
///
/// `ssh-keygen` runs on the user's terminal so it can ask before replacing
/// an existing key.
///
/// Returns the algorithm and private key path that were used.
///
/// # Errors
///
/// Returns `ActionError::InvalidKeyType` for a malformed key type, or an
/// error if the key directory cannot be created or no key was generated.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
) -> Result<(KeyAlgorithm, PathBuf)> {
    let runner = session.runner;
    let home = session.config.home_dir();
    let console = &mut session.console;

    console.say(Color::Blue, "SSH Key Setup...")?;
    let algorithm = KeyAlgorithm::parse(&console.ask("Enter key type (default: rsa):")?)?;
    let location = console.ask(&format!(
        "Enter key file location (default: {DEFAULT_KEY_PATH}):"
    ))?;
    let key_path = resolve_key_path(&location, home.as_deref());

    console.say(Color::Magenta, "Generating SSH key...")?;
    ensure_key_dir(&key_path)?;
    console.flush()?;

    let key_arg = key_path.display().to_string();
    let keygen = Invocation::new(
        "ssh-keygen",
        ["-t", algorithm.as_str(), "-f", key_arg.as_str(), "-N", "", "-q"],
    )
    .interactive();
    let generated = run_lossy(runner, &keygen);
    if !generated.success() {
        // Interactive runs already showed their errors on the terminal
        let detail = generated.combined();
        let detail = detail.trim();
        if detail.is_empty() {
            bail!("ssh-keygen did not generate a key at {key_arg}");
        }
        bail!("ssh-keygen did not generate a key at {key_arg}: {detail}");
    }
    console.say(Color::Green, "SSH key generated!")?;

    console.say(Color::Cyan, "Your public key:")?;
    let public = public_key_path(&key_path);
    let content = fs::read_to_string(&public)
        .with_context(|| format!("failed to read {}", public.display()))?;
    console.separator()?;
    console.raw(&content)?;
    console.separator()?;

    console.blank()?;
    console.say(Color::Yellow, "To copy key to remote server:")?;
    console.say(
        Color::Cyan,
        &format!("ssh-copy-id -i {key_arg} user@remote-server"),
    )?;

    Ok((algorithm, key_path))
}
