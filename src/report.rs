use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sequential writer for a sectioned text report.
///
/// The file is truncated on creation and sections are appended in the order
/// they are written, each followed by a blank line.
pub struct ReportWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl ReportWriter {
    /// Create the report with its title header and generation timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the report file cannot be created or written.
    pub fn create<P: AsRef<Path>>(path: P, title: &str) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .with_context(|| format!("failed to create report {}", path.display()))?;

        let mut report = Self {
            path,
            out: BufWriter::new(file),
        };
        let stamp = Local::now().format("%a %b %e %H:%M:%S %Z %Y");
        report.write_block(&format!("=== {title} ===\nGenerated on: {stamp}\n"))?;
        Ok(report)
    }

    /// Append one `=== HEADING ===` section with its body verbatim
    ///
    /// # Errors
    ///
    /// Returns an error if the report file cannot be written.
    pub fn section(&mut self, heading: &str, body: &str) -> Result<()> {
        let mut block = format!("=== {heading} ===\n{body}");
        if !body.is_empty() && !body.ends_with('\n') {
            block.push('\n');
        }
        self.write_block(&block)
    }

    fn write_block(&mut self, block: &str) -> Result<()> {
        writeln!(self.out, "{block}")
            .with_context(|| format!("failed to write report {}", self.path.display()))
    }

    /// Flush and close the report, returning its path
    ///
    /// # Errors
    ///
    /// Returns an error if buffered data cannot be flushed to disk.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.out
            .flush()
            .with_context(|| format!("failed to flush report {}", self.path.display()))?;
        Ok(self.path)
    }
}

/// First `count` lines of a text file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn head_lines<P: AsRef<Path>>(path: P, count: usize) -> Result<Vec<String>> {
    let content = read_report(path.as_ref())?;
    Ok(content.lines().take(count).map(str::to_string).collect())
}

/// Last `count` lines of a text file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn tail_lines<P: AsRef<Path>>(path: P, count: usize) -> Result<Vec<String>> {
    let content = read_report(path.as_ref())?;
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(count);
    Ok(lines[start..].iter().map(|line| (*line).to_string()).collect())
}

fn read_report(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read report {}", path.display()))
}
