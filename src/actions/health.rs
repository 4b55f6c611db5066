use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::Session;
use crate::console::Color;
use crate::report::{head_lines, ReportWriter};
use crate::runner::{run_lossy, Invocation};

const PREVIEW_LINES: usize = 10;

// Report sections in the order they are written
const SECTIONS: [(&str, &str, &[&str]); 3] = [
    ("DISK USAGE", "df", &["-h"]),
    ("CPU INFORMATION", "lscpu", &[]),
    ("MEMORY USAGE", "free", &["-h"]),
];

/// Write the system health report and preview its first lines.
///
/// # Errors
///
/// Returns an error only if the report file itself cannot be written or read
/// back; collaborator failures end up inside the report.
pub fn run<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<PathBuf> {
    session
        .console
        .say(Color::Blue, "Running System Health Check...")?;

    let path = session.config.system_report_path();
    let mut report = ReportWriter::create(&path, "SYSTEM HEALTH REPORT")?;

    for (heading, program, args) in SECTIONS {
        let output = run_lossy(session.runner, &Invocation::new(program, args.iter().copied()));
        report.section(heading, &output.combined())?;
    }
    let path = report.finish()?;

    let console = &mut session.console;
    console.say(
        Color::Green,
        &format!("System health report saved to {}", path.display()),
    )?;
    console.say(Color::Magenta, "First 10 lines of the report:")?;
    console.framed(&head_lines(&path, PREVIEW_LINES)?)?;

    Ok(path)
}
