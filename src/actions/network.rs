use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::Session;
use crate::console::Color;
use crate::report::{tail_lines, ReportWriter};
use crate::runner::{run_lossy, Invocation};

const SUMMARY_LINES: usize = 15;

/// Probe reachability, DNS and HTTP, write the network report and show its
/// tail.
///
/// # Errors
///
/// Returns an error only if the report file cannot be written or read back.
pub fn run<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<PathBuf> {
    let config = session.config;
    let runner = session.runner;
    let console = &mut session.console;

    console.say(Color::Blue, "Running Network Diagnostics...")?;

    let host = config.probe_host.as_str();
    let probes = [
        (
            format!("Pinging {host}..."),
            "PING TEST",
            Invocation::new(
                "ping",
                ["-c".to_string(), config.ping_count.to_string(), host.to_string()],
            ),
        ),
        (
            format!("Resolving DNS for {host}..."),
            "DNS RESOLUTION",
            Invocation::new("dig", [host]),
        ),
        (
            "Fetching HTTP headers...".to_string(),
            "HTTP HEADERS",
            Invocation::new("curl", ["-I", config.http_url.as_str()]),
        ),
    ];

    let path = config.network_report_path();
    let mut report = ReportWriter::create(&path, "NETWORK DIAGNOSTICS REPORT")?;
    for (progress, heading, invocation) in &probes {
        console.say(Color::Magenta, progress)?;
        report.section(heading, &run_lossy(runner, invocation).combined())?;
    }
    let path = report.finish()?;

    console.say(Color::Green, "Network diagnostics completed.")?;
    console.blank()?;
    console.say(Color::Cyan, "Network Diagnostics Summary:")?;
    console.framed(&tail_lines(&path, SUMMARY_LINES)?)?;

    Ok(path)
}
