use colored::Colorize;
use std::io::{self, BufRead, Write};

pub const SEPARATOR: &str = "----------------------------------------";
pub const BANNER_RULE: &str = "==========================================";

// Fixed palette used for every status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn paint(&self, color: Color, message: &str) -> String {
        if !self.enabled {
            return message.to_string();
        }
        match color {
            Color::Red => message.red().to_string(),
            Color::Green => message.green().to_string(),
            Color::Yellow => message.yellow().bold().to_string(),
            Color::Blue => message.blue().to_string(),
            Color::Magenta => message.magenta().to_string(),
            Color::Cyan => message.cyan().to_string(),
        }
    }
}

/// Line-oriented terminal: reads answers from `input` and writes everything
/// the user sees to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Push pending output to the terminal before a child process takes it over
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be flushed.
    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    /// Print a message in one palette color
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, color: Color, message: &str) -> io::Result<()> {
        let line = self.palette.paint(color, message);
        writeln!(self.output, "{line}")
    }

    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn plain(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Write collaborator output verbatim, adding a final newline if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn raw(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        if !text.is_empty() && !text.ends_with('\n') {
            writeln!(self.output)?;
        }
        self.output.flush()
    }

    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn separator(&mut self) -> io::Result<()> {
        writeln!(self.output, "{SEPARATOR}")
    }

    /// Print `lines` between two separator lines
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn framed<S: AsRef<str>>(&mut self, lines: &[S]) -> io::Result<()> {
        self.separator()?;
        for line in lines {
            writeln!(self.output, "{}", line.as_ref())?;
        }
        self.separator()
    }

    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn clear(&mut self) -> io::Result<()> {
        if self.palette.is_enabled() {
            write!(self.output, "\x1b[2J\x1b[H")?;
        }
        Ok(())
    }

    /// Read one line, trimmed like a shell `read`. `None` means end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Show a prompt and read the answer; end of input reads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        self.say(Color::Yellow, question)?;
        Ok(self.read_line()?.unwrap_or_default())
    }
}
