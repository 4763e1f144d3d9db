//! Operator I/O seam.
//!
//! Everything the game prints or reads goes through [`Console`], so the
//! attempt loop and session driver can be exercised in tests with a
//! scripted double instead of a live terminal.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

/// How a line of output should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Banner,
    Success,
    Failure,
    Hint,
}

pub trait Console {
    /// Print `text` followed by a newline.
    fn say(&mut self, tone: Tone, text: &str);

    /// Print `prompt` (no newline) and read one line, trailing newline
    /// stripped. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Clear the screen between levels. Best effort.
    fn clear_screen(&mut self);

    /// Yes/no question: any answer starting with `y`/`Y` is yes, anything
    /// else (empty line and end of input included) is no.
    fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        let answer = self
            .read_line(&format!("{question} (y/n): "))?
            .unwrap_or_default();
        Ok(answer.starts_with('y') || answer.starts_with('Y'))
    }

    /// Multi-line code entry, terminated by a line equal to `DONE` (or end
    /// of input). The sentinel line is not part of the submission.
    fn read_code(&mut self) -> io::Result<String> {
        let mut code = String::new();
        while let Some(line) = self.read_line("")? {
            if line == "DONE" {
                break;
            }
            code.push_str(&line);
            code.push('\n');
        }
        Ok(code)
    }
}

/// Console over stdin/stdout. Styling is applied with crossterm and can be
/// switched off (the `color` config setting).
pub struct StdConsole {
    color: bool,
}

impl StdConsole {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Console for StdConsole {
    fn say(&mut self, tone: Tone, text: &str) {
        if !self.color {
            println!("{text}");
            return;
        }
        match tone {
            Tone::Plain => println!("{text}"),
            Tone::Banner => println!("{}", text.yellow().bold()),
            Tone::Success => println!("{}", text.green().bold()),
            Tone::Failure => println!("{}", text.red()),
            Tone::Hint => println!("{}", text.cyan()),
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !prompt.is_empty() {
            print!("{prompt}");
            io::stdout().flush()?;
        }
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn clear_screen(&mut self) {
        let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }
}

/// Scripted console for tests: pops pre-seeded input lines and records all
/// output.
#[cfg(test)]
pub struct ScriptedConsole {
    input: std::collections::VecDeque<String>,
    pub output: String,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    pub fn saw(&self, needle: &str) -> bool {
        self.output.contains(needle)
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn say(&mut self, _tone: Tone, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push_str(prompt);
        Ok(self.input.pop_front())
    }

    fn clear_screen(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_requires_leading_y() {
        let mut console = ScriptedConsole::new(["yes", "Y", "nope", "", "yellow? no"]);
        assert!(console.ask_yes_no("continue?").unwrap());
        assert!(console.ask_yes_no("continue?").unwrap());
        assert!(!console.ask_yes_no("continue?").unwrap());
        assert!(!console.ask_yes_no("continue?").unwrap());
        assert!(console.ask_yes_no("continue?").unwrap());
    }

    #[test]
    fn end_of_input_reads_as_no() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        assert!(!console.ask_yes_no("continue?").unwrap());
    }

    #[test]
    fn code_entry_stops_at_sentinel() {
        let mut console = ScriptedConsole::new(["auto x = 1;", "return x;", "DONE", "ignored"]);
        let code = console.read_code().unwrap();
        assert_eq!(code, "auto x = 1;\nreturn x;\n");
    }

    #[test]
    fn code_entry_stops_at_end_of_input() {
        let mut console = ScriptedConsole::new(["auto x = 1;"]);
        let code = console.read_code().unwrap();
        assert_eq!(code, "auto x = 1;\n");
    }
}
