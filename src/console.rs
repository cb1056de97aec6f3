//! Terminal prompt and narration primitives.
//!
//! The console owns no streams: it borrows a [`BufRead`] and a [`Write`]
//! so that the binary can hand it locked stdio while tests drive it with
//! byte buffers. Every operation is blocking; the operator paces the run.

use crate::error::{InstallerError, Result};
use std::io::{BufRead, Write};

/// Interactive terminal over injected input and output handles.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    /// Create a console over the given streams.
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Ask a free-text question, optionally offering a default.
    ///
    /// Empty input takes the default when one is offered; with no default
    /// it yields the empty string. Input is trimmed of surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::InputClosed`] if the input stream ends
    /// before an answer is read.
    pub fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(value) => write!(self.output, "{question} [{value}]: ")?,
            None => write!(self.output, "{question}: ")?,
        }
        self.output.flush()?;

        let answer = self.read_answer()?;
        match default {
            Some(value) if answer.is_empty() => Ok(value.to_owned()),
            _ => Ok(answer),
        }
    }

    /// Ask a question and re-ask until the predicate accepts the answer.
    ///
    /// The retry prompt offers no default, matching the original
    /// questionnaire's behaviour for the email field.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::InputClosed`] if the input stream ends
    /// before a valid answer is read.
    pub fn ask_until(
        &mut self,
        question: &str,
        retry_question: &str,
        accept: impl Fn(&str) -> bool,
    ) -> Result<String> {
        let mut answer = self.ask(question, None)?;
        while !accept(&answer) {
            answer = self.ask(retry_question, None)?;
        }
        Ok(answer)
    }

    /// Present a numbered single-choice prompt and return the selected index.
    ///
    /// Empty input selects the default; out-of-range or non-numeric input
    /// re-prompts.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::InputClosed`] if the input stream ends
    /// before a selection is read.
    pub fn choice(
        &mut self,
        question: &str,
        options: &[&str],
        default_index: usize,
    ) -> Result<usize> {
        loop {
            writeln!(self.output, "{question}")?;
            for (index, option) in options.iter().enumerate() {
                let marker = if index == default_index { "*" } else { " " };
                writeln!(self.output, "  {marker}[{}] {option}", index + 1)?;
            }
            write!(
                self.output,
                "Select (1-{}) [{}]: ",
                options.len(),
                default_index + 1
            )?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            if answer.is_empty() {
                return Ok(default_index);
            }
            match answer.parse::<usize>() {
                Ok(number) if (1..=options.len()).contains(&number) => return Ok(number - 1),
                _ => self.text("Please choose one of the listed options.")?,
            }
        }
    }

    /// Print a title line with an underline.
    pub fn title(&mut self, text: &str) -> Result<()> {
        self.underlined(text, '=')
    }

    /// Print a section heading with an underline.
    pub fn section(&mut self, text: &str) -> Result<()> {
        self.underlined(text, '-')
    }

    /// Print a plain narration line.
    pub fn text(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print a success line.
    pub fn success(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "[OK] {text}")?;
        Ok(())
    }

    /// Print an error line.
    pub fn error(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "[ERROR] {text}")?;
        Ok(())
    }

    /// Render a two-column table with aligned labels.
    pub fn table(&mut self, rows: &[(&str, &str)]) -> Result<()> {
        let width = rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        for (label, value) in rows {
            writeln!(self.output, "  {label:<width$}  {value}")?;
        }
        Ok(())
    }

    fn underlined(&mut self, text: &str, line_char: char) -> Result<()> {
        writeln!(self.output, "{text}")?;
        let underline: String = text.chars().map(|_| line_char).collect();
        writeln!(self.output, "{underline}")?;
        Ok(())
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(InstallerError::InputClosed);
        }
        Ok(line.trim().to_owned())
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
