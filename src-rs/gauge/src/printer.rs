use std::io::{Error as IoError, Write};

use owo_colors::OwoColorize;

/// Whether styled output is enabled.
pub enum ColorChoice {
    EnableColors,
    DisableColors,
}

impl ColorChoice {
    pub fn green(&self, text: &str) -> String {
        match self {
            Self::EnableColors => text.green().to_string(),
            Self::DisableColors => text.to_string(),
        }
    }

    pub fn red(&self, text: &str) -> String {
        match self {
            Self::EnableColors => text.red().to_string(),
            Self::DisableColors => text.to_string(),
        }
    }

    pub fn bold(&self, text: &str) -> String {
        match self {
            Self::EnableColors => text.bold().to_string(),
            Self::DisableColors => text.to_string(),
        }
    }
}

/// Renders command output to the given writer.
pub struct Printer<'a, W>
where
    W: Write,
{
    color_choice: ColorChoice,
    writer: &'a mut W,
}

impl<'a, W> Printer<'a, W>
where
    W: Write,
{
    pub fn new(use_colors: bool, writer: &'a mut W) -> Self {
        let color_choice = if use_colors {
            ColorChoice::EnableColors
        } else {
            ColorChoice::DisableColors
        };

        Self {
            color_choice,
            writer,
        }
    }

    /// Prints a labeled true/false verdict.
    pub fn print_check(&mut self, label: &str, holds: bool) -> Result<(), IoError> {
        let verdict = if holds {
            self.color_choice.green("true")
        } else {
            self.color_choice.red("false")
        };

        writeln!(self.writer, "{label}: {verdict}")
    }

    /// Prints a plain line.
    pub fn print_line(&mut self, text: &str) -> Result<(), IoError> {
        writeln!(self.writer, "{text}")
    }

    /// Prints an emphasized result line.
    pub fn print_result(&mut self, text: &str) -> Result<(), IoError> {
        writeln!(self.writer, "{}", self.color_choice.bold(text))
    }

    /// Prints a section header.
    pub fn print_section(&mut self, title: &str) -> Result<(), IoError> {
        writeln!(self.writer, "{}", self.color_choice.bold(title))
    }

    /// Prints an error message.
    pub fn print_error(&mut self, message: &str) -> Result<(), IoError> {
        writeln!(
            self.writer,
            "{} {message}",
            self.color_choice.red("error:")
        )
    }
}
