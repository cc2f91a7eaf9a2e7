use terminal_size::{terminal_size, Width};

use crate::parser::interface::{TwoColumnRenderer, UserInterface};

const MAIN_INDENT: usize = 1;
const PADDING_WIDTH: usize = 3;
// Used when not attached to a terminal.
const DEFAULT_TOTAL_WIDTH: usize = 80;

/// Documentation for one option in the usage message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDoc {
    short: Option<char>,
    name: Option<String>,
    meta: Option<String>,
    help: String,
}

impl OptionDoc {
    /// Document an option by its short and/or long name (both without leading dashes).
    pub fn new(short: Option<char>, name: Option<&str>, help: impl Into<String>) -> Self {
        Self {
            short,
            name: name.map(str::to_string),
            meta: None,
            help: help.into(),
        }
    }

    /// Document the value this option takes (ex: `FILE`).
    pub fn meta(mut self, meta: impl Into<String>) -> Self {
        self.meta.replace(meta.into());
        self
    }

    fn flags(&self) -> String {
        let meta = match &self.meta {
            Some(meta) => format!(" {meta}"),
            None => String::default(),
        };

        match (&self.short, &self.name) {
            (Some(short), Some(name)) => format!("-{short}{meta}, --{name}{meta}"),
            (Some(short), None) => format!("-{short}{meta}"),
            (None, Some(name)) => format!("--{name}{meta}"),
            (None, None) => String::default(),
        }
    }
}

/// Renders the usage message for a program.
///
/// ### Example
/// ```
/// use clarg::{OptionDoc, Printer};
///
/// let printer = Printer::new(
///     "program",
///     vec![OptionDoc::new(Some('v'), Some("verbose"), "Print more.")],
///     Some(80),
/// );
///
/// assert_eq!(
///     printer.render(),
///     vec![
///         "usage: program [OPTIONS]",
///         "options:",
///         " -v, --verbose   Print more.",
///     ]
/// );
/// ```
pub struct Printer {
    program: String,
    options: Vec<OptionDoc>,
    terminal_width: Option<usize>,
}

impl Printer {
    /// A printer sized to the current terminal.
    pub fn terminal(program: impl Into<String>, options: Vec<OptionDoc>) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(program, options, terminal_width)
    }

    /// A printer sized to an explicit total width.
    pub fn new(
        program: impl Into<String>,
        options: Vec<OptionDoc>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            program: program.into(),
            options,
            terminal_width,
        }
    }

    /// The usage message, line by line.
    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![format!("usage: {} [OPTIONS]", self.program)];

        if self.options.is_empty() {
            return lines;
        }

        let flags: Vec<String> = self.options.iter().map(OptionDoc::flags).collect();
        let left_column_width = flags.iter().map(String::len).max().unwrap_or_default();
        let renderer = TwoColumnRenderer::guided(
            MAIN_INDENT,
            left_column_width,
            PADDING_WIDTH,
            self.terminal_width.unwrap_or(DEFAULT_TOTAL_WIDTH),
        );
        lines.push("options:".to_string());

        for (flag, option) in flags.iter().zip(&self.options) {
            lines.extend(renderer.render(flag, &option.help));
        }

        lines
    }

    /// Display the usage message.
    pub fn print_usage(&self, user_interface: &(impl UserInterface + ?Sized)) {
        user_interface.print(self.render().join("\n"));
    }
}
