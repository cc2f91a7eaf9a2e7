#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Where the program's messages and errors are displayed.
pub trait UserInterface {
    /// Display a regular message.
    fn print(&self, message: String);

    /// Display an error message.
    fn print_error(&self, message: String);
}

/// Displays messages on stdout and errors on stderr.
#[derive(Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct TwoColumnRenderer {
    indent: usize,
    left: usize,
    padding: usize,
    right: usize,
}

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_RIGHT_WIDTH: usize = 17;

// Target 95% of the total width, so the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

impl TwoColumnRenderer {
    /// Fit the right column into the total width, without going below the minimum.
    pub(crate) fn guided(indent: usize, left: usize, padding: usize, total_width: usize) -> Self {
        let non_right = indent + left + padding;
        let target_total_width = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;
        let right = if non_right + MINIMUM_RIGHT_WIDTH <= target_total_width {
            target_total_width - non_right
        } else {
            MINIMUM_RIGHT_WIDTH
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Column {non_right} within the total {total_width}.  Selecting right: {right}.");
        }

        Self::new(indent, left, padding, right)
    }

    pub(crate) fn new(indent: usize, left: usize, padding: usize, right: usize) -> Self {
        assert!(right >= 2, "the right column must fit a hyphenated character");
        Self {
            indent,
            left,
            padding,
            right,
        }
    }

    pub(crate) fn render(&self, left: &str, right: &str) -> Vec<String> {
        let TwoColumnRenderer {
            indent,
            left: left_width,
            padding,
            right: right_width,
        } = *self;
        let column = indent + left_width + padding;
        let mut out = Vec::default();

        for (i, part) in chunk(right, right_width).iter().enumerate() {
            if i == 0 {
                out.push(format!(
                    "{:indent$}{:left_width$}{:padding$}{part}",
                    "", left, ""
                ));
            } else {
                out.push(format!("{:column$}{part}", ""));
            }
        }

        if out.is_empty() {
            out.push(format!("{:indent$}{left}", ""));
        }

        out
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.len() + word.len() < width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while left + width < characters.len() {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

#[cfg(any(test, feature = "unit_test"))]
mod util {
    use super::UserInterface;
    use std::cell::RefCell;

    /// Collects messages in memory, for tests.
    #[derive(Default)]
    pub struct InMemoryInterface {
        messages: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            self.messages.borrow_mut().push(message);
        }

        fn print_error(&self, message: String) {
            self.errors.borrow_mut().push(message);
        }
    }

    impl InMemoryInterface {
        /// Take the (messages, errors) displayed so far, each joined by newlines.
        pub fn consume(self) -> (String, String) {
            let InMemoryInterface { messages, errors } = self;
            (messages.take().join("\n"), errors.take().join("\n"))
        }
    }
}

#[cfg(any(test, feature = "unit_test"))]
pub use util::InMemoryInterface;
