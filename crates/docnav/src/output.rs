//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Results go to stdout; status messages and errors go to stderr.
pub(crate) struct Output {
    out: Term,
    err: Term,
    red: Style,
    yellow: Style,
    dim: Style,
    cyan_bold: Style,
    highlight: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            red: Style::new().red(),
            yellow: Style::new().yellow(),
            dim: Style::new().dim(),
            cyan_bold: Style::new().cyan().bold(),
            highlight: Style::new().yellow().bold(),
        }
    }

    /// Print a result line.
    pub(crate) fn line(&self, msg: &str) {
        let _ = self.out.write_line(msg);
    }

    /// Print a status message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.err.write_line(msg);
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.err.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Style a title (cyan bold).
    pub(crate) fn title(&self, msg: &str) -> String {
        self.cyan_bold.apply_to(msg).to_string()
    }

    /// Style secondary text (dim).
    pub(crate) fn dim(&self, msg: &str) -> String {
        self.dim.apply_to(msg).to_string()
    }

    /// Style matched text.
    pub(crate) fn matched(&self, msg: &str) -> String {
        self.highlight.apply_to(msg).to_string()
    }
}
