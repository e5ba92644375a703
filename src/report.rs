use colored::Colorize;

/// Severity of a diagnostic message.
///
/// Levels are ordered from least to most severe, so a sink can filter with a
/// simple threshold comparison.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Internal detail such as the expression tree dump.
    Debug,
    /// Routine information.
    Info,
    /// Something suspicious that does not stop the request.
    Warning,
    /// A failed request.
    Error,
    /// An unrecoverable condition.
    Fault,
}

/// A destination for diagnostic messages.
///
/// The sink is a capability passed by reference to whatever needs to emit
/// diagnostics; there is no process-wide logger. Logging has no effect on
/// parsing or evaluation results, so implementations are free to discard
/// messages entirely.
pub trait MessageSink {
    /// Accepts one message at the given severity.
    fn log(&self, level: Level, message: &str);
}

/// A sink that writes color-coded messages to standard output.
///
/// Each line of a multi-line message is prefixed with its `[LEVEL]` tag and
/// colored by severity. Messages below `min_level` are dropped.
pub struct ConsoleSink {
    /// Least severe level that is still printed.
    pub min_level: Level,
}

impl ConsoleSink {
    /// Creates a console sink that prints messages at `min_level` and above.
    #[must_use]
    pub const fn new(min_level: Level) -> Self {
        Self { min_level }
    }
}

impl MessageSink for ConsoleSink {
    fn log(&self, level: Level, message: &str) {
        if level < self.min_level {
            return;
        }

        for line in message.lines() {
            let tagged = match level {
                Level::Debug => format!("[DEBUG] {line}").blue(),
                Level::Info => format!("[INFO] {line}").green(),
                Level::Warning => format!("[WARNING] {line}").yellow(),
                Level::Error => format!("[ERROR] {line}").red(),
                Level::Fault => format!("[FAULT] {line}").on_red(),
            };
            println!("{tagged}");
        }
    }
}
