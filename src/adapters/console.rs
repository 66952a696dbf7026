use crate::domain::ports::Console;
use std::sync::{Arc, Mutex};

/// Writes every line straight to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn log(&self, line: &str) {
        println!("{}", line);
    }
}

/// Keeps every line in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns the recorded lines and empties the buffer.
    pub fn take(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(mut lines) => std::mem::take(&mut *lines),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Console for RecordingConsole {
    fn log(&self, line: &str) {
        tracing::trace!("console: {}", line);
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line.to_string()),
            Err(poisoned) => poisoned.into_inner().push(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_console_shares_buffer_between_clones() {
        let console = RecordingConsole::new();
        let handle = console.clone();

        console.log("first");
        handle.log("second");

        assert_eq!(console.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_take_drains_buffer() {
        let console = RecordingConsole::new();
        console.log("only");

        assert_eq!(console.take(), vec!["only"]);
        assert!(console.lines().is_empty());
    }
}
