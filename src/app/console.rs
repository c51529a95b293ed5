//! In-app console.
//!
//! Everything the views "log" lands here: a bounded list of timestamped lines
//! shown in the console panel. Each line is also emitted as a `tracing` event
//! under the `console` target and queued for the optional on-disk mirror.

use chrono::Local;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleSource {
    Timer,
    Notifier,
    Input,
    System,
}

impl ConsoleSource {
    pub fn tag(self) -> &'static str {
        match self {
            ConsoleSource::Timer => "timer",
            ConsoleSource::Notifier => "notifier",
            ConsoleSource::Input => "input",
            ConsoleSource::System => "system",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleLine {
    pub timestamp: String,
    pub source: ConsoleSource,
    pub text: String,
}

#[derive(Debug)]
pub struct Console {
    lines: VecDeque<ConsoleLine>,
    capacity: usize,
    timestamp_format: String,
    /// Lines scrolled back from the bottom; 0 follows new output.
    pub scroll_offset: usize,
    new_lines: Vec<ConsoleLine>,
}

impl Console {
    pub fn new(capacity: usize, timestamp_format: impl Into<String>) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity.min(1024)),
            capacity: capacity.max(1),
            timestamp_format: timestamp_format.into(),
            scroll_offset: 0,
            new_lines: Vec::new(),
        }
    }

    pub fn log(&mut self, source: ConsoleSource, text: &str) {
        tracing::info!(target: "console", source = source.tag(), "{}", text);

        let line = ConsoleLine {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            source,
            text: text.to_string(),
        };
        self.new_lines.push(line.clone());
        self.lines.push_back(line);

        if self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
        if self.scroll_offset > 0 {
            // Keep the viewport pinned on what the user scrolled to.
            self.scroll_offset = (self.scroll_offset + 1).min(self.lines.len().saturating_sub(1));
        }
    }

    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &ConsoleLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines logged since the previous drain, oldest first.
    pub fn drain_new(&mut self) -> Vec<ConsoleLine> {
        std::mem::take(&mut self.new_lines)
    }

    pub fn scroll_up(&mut self, amount: usize) {
        let max = self.lines.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + amount).min(max);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }
}
