//! The diagnostic-console mirror: entries that pass the threshold are echoed
//! as one colored line each, so a developer watching the console sees events
//! the moment they happen, independent of what persistence is doing.

mod color;

pub use color::Color;

use crate::entry::LogEntry;
use crate::level::Level;
use chrono::Local;
use std::collections::HashMap;
use std::io::{self, Write};

/// Renders entries as `HH:MM:SS [LEVEL] message {data}` lines, tag colored by severity.
#[derive(Debug, Clone)]
pub struct ConsoleMirror {
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
    /// Default level colors may clash with the embedder's terminal theme; overrides fix that.
    level_colors: HashMap<Level, Color>,
}

impl Default for ConsoleMirror {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleMirror {
    #[must_use]
    pub fn new() -> Self {
        let mut level_colors = HashMap::new();
        level_colors.insert(Level::Debug, Color::purple());
        level_colors.insert(Level::Info, Color::cyan());
        level_colors.insert(Level::Warn, Color::yellow());
        level_colors.insert(Level::Error, Color::red());

        Self {
            colors_enabled: true,
            level_colors,
        }
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Default level colors may clash with the embedder's terminal theme.
    #[must_use]
    pub fn level_color(mut self, level: Level, color: Color) -> Self {
        self.level_colors.insert(level, color);
        self
    }

    /// Assembles timestamp, tag, message, and payload into one line, the
    /// rendering path for every mirrored entry.
    fn format_entry(&self, entry: &LogEntry) -> String {
        let ts = entry
            .timestamp
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string();
        let tag = format!("[{}]", entry.level.label());

        let (ts, tag) = if self.colors_enabled {
            let level_color = self
                .level_colors
                .get(&entry.level)
                .copied()
                .unwrap_or(Color::white());
            (
                format!("{}{ts}{}", Color::DIM, Color::RESET),
                format!("{}{tag}{}", level_color.fg_ansi(), Color::RESET),
            )
        } else {
            (ts, tag)
        };

        // Value's Display is compact JSON, which keeps the payload on one line
        entry.data.as_ref().map_or_else(
            || format!("{ts} {tag} {}", entry.message),
            |data| format!("{ts} {tag} {} {data}", entry.message),
        )
    }

    /// Mirror writes must never surface a failure: a closed stdout on the
    /// host's side cannot be allowed to take the application down with it.
    pub fn write(&self, entry: &LogEntry) {
        let formatted = self.format_entry(entry);

        if entry.level >= Level::Warn {
            let _ = writeln!(io::stderr(), "{formatted}");
        } else {
            let _ = writeln!(io::stdout(), "{formatted}");
        }
    }
}
