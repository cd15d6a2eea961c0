//! Date and time representations understood by the built-in strategies
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Textual calendar date layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    Iso,
    /// `DD.MM.YYYY`
    German,
    /// `MM/DD/YYYY`
    Us,
}

impl DateFormat {
    /// chrono format string for this layout
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Iso => "%Y-%m-%d",
            DateFormat::German => "%d.%m.%Y",
            DateFormat::Us => "%m/%d/%Y",
        }
    }

    /// Human-readable layout, used in error messages
    pub fn describe(&self) -> &'static str {
        match self {
            DateFormat::Iso => "YYYY-MM-DD",
            DateFormat::German => "DD.MM.YYYY",
            DateFormat::Us => "MM/DD/YYYY",
        }
    }

    /// Parse `text` strictly: it must round-trip through the layout unchanged
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        let date = NaiveDate::parse_from_str(text, self.pattern()).ok()?;
        (date.format(self.pattern()).to_string() == text).then_some(date)
    }

    pub fn render(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

/// Representations of a time of day or duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    /// `HH:MM:SS` text
    Hms,
    /// Whole seconds as an integer
    Seconds,
}

/// Parse strict `HH:MM:SS` text into seconds past midnight
pub fn parse_hms(text: &str) -> Option<u32> {
    let time = NaiveTime::parse_from_str(text, "%H:%M:%S").ok()?;
    if time.format("%H:%M:%S").to_string() != text {
        return None;
    }
    Some(time.num_seconds_from_midnight())
}

/// Render seconds as `HH:MM:SS`; hours grow past 23 for long durations
pub fn render_hms(seconds: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
