use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

const UNKNOWN: &str = "unknown";

/// HTML payload bound to a marker and shown on demand (e.g. on click)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    content: String,
}

impl Popup {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    /// Describes one earthquake: magnitude, place, then date and time.
    pub fn for_event(
        magnitude: Option<f64>,
        place: Option<&str>,
        timestamp_millis: Option<i64>,
    ) -> Self {
        let magnitude = magnitude.map_or_else(|| UNKNOWN.to_string(), |m| m.to_string());
        let place = escape_html(place.unwrap_or(UNKNOWN));
        let when = timestamp_millis
            .and_then(format_timestamp)
            .unwrap_or_else(|| UNKNOWN.to_string());

        Self::new(format!(
            "<h4>Magnitude: {}</h4><hr><p>Place: {}</p><hr><p>Date & Time: {}</p>",
            magnitude, place, when
        ))
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Human-readable UTC date and time for an epoch-milliseconds timestamp
pub fn format_timestamp(millis: i64) -> Option<String> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%a %b %d %Y %H:%M:%S UTC").to_string())
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
