//! Event tracking. Events are only logged; nothing leaves the process.

use chrono::{DateTime, SecondsFormat, Utc};
use log::info;

fn format_event(name: &str, properties: &[(&str, &str)]) -> String {
    let rendered = properties
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(" ");
    format!("Event: {} {}", name, rendered)
}

/// Logs `name` with its properties at info level.
pub fn track_event(name: &str, properties: &[(&str, &str)]) {
    info!("{}", format_event(name, properties));
}

/// Properties of the `page_loaded` event: ISO 8601 timestamp and user agent.
pub fn page_loaded_properties(user_agent: &str, at: DateTime<Utc>) -> Vec<(&'static str, String)> {
    vec![
        ("timestamp", at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        ("userAgent", user_agent.to_owned()),
    ]
}

/// Emits `page_loaded` stamped with the current time.
pub fn track_page_loaded(user_agent: &str) {
    let properties = page_loaded_properties(user_agent, Utc::now());
    let borrowed: Vec<(&str, &str)> = properties
        .iter()
        .map(|(key, value)| (*key, value.as_str()))
        .collect();
    track_event("page_loaded", &borrowed);
}
