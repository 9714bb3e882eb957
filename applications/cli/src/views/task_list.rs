//! Task list rendering.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use std::fmt::Write;
use taskdeck_client::Task;
use taskdeck_session::TaskCollection;

pub const EMPTY_MESSAGE: &str = "No tasks yet. Create your first one with `taskdeck add <title>`.";

/// Render the collection as it stands.
pub fn render_collection(collection: &TaskCollection) -> String {
    render_task_list(
        collection.tasks(),
        collection.is_loading(),
        collection.error(),
    )
}

/// Render a list of tasks with loading and error states.
pub fn render_task_list(tasks: &[Task], loading: bool, error: Option<&str>) -> String {
    if loading && tasks.is_empty() {
        return "Loading...".to_string();
    }

    let mut out = String::from("My Tasks\n");

    if let Some(error) = error {
        let _ = writeln!(out, "! {}", error);
    }

    if tasks.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
        return out;
    }

    for task in tasks {
        out.push_str(&render_task_in(task, &Local));
    }
    out
}

/// Render one task using local time.
pub fn render_task(task: &Task) -> String {
    render_task_in(task, &Local)
}

pub fn render_task_in<Tz: TimeZone>(task: &Task, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let _ = writeln!(out, "{} #{} {}", checkbox, task.id, task.title);

    if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "      {}", description);
    }
    let _ = writeln!(
        out,
        "      Created: {}",
        format_timestamp_in(&task.created_at, tz)
    );
    out
}

/// Format a server timestamp for display.
///
/// Accepts RFC 3339 and naive ISO-8601 (taken as UTC). Anything else is
/// shown as received.
pub fn format_timestamp_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        });

    match parsed {
        Some(utc) => utc.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}
