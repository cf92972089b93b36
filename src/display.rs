//! Terminal rendering of entity snapshots.
//!
//! All colorization goes through a [`Theme`] value passed down from `main`,
//! so the workflows stay free of process-wide presentation state and tests can
//! render plain.

use crate::models::{Project, Task};
use chrono::{DateTime, Utc};
use console::Style;

#[derive(Debug, Clone)]
pub struct Theme {
    pub label: Style,
    pub listing: Style,
    pub notice: Style,
    pub success: Style,
    pub error: Style,
}

impl Theme {
    pub fn colored() -> Self {
        Self {
            label: Style::new().cyan(),
            listing: Style::new().yellow(),
            notice: Style::new().yellow(),
            success: Style::new().green(),
            error: Style::new().red(),
        }
    }

    /// No styling at all. Used for tests and `--no-color`.
    pub fn plain() -> Self {
        Self {
            label: Style::new(),
            listing: Style::new(),
            notice: Style::new(),
            success: Style::new(),
            error: Style::new(),
        }
    }
}

/// Render a server timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn project(theme: &Theme, project: &Project) {
    let notes = project.notes.as_deref().unwrap_or("");
    println!();
    println!("> {}: {}", theme.label.apply_to("Project Id"), project.id);
    println!("> {}: {}", theme.label.apply_to("Project Name"), project.name);
    println!(
        "> {}: {}",
        theme.label.apply_to("Project Description"),
        notes
    );
    println!("> {}: {}", theme.label.apply_to("Status"), project.status);
    println!(
        "> {}: {}",
        theme.label.apply_to("Created at"),
        format_datetime(&project.created_at)
    );
    println!(
        "> {}: {}",
        theme.label.apply_to("Updated at"),
        format_datetime(&project.updated_at)
    );
}

pub fn task(theme: &Theme, task: &Task) {
    println!();
    println!("> {}: {}", theme.label.apply_to("Task Id"), task.id);
    println!("> {}: {}", theme.label.apply_to("Task Name"), task.name);
    if let Some(notes) = task.notes.as_deref().filter(|n| !n.is_empty()) {
        println!("> {}: {}", theme.label.apply_to("Description"), notes);
    }
    println!(
        "> {}: {}",
        theme.label.apply_to("Section"),
        task.section_name
    );
    println!(
        "> {}: {}",
        theme.label.apply_to("Created"),
        format_datetime(&task.created_at)
    );
}

/// Numbered listing shown before an interactive disambiguation prompt.
/// Indices are zero-based positions into the candidate list.
pub fn candidate_listing<T, F>(theme: &Theme, items: &[T], name: F)
where
    F: Fn(&T) -> &str,
{
    for (index, item) in items.iter().enumerate() {
        println!("\t[{}] {}", index, theme.listing.apply_to(name(item)));
    }
}

pub fn success(theme: &Theme, message: &str) {
    println!("[+] {}", theme.success.apply_to(message));
}

pub fn notice(theme: &Theme, message: &str) {
    println!("{}", theme.notice.apply_to(message));
}
