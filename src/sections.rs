//! Section pinpointing and task filtering.
//!
//! Stricter than the name matcher on purpose: when a section is a move target
//! it must be identified unambiguously, so only exact (case- and
//! whitespace-insensitive) equality counts here.

use crate::models::{Section, Task};
use clap::ValueEnum;

/// Task category filter. New projects conventionally get the three sections
/// Open, In Progress and Done; `All` passes every task through unfiltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Open,
    #[value(alias = "inprogress")]
    InProgress,
    Done,
    All,
}

impl Category {
    /// The section name this category compares against, normalized.
    pub fn section_name(&self) -> Option<&'static str> {
        match self {
            Category::Open => Some("open"),
            Category::InProgress => Some("in progress"),
            Category::Done => Some("done"),
            Category::All => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Category::Open => "open",
            Category::InProgress => "in-progress",
            Category::Done => "done",
            Category::All => "all",
        };
        f.write_str(value)
    }
}

/// Find a section by exact name. The first encountered wins when several
/// sections share the same name.
pub fn find_by_name<'a>(sections: &'a [Section], name: &str) -> Option<&'a Section> {
    let wanted = name.trim().to_lowercase();
    sections
        .iter()
        .find(|section| section.name.trim().to_lowercase() == wanted)
}

/// Keep the tasks whose section name falls under `category`.
pub fn filter_by_category<'a>(tasks: &'a [Task], category: Category) -> Vec<&'a Task> {
    match category.section_name() {
        None => tasks.iter().collect(),
        Some(wanted) => tasks
            .iter()
            .filter(|task| task.section_name.trim().to_lowercase() == wanted)
            .collect(),
    }
}
