//! Command workflows.
//!
//! One method per user-facing verb, each the same shape: validate local
//! preconditions, resolve referenced entities, gather any interactive input,
//! call the remote service, display the server's snapshot. Errors propagate to
//! the single handler in `main`; nothing here retries or rolls back, so a
//! partially completed workflow (say, a created project whose default sections
//! failed) leaves the completed steps in place.

use crate::api::{Api, ProjectFilter};
use crate::display::{self, Theme};
use crate::error::{MeisterError, Result};
use crate::matcher::names_match;
use crate::models::{Project, ProjectStatus, Task};
use crate::prompt::PromptProvider;
use crate::sections::{self, Category};
use crate::select::select_one;

/// Names shorter than this are rejected before any round trip.
pub const MIN_NAME_LEN: usize = 5;

/// Sections every new project starts with, in creation order.
pub const DEFAULT_SECTIONS: [&str; 3] = ["Open", "In Progress", "Done"];

pub struct Meistertask<S, P> {
    api: S,
    prompter: P,
    theme: Theme,
}

impl<S: Api, P: PromptProvider> Meistertask<S, P> {
    pub fn new(api: S, prompter: P, theme: Theme) -> Self {
        Self {
            api,
            prompter,
            theme,
        }
    }

    pub fn project_create(&mut self, name: &str, description: &str) -> Result<()> {
        validate_name(name, "Project")?;

        let project = self.api.create_project(name, description)?;
        tracing::debug!(id = project.id, "project created");

        for section in DEFAULT_SECTIONS {
            self.api.create_section(project.id, section)?;
        }

        display::project(&self.theme, &project);
        display::success(&self.theme, "Project created successfully");
        Ok(())
    }

    pub fn project_view(&mut self, name: &str) -> Result<()> {
        let project = self.resolve_project(name)?;
        display::project(&self.theme, &project);
        Ok(())
    }

    pub fn project_update(&mut self, name: &str) -> Result<()> {
        let project = self.resolve_project(name)?;
        display::project(&self.theme, &project);

        let new_name = self.prompter.read_line("Type new name (Enter to skip)")?;
        let new_description = self
            .prompter
            .read_line("Type new description (Enter to skip)")?;

        let new_name = non_empty(&new_name);
        let new_description = non_empty(&new_description);

        if new_name.is_none() && new_description.is_none() {
            display::notice(&self.theme, "Nothing updated");
            return Ok(());
        }

        let updated = self
            .api
            .update_project(project.id, new_name, new_description)?;
        display::project(&self.theme, &updated);
        display::success(&self.theme, "Project updated successfully");
        Ok(())
    }

    pub fn project_delete(&mut self, name: &str) -> Result<()> {
        let project = self.resolve_project(name)?;
        display::project(&self.theme, &project);

        if !self.prompter.confirm("Do you want to delete this project?")? {
            display::notice(&self.theme, "No project is deleted");
            return Ok(());
        }

        let deleted = self
            .api
            .set_project_status(project.id, ProjectStatus::Deleted)?;
        display::project(&self.theme, &deleted);
        display::success(&self.theme, "Project is deleted successfully");
        Ok(())
    }

    pub fn project_archive(&mut self, name: &str) -> Result<()> {
        let project = self.resolve_project(name)?;
        display::project(&self.theme, &project);

        if !self.prompter.confirm("Do you want to archive this project?")? {
            display::notice(&self.theme, "No project is archived");
            return Ok(());
        }

        let archived = self
            .api
            .set_project_status(project.id, ProjectStatus::Archived)?;
        display::project(&self.theme, &archived);
        display::success(&self.theme, "Project is archived successfully");
        Ok(())
    }

    pub fn project_list(&mut self, filter: ProjectFilter) -> Result<()> {
        let projects = self.api.list_projects(filter)?;
        if projects.is_empty() {
            return Err(MeisterError::NotFound("No project is found".into()));
        }

        for project in &projects {
            display::project(&self.theme, project);
        }
        Ok(())
    }

    pub fn task_create(&mut self, name: &str, project_name: &str, description: &str) -> Result<()> {
        validate_name(name, "Task")?;

        let project = self.resolve_project(project_name)?;
        let sections = self.api.list_sections(project.id)?;
        let section = select_one(&sections, &self.theme, &mut self.prompter)?.ok_or_else(|| {
            MeisterError::NotFound("No section is found in this project".into())
        })?;

        let task = self.api.create_task(section.id, name, description)?;
        display::task(&self.theme, &task);
        display::success(&self.theme, "Task added successfully");
        Ok(())
    }

    pub fn task_update(&mut self, name: &str, project_name: &str) -> Result<()> {
        let project = self.resolve_project(project_name)?;
        let task = self.resolve_task(project.id, name)?;
        display::task(&self.theme, &task);

        let new_name = self.prompter.read_line("Type new name (Enter to skip)")?;
        let new_description = self
            .prompter
            .read_line("Type new description (Enter to skip)")?;

        let new_name = non_empty(&new_name);
        let new_description = non_empty(&new_description);

        if new_name.is_none() && new_description.is_none() {
            display::notice(&self.theme, "Nothing updated");
            return Ok(());
        }

        // The task endpoint wants both fields; blanks keep the previous value.
        let merged_name = new_name.unwrap_or(&task.name);
        let merged_description = new_description
            .map(str::to_string)
            .or_else(|| task.notes.clone())
            .unwrap_or_default();

        let updated = self
            .api
            .update_task(task.id, merged_name, &merged_description)?;
        display::task(&self.theme, &updated);
        display::success(&self.theme, "Task updated successfully");
        Ok(())
    }

    pub fn task_move(&mut self, name: &str, project_name: &str, section_name: &str) -> Result<()> {
        let project = self.resolve_project(project_name)?;
        let task = self.resolve_task(project.id, name)?;

        let sections = self.api.list_sections(project.id)?;
        let target = sections::find_by_name(&sections, section_name).ok_or_else(|| {
            MeisterError::NotFound(format!(
                "No section is found with name: {}",
                section_name
            ))
        })?;

        let moved = self.api.move_task(task.id, target.id)?;
        display::task(&self.theme, &moved);
        display::success(&self.theme, "Task moved successfully");
        Ok(())
    }

    pub fn task_list(&mut self, project_name: &str, category: Category) -> Result<()> {
        let project = self.resolve_project(project_name)?;
        let tasks = self.api.list_tasks(project.id)?;

        let filtered = sections::filter_by_category(&tasks, category);
        if filtered.is_empty() {
            display::notice(&self.theme, "No task is found in this section");
            return Ok(());
        }

        for task in filtered {
            display::task(&self.theme, task);
        }
        Ok(())
    }

    /// Fetch active projects, keep the approximate-name matches, disambiguate.
    fn resolve_project(&mut self, name: &str) -> Result<Project> {
        let projects = self.api.list_projects(ProjectFilter::Active)?;
        let matched: Vec<Project> = projects
            .into_iter()
            .filter(|project| names_match(name, &project.name))
            .collect();

        tracing::debug!(query = name, candidates = matched.len(), "resolving project");
        select_one(&matched, &self.theme, &mut self.prompter)?
            .cloned()
            .ok_or_else(|| {
                MeisterError::NotFound(format!("No project is found with name: {}", name))
            })
    }

    /// Same as [`resolve_project`](Self::resolve_project), over one project's tasks.
    fn resolve_task(&mut self, project_id: i64, name: &str) -> Result<Task> {
        let tasks = self.api.list_tasks(project_id)?;
        let matched: Vec<Task> = tasks
            .into_iter()
            .filter(|task| names_match(name, &task.name))
            .collect();

        select_one(&matched, &self.theme, &mut self.prompter)?
            .cloned()
            .ok_or_else(|| {
                MeisterError::NotFound(format!("No task is found with name: {}", name))
            })
    }
}

fn validate_name(name: &str, kind: &str) -> Result<()> {
    if name.chars().count() < MIN_NAME_LEN {
        return Err(MeisterError::InvalidInput(format!(
            "{} name must be at least {} characters",
            kind, MIN_NAME_LEN
        )));
    }
    Ok(())
}

fn non_empty(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
