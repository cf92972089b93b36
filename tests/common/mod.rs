//! Shared test doubles: an in-memory Api implementation with a call log, and
//! a scripted prompt provider.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use meistertask_cli::api::{Api, ProjectFilter};
use meistertask_cli::error::{MeisterError, Result};
use meistertask_cli::models::{Project, ProjectStatus, Section, Task};
use meistertask_cli::prompt::PromptProvider;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap()
}

pub fn project(id: i64, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        notes: Some(format!("{} notes", name)),
        status: ProjectStatus::Active,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn section(id: i64, name: &str, project_id: i64) -> Section {
    Section {
        id,
        name: name.to_string(),
        project_id,
    }
}

pub fn task(id: i64, name: &str, section: &Section) -> Task {
    Task {
        id,
        name: name.to_string(),
        notes: None,
        section_id: section.id,
        section_name: section.name.clone(),
        created_at: timestamp(),
    }
}

/// In-memory stand-in for the remote service. Records every call so tests can
/// assert on exactly which round trips happened and in which order.
pub struct MockApi {
    pub projects: RefCell<Vec<Project>>,
    pub sections: RefCell<Vec<Section>>,
    pub tasks: RefCell<Vec<Task>>,
    pub calls: Rc<RefCell<Vec<String>>>,
    next_id: Cell<i64>,
    fail_on: RefCell<Option<(&'static str, String)>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            projects: RefCell::new(Vec::new()),
            sections: RefCell::new(Vec::new()),
            tasks: RefCell::new(Vec::new()),
            calls: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(100),
            fail_on: RefCell::new(None),
        }
    }

    pub fn with_projects(self, projects: Vec<Project>) -> Self {
        *self.projects.borrow_mut() = projects;
        self
    }

    pub fn with_sections(self, sections: Vec<Section>) -> Self {
        *self.sections.borrow_mut() = sections;
        self
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        *self.tasks.borrow_mut() = tasks;
        self
    }

    /// Make the named operation return a server-reported error.
    pub fn failing(self, operation: &'static str, message: &str) -> Self {
        *self.fail_on.borrow_mut() = Some((operation, message.to_string()));
        self
    }

    /// Clone of the shared call log handle; survives moving the mock into the
    /// orchestrator.
    pub fn call_log(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.calls)
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn maybe_fail(&self, operation: &'static str) -> Result<()> {
        if let Some((target, message)) = self.fail_on.borrow().as_ref() {
            if *target == operation {
                return Err(MeisterError::Api(message.clone()));
            }
        }
        Ok(())
    }

    fn take_id(&self) -> i64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl Api for MockApi {
    fn list_projects(&self, filter: ProjectFilter) -> Result<Vec<Project>> {
        self.record(format!("list_projects:{}", filter.as_str()));
        self.maybe_fail("list_projects")?;
        let projects = self.projects.borrow();
        Ok(projects
            .iter()
            .filter(|p| match filter {
                ProjectFilter::Active => p.status == ProjectStatus::Active,
                ProjectFilter::Archived => p.status == ProjectStatus::Archived,
                ProjectFilter::All => true,
            })
            .cloned()
            .collect())
    }

    fn get_project(&self, id: i64) -> Result<Project> {
        self.record(format!("get_project:{}", id));
        self.maybe_fail("get_project")?;
        self.projects
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| MeisterError::Api(format!("no project {}", id)))
    }

    fn create_project(&self, name: &str, notes: &str) -> Result<Project> {
        self.record(format!("create_project:{}", name));
        self.maybe_fail("create_project")?;
        let created = Project {
            id: self.take_id(),
            name: name.to_string(),
            notes: Some(notes.to_string()),
            status: ProjectStatus::Active,
            created_at: timestamp(),
            updated_at: timestamp(),
        };
        self.projects.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_project(
        &self,
        id: i64,
        name: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Project> {
        self.record(format!("update_project:{}", id));
        self.maybe_fail("update_project")?;
        let mut projects = self.projects.borrow_mut();
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| MeisterError::Api(format!("no project {}", id)))?;
        if let Some(name) = name {
            project.name = name.to_string();
        }
        if let Some(notes) = notes {
            project.notes = Some(notes.to_string());
        }
        Ok(project.clone())
    }

    fn set_project_status(&self, id: i64, status: ProjectStatus) -> Result<Project> {
        self.record(format!("set_project_status:{}:{}", id, status));
        self.maybe_fail("set_project_status")?;
        let mut projects = self.projects.borrow_mut();
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| MeisterError::Api(format!("no project {}", id)))?;
        project.status = status;
        Ok(project.clone())
    }

    fn create_section(&self, project_id: i64, name: &str) -> Result<Section> {
        self.record(format!("create_section:{}", name));
        self.maybe_fail("create_section")?;
        let created = Section {
            id: self.take_id(),
            name: name.to_string(),
            project_id,
        };
        self.sections.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn list_sections(&self, project_id: i64) -> Result<Vec<Section>> {
        self.record(format!("list_sections:{}", project_id));
        self.maybe_fail("list_sections")?;
        Ok(self
            .sections
            .borrow()
            .iter()
            .filter(|s| s.project_id == project_id)
            .cloned()
            .collect())
    }

    fn list_tasks(&self, project_id: i64) -> Result<Vec<Task>> {
        self.record(format!("list_tasks:{}", project_id));
        self.maybe_fail("list_tasks")?;
        let sections = self.sections.borrow();
        let section_ids: Vec<i64> = sections
            .iter()
            .filter(|s| s.project_id == project_id)
            .map(|s| s.id)
            .collect();
        Ok(self
            .tasks
            .borrow()
            .iter()
            .filter(|t| section_ids.contains(&t.section_id))
            .cloned()
            .collect())
    }

    fn create_task(&self, section_id: i64, name: &str, notes: &str) -> Result<Task> {
        self.record(format!("create_task:{}:{}", section_id, name));
        self.maybe_fail("create_task")?;
        let section_name = self
            .sections
            .borrow()
            .iter()
            .find(|s| s.id == section_id)
            .map(|s| s.name.clone())
            .ok_or_else(|| MeisterError::Api(format!("no section {}", section_id)))?;
        let created = Task {
            id: self.take_id(),
            name: name.to_string(),
            notes: Some(notes.to_string()),
            section_id,
            section_name,
            created_at: timestamp(),
        };
        self.tasks.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_task(&self, id: i64, name: &str, notes: &str) -> Result<Task> {
        self.record(format!("update_task:{}", id));
        self.maybe_fail("update_task")?;
        let mut tasks = self.tasks.borrow_mut();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| MeisterError::Api(format!("no task {}", id)))?;
        task.name = name.to_string();
        task.notes = Some(notes.to_string());
        Ok(task.clone())
    }

    fn move_task(&self, id: i64, section_id: i64) -> Result<Task> {
        self.record(format!("move_task:{}:{}", id, section_id));
        self.maybe_fail("move_task")?;
        let section_name = self
            .sections
            .borrow()
            .iter()
            .find(|s| s.id == section_id)
            .map(|s| s.name.clone())
            .ok_or_else(|| MeisterError::Api(format!("no section {}", section_id)))?;
        let mut tasks = self.tasks.borrow_mut();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| MeisterError::Api(format!("no task {}", id)))?;
        task.section_id = section_id;
        task.section_name = section_name;
        Ok(task.clone())
    }
}

/// PromptProvider fed from pre-scripted answers. Panics on an unscripted
/// confirm/read_line so tests notice unexpected interaction.
pub struct ScriptedPrompter {
    indices: VecDeque<usize>,
    confirms: VecDeque<bool>,
    lines: VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self {
            indices: VecDeque::new(),
            confirms: VecDeque::new(),
            lines: VecDeque::new(),
        }
    }

    pub fn with_indices(mut self, indices: &[usize]) -> Self {
        self.indices = indices.iter().copied().collect();
        self
    }

    pub fn with_confirms(mut self, confirms: &[bool]) -> Self {
        self.confirms = confirms.iter().copied().collect();
        self
    }

    pub fn with_lines(mut self, lines: &[&str]) -> Self {
        self.lines = lines.iter().map(|l| l.to_string()).collect();
        self
    }
}

impl PromptProvider for ScriptedPrompter {
    fn choose_index(&mut self, kind: &str, _len: usize) -> Result<usize> {
        self.indices
            .pop_front()
            .ok_or_else(|| MeisterError::InvalidInput(format!("unscripted {} choice", kind)))
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        match self.confirms.pop_front() {
            Some(answer) => Ok(answer),
            None => panic!("unscripted confirm: {}", message),
        }
    }

    fn read_line(&mut self, message: &str) -> Result<String> {
        match self.lines.pop_front() {
            Some(line) => Ok(line),
            None => panic!("unscripted read_line: {}", message),
        }
    }
}
