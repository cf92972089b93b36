//! Remote service access.
//!
//! The [`Api`] trait is the only doorway to the MeisterTask service; the
//! workflows are generic over it so tests can substitute an in-memory
//! implementation. [`HttpApi`] is the production implementation: blocking
//! HTTP, form-encoded requests, JSON responses.

use crate::config::Config;
use crate::error::{MeisterError, Result};
use crate::models::{ApiErrorBody, Project, ProjectStatus, Section, Task};
use clap::ValueEnum;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Server-side project listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ProjectFilter {
    #[default]
    Active,
    Archived,
    All,
}

impl ProjectFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectFilter::Active => "active",
            ProjectFilter::Archived => "archived",
            ProjectFilter::All => "all",
        }
    }
}

impl std::fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The remote operation set the workflows are written against.
///
/// Every call is synchronous and blocks until the server answers. A transport
/// failure or a server-reported error payload surfaces as `Err`; callers never
/// see half-decoded responses.
pub trait Api {
    fn list_projects(&self, filter: ProjectFilter) -> Result<Vec<Project>>;
    fn get_project(&self, id: i64) -> Result<Project>;
    fn create_project(&self, name: &str, notes: &str) -> Result<Project>;
    fn update_project(&self, id: i64, name: Option<&str>, notes: Option<&str>)
        -> Result<Project>;
    fn set_project_status(&self, id: i64, status: ProjectStatus) -> Result<Project>;

    fn create_section(&self, project_id: i64, name: &str) -> Result<Section>;
    fn list_sections(&self, project_id: i64) -> Result<Vec<Section>>;

    fn list_tasks(&self, project_id: i64) -> Result<Vec<Task>>;
    fn create_task(&self, section_id: i64, name: &str, notes: &str) -> Result<Task>;
    fn update_task(&self, id: i64, name: &str, notes: &str) -> Result<Task>;
    fn move_task(&self, id: i64, section_id: i64) -> Result<Task>;
}

pub struct HttpApi {
    client: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl HttpApi {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        tracing::debug!(path, "GET");
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.token)
            .query(query)
            .send()?;
        decode(response.status(), &response.text()?)
    }

    fn post<T: DeserializeOwned>(&self, path: &str, form: &[(&str, String)]) -> Result<T> {
        tracing::debug!(path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.token)
            .form(form)
            .send()?;
        decode(response.status(), &response.text()?)
    }

    fn put<T: DeserializeOwned>(&self, path: &str, form: &[(&str, String)]) -> Result<T> {
        tracing::debug!(path, "PUT");
        let response = self
            .client
            .put(self.url(path))
            .bearer_auth(&self.token)
            .form(form)
            .send()?;
        decode(response.status(), &response.text()?)
    }
}

/// Decode a response body, surfacing the structured error payload first.
///
/// The API embeds `{"errors": [...]}` in responses that are otherwise
/// well-formed, sometimes with a 200 status, so the error check runs before
/// the status check and before normal decoding.
fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    if let Ok(error_body) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(first) = error_body.errors.first() {
            return Err(MeisterError::Api(first.message.clone()));
        }
    }

    if !status.is_success() {
        return Err(MeisterError::UnexpectedStatus(status));
    }

    Ok(serde_json::from_str(body)?)
}

impl Api for HttpApi {
    fn list_projects(&self, filter: ProjectFilter) -> Result<Vec<Project>> {
        self.get("/projects", &[("status", filter.as_str())])
    }

    fn get_project(&self, id: i64) -> Result<Project> {
        self.get(&format!("/projects/{}", id), &[])
    }

    fn create_project(&self, name: &str, notes: &str) -> Result<Project> {
        self.post(
            "/projects",
            &[("name", name.to_string()), ("notes", notes.to_string())],
        )
    }

    fn update_project(
        &self,
        id: i64,
        name: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Project> {
        let mut form = Vec::new();
        if let Some(name) = name {
            form.push(("name", name.to_string()));
        }
        if let Some(notes) = notes {
            form.push(("notes", notes.to_string()));
        }
        self.put(&format!("/projects/{}", id), &form)
    }

    fn set_project_status(&self, id: i64, status: ProjectStatus) -> Result<Project> {
        self.put(
            &format!("/projects/{}", id),
            &[("status", status.code().to_string())],
        )
    }

    fn create_section(&self, project_id: i64, name: &str) -> Result<Section> {
        self.post(
            &format!("/projects/{}/sections", project_id),
            &[("name", name.to_string())],
        )
    }

    fn list_sections(&self, project_id: i64) -> Result<Vec<Section>> {
        self.get(&format!("/projects/{}/sections", project_id), &[])
    }

    fn list_tasks(&self, project_id: i64) -> Result<Vec<Task>> {
        self.get(&format!("/projects/{}/tasks", project_id), &[])
    }

    fn create_task(&self, section_id: i64, name: &str, notes: &str) -> Result<Task> {
        self.post(
            &format!("/sections/{}/tasks", section_id),
            &[("name", name.to_string()), ("notes", notes.to_string())],
        )
    }

    fn update_task(&self, id: i64, name: &str, notes: &str) -> Result<Task> {
        self.put(
            &format!("/tasks/{}", id),
            &[("name", name.to_string()), ("notes", notes.to_string())],
        )
    }

    fn move_task(&self, id: i64, section_id: i64) -> Result<Task> {
        self.put(
            &format!("/tasks/{}", id),
            &[("section_id", section_id.to_string())],
        )
    }
}
