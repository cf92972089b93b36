//! Environment configuration.
//!
//! The API token comes from the `MEISTERTASK` environment variable; the base
//! URL can be overridden with `MEISTERTASK_API_URL` (used by tests and for
//! self-hosted proxies).

use crate::error::{MeisterError, Result};

pub const DEFAULT_BASE_URL: &str = "https://www.meistertask.com/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("MEISTERTASK")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(MeisterError::MissingToken)?;

        let base_url = std::env::var("MEISTERTASK_API_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { token, base_url })
    }
}
