pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod prompt;
pub mod sections;
pub mod select;
pub mod workflows;
