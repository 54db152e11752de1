//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] pdfviewer_tabs::TabError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] pdfviewer_navigation::NavigationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not a pdfviewer macro: {0}")]
    InvalidMacro(String),

    #[error("Missing macro parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Macro instance not found: {0}")]
    InstanceNotFound(usize),
}
