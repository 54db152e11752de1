//! Markup error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("Viewer not found: {0}")]
    ViewerNotFound(usize),

    #[error("Viewer {viewer} has no tab {index}")]
    TabNotFound { viewer: usize, index: usize },

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Tab error: {0}")]
    Tab(#[from] pdfviewer_core::TabError),

    #[error("Page error: {0}")]
    Core(#[from] pdfviewer_core::CoreError),
}
