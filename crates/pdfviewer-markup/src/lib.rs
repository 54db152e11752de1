//! PDF Viewer Markup
//!
//! Renders the macros of a [`pdfviewer_core::Page`] to HTML and reads rendered
//! HTML back the way a browser test would: tab names, links, the active tab
//! and the viewer frame of each macro.

mod error;
mod reader;
mod render;

pub use error::MarkupError;
pub use reader::{MacroPage, SingleViewer, TabLayoutViewer, ViewerFrame};
pub use render::render_page;

pub type Result<T> = std::result::Result<T, MarkupError>;
