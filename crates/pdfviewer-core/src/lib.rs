//! PDF Viewer Core
//!
//! Plays the host side of the PDF viewer macro for one page view: turns macro
//! parameters into tab lists, owns the shared file signal, applies tab clicks
//! and re-syncs every macro instance after each change.

mod config;
mod error;
mod page;
mod params;

pub use config::Config;
pub use error::CoreError;
pub use page::{Page, TabView, ViewerView};
pub use params::{Dimensions, FileSource, Layout, MacroParams};

// Re-export the building blocks
pub use pdfviewer_navigation::{
    tab_href, with_signal, without_signal, NavigationError, PageSignal, DEFAULT_FILE_PARAM,
};
pub use pdfviewer_tabs::{
    on_tab_selected, resolve_active_index, FileId, MacroInstance, TabError, TabList, TabState,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
