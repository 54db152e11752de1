//! PDF Viewer Navigation
//!
//! The file shown by every tab-layout macro on a page is carried by one URL
//! query parameter (`file=<name>` by default):
//! - reading the URL yields the page signal
//! - clicking a tab produces a URL with the parameter rewritten
//! - each tab link points at such a URL

mod error;
mod signal;

pub use error::NavigationError;
pub use signal::{tab_href, with_signal, without_signal, PageSignal, DEFAULT_FILE_PARAM};

pub type Result<T> = std::result::Result<T, NavigationError>;
