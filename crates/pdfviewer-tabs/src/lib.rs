//! PDF Viewer Tab Management
//!
//! A page can host several PDF viewer macros in tab layout. Each macro owns an
//! ordered list of attached files, and the file being shown is a single
//! page-wide value taken from the URL. Every macro derives its own active tab
//! from that value, from scratch, on every render.

mod error;
mod file;
mod instance;
mod resolver;
mod state;

pub use error::TabError;
pub use file::{FileId, TabList};
pub use instance::MacroInstance;
pub use resolver::{on_tab_selected, resolve_active_index};
pub use state::TabState;

pub type Result<T> = std::result::Result<T, TabError>;
