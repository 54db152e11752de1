//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab list cannot be empty")]
    EmptyTabList,

    #[error("Tab index {index} out of range for {len} tabs")]
    IndexOutOfRange { index: usize, len: usize },
}
