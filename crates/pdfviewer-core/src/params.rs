//! PDF viewer macro parameters
//!
//! ```text
//! {{pdfviewer file="a.pdf,b.pdf" document="Space.Page" width="50%" height="500"/}}
//! ```
//!
//! - `file`: one file, or a comma-separated list for the tab layout. Commas
//!   inside the query or fragment of an http(s) link stay part of the link.
//! - `document`: page holding the attachments (defaults to the current page)
//! - `width` / `height`: viewer frame size

use serde::{Deserialize, Serialize};
use url::Url;

use pdfviewer_tabs::{FileId, TabError, TabList};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

const MACRO_NAME: &str = "pdfviewer";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MacroParams {
    pub file: String,
    pub document: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One file, no tab bar
    Single,
    /// Several files, one tab each
    Tabs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: String,
    pub height: String,
}

/// Where a file entry points to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileSource {
    /// Attachment of `document`, or of the current page when `None`
    Attachment {
        document: Option<String>,
        name: String,
    },
    /// Absolute http(s) link
    External(Url),
}

impl MacroParams {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }

    /// Parse macro markup or a bare attribute list
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        let attributes = match input.strip_prefix("{{") {
            Some(rest) => {
                let rest = rest
                    .strip_suffix("/}}")
                    .or_else(|| rest.strip_suffix("}}"))
                    .ok_or_else(|| CoreError::InvalidMacro(input.to_string()))?;

                let name_end = rest
                    .find(|c: char| c.is_whitespace())
                    .unwrap_or(rest.len());
                if &rest[..name_end] != MACRO_NAME {
                    return Err(CoreError::InvalidMacro(input.to_string()));
                }
                &rest[name_end..]
            }
            None => input,
        };

        let mut params = Self::default();
        let mut file = None;

        for (key, value) in parse_attributes(attributes)
            .ok_or_else(|| CoreError::InvalidMacro(input.to_string()))?
        {
            match key {
                "file" => file = Some(value.to_string()),
                "document" => params.document = non_empty(value),
                "width" => params.width = non_empty(value),
                "height" => params.height = non_empty(value),
                other => tracing::debug!(parameter = other, "Ignoring unknown macro parameter"),
            }
        }

        params.file = file.ok_or(CoreError::MissingParameter("file"))?;
        Ok(params)
    }

    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }

    pub fn with_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self.height = Some(height.into());
        self
    }

    /// Files in tab order
    pub fn files(&self) -> std::result::Result<TabList, TabError> {
        TabList::new(split_files(&self.file).into_iter().map(FileId::from).collect())
    }

    pub fn layout(&self) -> Layout {
        Layout::for_tab_count(split_files(&self.file).len())
    }

    /// Explicit size, or the layout's default
    pub fn dimensions(&self, config: &Config) -> Dimensions {
        self.dimensions_for(self.layout(), config)
    }

    pub fn dimensions_for(&self, layout: Layout, config: &Config) -> Dimensions {
        let default_height = match layout {
            Layout::Single => &config.default_height,
            Layout::Tabs => &config.default_tab_height,
        };

        Dimensions {
            width: self
                .width
                .clone()
                .unwrap_or_else(|| config.default_width.clone()),
            height: self
                .height
                .clone()
                .unwrap_or_else(|| default_height.clone()),
        }
    }

    pub fn source(&self, file: &FileId) -> FileSource {
        FileSource::resolve(file, self.document.as_deref())
    }
}

impl Layout {
    pub fn for_tab_count(count: usize) -> Self {
        if count > 1 {
            Layout::Tabs
        } else {
            Layout::Single
        }
    }
}

impl FileSource {
    pub fn resolve(file: &FileId, document: Option<&str>) -> Self {
        if let Ok(url) = Url::parse(file.as_str()) {
            if url.scheme() == "http" || url.scheme() == "https" {
                return FileSource::External(url);
            }
        }

        FileSource::Attachment {
            document: document.map(str::to_string),
            name: file.to_string(),
        }
    }
}

/// Comma-separated entries, trimmed, empty ones dropped
fn split_files(value: &str) -> Vec<String> {
    let mut entries: Vec<String> = Vec::new();

    for piece in value.split(',') {
        if let Some(last) = entries.last_mut() {
            let in_query = is_link(last) && last.contains(['?', '#']);
            if in_query && !piece.trim().is_empty() && !is_link(piece) {
                last.push(',');
                last.push_str(piece);
                continue;
            }
        }
        entries.push(piece.to_string());
    }

    entries
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

fn is_link(entry: &str) -> bool {
    let entry = entry.trim_start();
    entry.starts_with("http://") || entry.starts_with("https://")
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// `key="value"` pairs separated by whitespace; `None` on malformed input
fn parse_attributes(input: &str) -> Option<Vec<(&str, &str)>> {
    let mut pairs = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let eq = rest.find('=')?;
        let key = rest[..eq].trim_end();
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return None;
        }

        let after = rest[eq + 1..].trim_start().strip_prefix('"')?;
        let close = after.find('"')?;
        pairs.push((key, &after[..close]));

        rest = after[close + 1..].trim_start();
    }

    Some(pairs)
}
