//! File identifiers and per-macro tab lists

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::Result;

/// Opaque identifier of an attached document, usually its file name.
///
/// Comparison is exact and case-sensitive; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for FileId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FileId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered files of one macro instance, in tab order.
///
/// Never empty: a macro with no files is not a rendered instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FileId>", into = "Vec<FileId>")]
pub struct TabList {
    files: Vec<FileId>,
}

impl TabList {
    pub fn new(files: Vec<FileId>) -> Result<Self> {
        if files.is_empty() {
            return Err(TabError::EmptyTabList);
        }

        Ok(Self { files })
    }

    /// Build a tab list from anything string-like, in order
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(FileId::new).collect())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Never true for a constructed list
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FileId> {
        self.files.get(index)
    }

    pub fn first(&self) -> &FileId {
        &self.files[0]
    }

    /// Position of the first tab showing `file`
    pub fn position(&self, file: &FileId) -> Option<usize> {
        self.files.iter().position(|f| f == file)
    }

    pub fn contains(&self, file: &FileId) -> bool {
        self.position(file).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileId> {
        self.files.iter()
    }

    pub fn as_slice(&self) -> &[FileId] {
        &self.files
    }
}

impl TryFrom<Vec<FileId>> for TabList {
    type Error = TabError;

    fn try_from(files: Vec<FileId>) -> Result<Self> {
        Self::new(files)
    }
}

impl From<TabList> for Vec<FileId> {
    fn from(list: TabList) -> Self {
        list.files
    }
}

impl<'a> IntoIterator for &'a TabList {
    type Item = &'a FileId;
    type IntoIter = std::slice::Iter<'a, FileId>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
