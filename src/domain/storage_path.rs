use std::fmt;

use uuid::Uuid;

/// Location of a staged audio payload, relative to the store root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// Path for a fresh upload, prefixed so repeated filenames never collide.
    pub fn for_upload(filename: &str) -> Self {
        Self(format!("{}/{}", Uuid::new_v4(), filename))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
