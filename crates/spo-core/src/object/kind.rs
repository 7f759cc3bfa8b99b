use serde::Serialize;
use std::fmt;

use crate::error::ObjectError;

/// Kind of SharePoint object a `SharePointObject` wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObjectType {
    File,
    Folder,
}

impl ObjectType {
    /// Classify a handle's runtime type tag. Only exact `File` and `Folder`
    /// tags are accepted.
    pub fn resolve(kind: &str) -> Result<Self, ObjectError> {
        match kind {
            "File" => Ok(ObjectType::File),
            "Folder" => Ok(ObjectType::Folder),
            other => Err(ObjectError::UnsupportedType {
                kind: other.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::File => "File",
            ObjectType::Folder => "Folder",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
