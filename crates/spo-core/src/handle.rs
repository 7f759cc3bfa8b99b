//! Contract between the content-store client and this crate.
//!
//! The client produces handles; this crate only reads them. `RemoteItem` is a
//! plain record for handles captured outside a live session (e.g. JSON dumps).

use serde::Deserialize;
use std::borrow::Cow;

/// Read-only view of a remote File or Folder handle.
pub trait ContentHandle {
    /// Runtime type tag, e.g. `"File"`, `"Folder"`, `"List"`.
    fn kind(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Compound identity containing a `:file:` or `:folder:` marker followed
    /// by the core path fragment.
    fn path_identity(&self) -> &str;

    /// Server-relative URL, when the backend exposes one.
    fn server_relative_url(&self) -> Option<&str>;

    /// Absolute base URL of the session the handle came from.
    ///
    /// Session state is shared between handles, so implementors may hand out
    /// an owned copy.
    fn context_url(&self) -> Cow<'_, str>;
}

impl<T: ContentHandle + ?Sized> ContentHandle for Box<T> {
    fn kind(&self) -> &str {
        (**self).kind()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn path_identity(&self) -> &str {
        (**self).path_identity()
    }

    fn server_relative_url(&self) -> Option<&str> {
        (**self).server_relative_url()
    }

    fn context_url(&self) -> Cow<'_, str> {
        (**self).context_url()
    }
}

/// Plain handle record as emitted by the content-store client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteItem {
    #[serde(alias = "Kind", alias = "TypeName")]
    pub kind: String,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "pathIdentity", alias = "PathIdentity")]
    pub path_identity: String,
    #[serde(
        default,
        alias = "serverRelativeUrl",
        alias = "ServerRelativeUrl"
    )]
    pub server_relative_url: Option<String>,
    #[serde(alias = "contextUrl", alias = "ContextUrl")]
    pub context_url: String,
}

impl RemoteItem {
    /// Parse a single item from JSON.
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}

impl ContentHandle for RemoteItem {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn path_identity(&self) -> &str {
        &self.path_identity
    }

    fn server_relative_url(&self) -> Option<&str> {
        self.server_relative_url.as_deref()
    }

    fn context_url(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.context_url)
    }
}
