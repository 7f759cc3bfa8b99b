//! Memoizing path facade over a SharePoint File or Folder handle.
//!
//! A `SharePointObject` owns exactly one handle. Every derived path is
//! computed on first read and cached in a `OnceLock`, so later reads (from
//! any thread) return the identical string even if the session behind the
//! handle changes.

mod kind;
mod snapshot;

pub use kind::ObjectType;
pub use snapshot::PathSnapshot;

use std::sync::{Arc, OnceLock};

use crate::error::ObjectError;
use crate::handle::ContentHandle;
use crate::paths::{self, PathRules};

static DEFAULT_RULES: OnceLock<Arc<PathRules>> = OnceLock::new();

fn default_rules() -> Arc<PathRules> {
    Arc::clone(DEFAULT_RULES.get_or_init(|| Arc::new(PathRules::default())))
}

/// A File or Folder handle together with its lazily resolved path family.
#[derive(Debug, Clone)]
pub struct SharePointObject<H> {
    handle: H,
    object_type: ObjectType,
    rules: Arc<PathRules>,
    host_name: OnceLock<String>,
    site_name: OnceLock<String>,
    host_path: OnceLock<String>,
    server_relative_path: OnceLock<String>,
    site_relative_path: OnceLock<String>,
    parent: OnceLock<String>,
}

impl<H: ContentHandle> SharePointObject<H> {
    /// Wrap a handle that may be absent.
    pub fn from_optional(handle: Option<H>) -> Result<Self, ObjectError> {
        match handle {
            Some(handle) => Self::new(handle),
            None => {
                tracing::debug!("rejected absent sharepoint handle");
                Err(ObjectError::InvalidArgument)
            }
        }
    }

    /// Wrap a handle using the default resolution rules.
    pub fn new(handle: H) -> Result<Self, ObjectError> {
        Self::with_rules(handle, default_rules())
    }

    /// Wrap a handle with explicit resolution rules.
    pub fn with_rules(handle: H, rules: Arc<PathRules>) -> Result<Self, ObjectError> {
        let object_type = ObjectType::resolve(handle.kind()).map_err(|e| {
            tracing::debug!(kind = handle.kind(), "rejected sharepoint handle");
            e
        })?;
        tracing::debug!(%object_type, name = handle.name(), "wrapped sharepoint handle");

        Ok(Self {
            handle,
            object_type,
            rules,
            host_name: OnceLock::new(),
            site_name: OnceLock::new(),
            host_path: OnceLock::new(),
            server_relative_path: OnceLock::new(),
            site_relative_path: OnceLock::new(),
            parent: OnceLock::new(),
        })
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn name(&self) -> &str {
        self.handle.name()
    }

    /// Host (authority) of the session the handle came from.
    pub fn host_name(&self) -> &str {
        cached(&self.host_name, "host_name", || {
            paths::host_name(&self.handle.context_url()).to_string()
        })
    }

    /// Site collection name; degenerate for host-only sessions (see
    /// [`paths::site_name`]).
    pub fn site_name(&self) -> &str {
        cached(&self.site_name, "site_name", || {
            paths::site_name(&self.handle.context_url()).to_string()
        })
    }

    /// Absolute URL of the object.
    pub fn host_path(&self) -> &str {
        cached(&self.host_path, "host_path", || {
            paths::host_path(
                self.host_name(),
                self.handle.server_relative_url(),
                self.handle.path_identity(),
                &self.rules,
            )
        })
    }

    /// Path of the object on its host, starting with `/`.
    pub fn server_relative_path(&self) -> &str {
        cached(&self.server_relative_path, "server_relative_path", || {
            paths::server_relative_path(self.host_path()).into_owned()
        })
    }

    /// Server-relative path with the `/sites/<site>/` prefix removed.
    pub fn site_relative_path(&self) -> &str {
        cached(&self.site_relative_path, "site_relative_path", || {
            paths::site_relative_path(self.server_relative_path()).to_string()
        })
    }

    /// Site-relative path of the containing folder; empty at the site root.
    pub fn parent(&self) -> &str {
        cached(&self.parent, "parent", || {
            paths::parent(self.site_relative_path()).to_string()
        })
    }

    /// Resolve every field into an owned, serializable record.
    pub fn snapshot(&self) -> PathSnapshot {
        PathSnapshot {
            object_type: self.object_type,
            name: self.name().to_string(),
            host_name: self.host_name().to_string(),
            site_name: self.site_name().to_string(),
            host_path: self.host_path().to_string(),
            server_relative_path: self.server_relative_path().to_string(),
            site_relative_path: self.site_relative_path().to_string(),
            parent: self.parent().to_string(),
        }
    }

    pub fn rules(&self) -> &PathRules {
        &self.rules
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn into_handle(self) -> H {
        self.handle
    }
}

fn cached<'a>(
    slot: &'a OnceLock<String>,
    field: &'static str,
    compute: impl FnOnce() -> String,
) -> &'a str {
    slot.get_or_init(|| {
        let value = compute();
        tracing::trace!(field, value = %value, "resolved path field");
        value
    })
}

#[cfg(test)]
mod tests;
