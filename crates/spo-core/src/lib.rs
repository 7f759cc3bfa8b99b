//! Path resolution for SharePoint Online file and folder handles.
//!
//! Wrap a handle in [`SharePointObject`] to read its absolute URL,
//! server-relative path, site-relative path and parent. Each value is derived
//! lazily from whatever the handle exposes and cached for the object's
//! lifetime.

pub mod config;
pub mod error;
pub mod handle;
pub mod logging;
pub mod object;
pub mod paths;

pub use error::ObjectError;
pub use handle::{ContentHandle, RemoteItem};
pub use object::{ObjectType, PathSnapshot, SharePointObject};
pub use paths::PathRules;
