//! Construction errors for wrapped SharePoint objects.

/// Error returned when a handle cannot be wrapped.
///
/// Only construction can fail; path derivations on an existing object never
/// return errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectError {
    /// No handle was supplied.
    #[error("the input object cannot be null")]
    InvalidArgument,
    /// The handle is neither a File nor a Folder.
    #[error("sharepoint object type {kind} is not supported")]
    UnsupportedType { kind: String },
}
