//! Pure path derivations behind `SharePointObject`.
//!
//! Every function here is total: malformed input yields a best-effort string,
//! never an error. Segment parsing is structured; only the nested-URL quirk in
//! `host_path` relies on pattern matching.

mod host;
mod host_path;
mod relative;

pub use host::{host_name, site_name};
pub use host_path::{core_path, host_path, nested_url, PathRules, FILE_MARKER, FOLDER_MARKER};
pub use relative::{parent, server_relative_path, site_relative_path};

/// Prefix of a site collection path.
pub(crate) const SITES_PREFIX: &str = "/sites/";

/// Returns everything after `scheme://`, or `None` if `url` has no scheme.
pub(crate) fn strip_scheme(url: &str) -> Option<&str> {
    let idx = url.find("://")?;
    let scheme = &url[..idx];
    let valid = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.');
    valid.then(|| &url[idx + 3..])
}
